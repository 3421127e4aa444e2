use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Describes the backend that produced a response.
///
/// When handed to the response rewriter, every object carrying an `Id` gains
/// `BackendId`, `BackendName` and `BackendUrl` keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendInfo {
    pub id: String,
    pub name: String,
    pub url: String,
}

impl BackendInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
        }
    }

    pub(crate) fn inject_into(&self, map: &mut Map<String, Value>) {
        map.insert("BackendId".into(), Value::String(self.id.clone()));
        map.insert("BackendName".into(), Value::String(self.name.clone()));
        map.insert("BackendUrl".into(), Value::String(self.url.clone()));
    }
}
