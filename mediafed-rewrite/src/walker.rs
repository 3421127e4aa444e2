//! Recursive in-place rewriting of a parsed JSON document.

use serde_json::{Map, Value};

use crate::{BackendInfo, FieldRegistry, ID_FIELD};

/// Applies [`FieldRegistry`] rules to every object in a document.
///
/// For each key of each object:
/// - item id field holding a non-empty string: replaced with `transform(value)`
/// - item id field holding anything else: left alone
/// - server identity field: replaced when a replacement is configured
/// - any other key: its value is walked recursively
///
/// Registered keys are never descended into, whatever their value.
pub struct TreeRewriter<'a, F> {
    registry: &'a FieldRegistry,
    transform: F,
    server_id: Option<&'a str>,
    backend: Option<&'a BackendInfo>,
}

impl<'a, F> TreeRewriter<'a, F>
where
    F: Fn(&str) -> String,
{
    /// Creates a rewriter over the standard registry that only transforms item ids.
    pub fn new(transform: F) -> Self {
        Self {
            registry: FieldRegistry::standard(),
            transform,
            server_id: None,
            backend: None,
        }
    }

    #[must_use]
    pub fn with_registry(mut self, registry: &'a FieldRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replaces server identity values with `server_id`. An empty string disables replacement.
    #[must_use]
    pub fn replace_server_id(mut self, server_id: &'a str) -> Self {
        self.server_id = (!server_id.is_empty()).then_some(server_id);
        self
    }

    /// Tags every object that has an `Id` key with the backend's provenance.
    #[must_use]
    pub fn inject_backend(mut self, backend: Option<&'a BackendInfo>) -> Self {
        self.backend = backend;
        self
    }

    pub fn rewrite(&self, value: &mut Value) {
        match value {
            Value::Object(map) => self.rewrite_object(map),
            Value::Array(items) => {
                for item in items {
                    self.rewrite(item);
                }
            }
            _ => {}
        }
    }

    fn rewrite_object(&self, map: &mut Map<String, Value>) {
        for (key, value) in map.iter_mut() {
            if self.registry.is_item_id_field(key) {
                match value {
                    Value::String(id) if !id.is_empty() => {
                        let rewritten = (self.transform)(id.as_str());
                        *id = rewritten;
                    }
                    _ => {}
                }
            } else if self.registry.is_server_identity_field(key) {
                if let Some(server_id) = self.server_id {
                    *value = Value::String(server_id.to_owned());
                }
            } else {
                self.rewrite(value);
            }
        }

        // Injected after the pass so the new keys are not themselves rewritten.
        if let Some(backend) = self.backend {
            if map.contains_key(ID_FIELD) {
                backend.inject_into(map);
            }
        }
    }
}
