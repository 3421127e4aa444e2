//! Allow-lists of JSON keys the rewriter acts on.

use std::collections::HashSet;
use std::sync::LazyLock;

/// The key whose presence marks an object as an item for provenance injection.
pub const ID_FIELD: &str = "Id";

/// Keys whose string values are per-item identifiers.
pub const ITEM_ID_FIELDS: &[&str] = &[
    "Id",
    "ParentId",
    "SeriesId",
    "SeasonId",
    "AlbumId",
    "ItemId",
    "ChannelId",
    "PlaylistItemId",
    "EpisodeId",
    "MovieId",
    "MediaSourceId",
    "ParentBackdropItemId",
    "ParentLogoItemId",
    "ParentThumbItemId",
    "ParentArtItemId",
    "ParentPrimaryImageItemId",
];

/// Keys that identify a server and are replaced wholesale.
pub const SERVER_IDENTITY_FIELDS: &[&str] = &["ServerId"];

static STANDARD: LazyLock<FieldRegistry> =
    LazyLock::new(|| FieldRegistry::new(ITEM_ID_FIELDS, SERVER_IDENTITY_FIELDS));

/// Exact-match, case-sensitive key sets. Never mutated after construction.
///
/// These lists must track the upstream media-server API: a new id-bearing
/// field that is missing here leaks backend ids to clients.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    item_ids: HashSet<&'static str>,
    server_identity: HashSet<&'static str>,
}

impl FieldRegistry {
    /// Builds a registry. A key listed in both sets is treated as an item id.
    pub fn new(item_ids: &[&'static str], server_identity: &[&'static str]) -> Self {
        let item_ids: HashSet<_> = item_ids.iter().copied().collect();
        let server_identity = server_identity
            .iter()
            .copied()
            .filter(|key| !item_ids.contains(key))
            .collect();
        Self {
            item_ids,
            server_identity,
        }
    }

    /// The process-wide registry for the upstream media-server API.
    pub fn standard() -> &'static FieldRegistry {
        &STANDARD
    }

    pub fn is_item_id_field(&self, key: &str) -> bool {
        self.item_ids.contains(key)
    }

    pub fn is_server_identity_field(&self, key: &str) -> bool {
        self.server_identity.contains(key)
    }

    /// True when the key is in either set. Such keys are never descended into.
    pub fn is_registered(&self, key: &str) -> bool {
        self.is_item_id_field(key) || self.is_server_identity_field(key)
    }
}
