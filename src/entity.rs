// ABOUTME: Defines the Group type - the slice of the host's group entity this
// ABOUTME: plugin reads, plus non-persisted volatile data written by search.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A group entity as seen by this plugin.
///
/// The host platform owns the full entity; this type carries only the fields
/// the plugin reads (subtype, name, description, container) and a volatile
/// data map that is never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Group {
    /// Entity guid assigned by the host platform.
    pub guid: u64,

    /// Display name of the group.
    pub name: String,

    /// Description of the group.
    #[serde(default)]
    pub description: String,

    /// Configured subtype name, if the group has one.
    #[serde(default)]
    pub subtype: Option<String>,

    /// Guid of the containing entity, if any.
    #[serde(default)]
    pub container_guid: Option<u64>,

    /// Non-persisted per-request annotations (e.g. search highlights).
    #[serde(skip)]
    pub volatile: HashMap<String, serde_json::Value>,
}

impl Group {
    /// Create a new group with the given guid and name.
    pub fn new(guid: u64, name: impl Into<String>) -> Self {
        Self {
            guid,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the subtype.
    pub fn subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the container guid.
    pub fn container(mut self, guid: u64) -> Self {
        self.container_guid = Some(guid);
        self
    }

    /// Attach volatile data under the given key.
    pub fn set_volatile(&mut self, key: impl Into<String>, value: impl Serialize) {
        if let Ok(v) = serde_json::to_value(value) {
            self.volatile.insert(key.into(), v);
        }
    }

    /// Read volatile data by key.
    pub fn volatile(&self, key: &str) -> Option<&serde_json::Value> {
        self.volatile.get(key)
    }
}
