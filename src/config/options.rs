// ABOUTME: Subtype configuration - the mapping from subtype name to its
// ABOUTME: identifier, parent rules, tool set, and flags. Loaded once at init.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{SettingsStore, CONFIG_SETTING};

/// The canonical page identifier every lookup falls back to.
pub const DEFAULT_IDENTIFIER: &str = "groups";

fn default_identifier() -> String {
    DEFAULT_IDENTIFIER.to_string()
}

/// Configuration for a single group subtype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtypeOptions {
    /// URL path segment the subtype is served under.
    #[serde(default = "default_identifier")]
    pub identifier: String,

    /// Subtype names allowed to contain this subtype.
    #[serde(default)]
    pub parents: BTreeSet<String>,

    /// Tool names available to groups of this subtype.
    #[serde(default)]
    pub tools: BTreeSet<String>,

    /// When true, the full host tool list is offered unfiltered; when false,
    /// the edit form is narrowed to the `tools` set.
    #[serde(default)]
    pub preset_tools: bool,

    /// Whether groups of this subtype may exist without a parent.
    #[serde(default)]
    pub root: bool,
}

impl Default for SubtypeOptions {
    fn default() -> Self {
        Self {
            identifier: default_identifier(),
            parents: BTreeSet::new(),
            tools: BTreeSet::new(),
            preset_tools: false,
            root: false,
        }
    }
}

impl SubtypeOptions {
    /// Create options served under the given identifier.
    pub fn with_identifier(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    /// Add an allowed parent subtype.
    pub fn parent(mut self, subtype: impl Into<String>) -> Self {
        self.parents.insert(subtype.into());
        self
    }

    /// Add an allowed tool.
    pub fn tool(mut self, name: impl Into<String>) -> Self {
        self.tools.insert(name.into());
        self
    }

    /// Set the preset-tools flag.
    pub fn preset_tools(mut self, preset: bool) -> Self {
        self.preset_tools = preset;
        self
    }

    /// Set the root flag.
    pub fn root(mut self, root: bool) -> Self {
        self.root = root;
        self
    }
}

/// The full subtype configuration: subtype name to options.
///
/// Deserialized once from the persisted settings blob and treated as
/// immutable for the lifetime of the request. A missing or corrupt blob
/// degrades to the empty mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubtypeConfig {
    entries: BTreeMap<String, SubtypeOptions>,
}

impl SubtypeConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from the persisted blob.
    ///
    /// Corrupt input is not an error: the host stores this value as an
    /// opaque plugin setting, so anything unreadable yields the empty
    /// mapping and a warning.
    pub fn from_blob(blob: &str) -> Self {
        if blob.trim().is_empty() {
            return Self::new();
        }
        match serde_json::from_str(blob) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("discarding corrupt subtype configuration: {}", err);
                Self::new()
            }
        }
    }

    /// Serialize the configuration for persistence.
    pub fn to_blob(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Load the configuration from the plugin settings store.
    ///
    /// An absent setting or a store failure yields the empty mapping.
    pub async fn load(store: &dyn SettingsStore) -> Self {
        match store.get(CONFIG_SETTING).await {
            Ok(Some(blob)) => Self::from_blob(&blob),
            Ok(None) => Self::new(),
            Err(err) => {
                tracing::warn!("settings store unavailable, using empty config: {}", err);
                Self::new()
            }
        }
    }

    /// Insert or replace a subtype's options.
    pub fn insert(&mut self, subtype: impl Into<String>, options: SubtypeOptions) {
        self.entries.insert(subtype.into(), options);
    }

    /// Look up a subtype's options.
    pub fn options(&self, subtype: &str) -> Option<&SubtypeOptions> {
        self.entries.get(subtype)
    }

    /// Whether the subtype is configured.
    pub fn contains(&self, subtype: &str) -> bool {
        self.entries.contains_key(subtype)
    }

    /// Page identifier for a subtype, falling back to `"groups"` for
    /// anything not configured.
    pub fn identifier(&self, subtype: &str) -> &str {
        self.entries
            .get(subtype)
            .map(|options| options.identifier.as_str())
            .unwrap_or(DEFAULT_IDENTIFIER)
    }

    /// All subtypes served under the given identifier.
    ///
    /// Computed by a reverse scan of the mapping on each call; there is no
    /// precomputed index at this scale.
    pub fn subtypes_for_identifier(&self, identifier: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, options)| options.identifier == identifier)
            .map(|(subtype, _)| subtype.as_str())
            .collect()
    }

    /// Distinct identifiers in configuration order.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for options in self.entries.values() {
            if !seen.contains(&options.identifier.as_str()) {
                seen.push(options.identifier.as_str());
            }
        }
        seen
    }

    /// Configured subtype names.
    pub fn subtypes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SubtypeOptions)> {
        self.entries
            .iter()
            .map(|(subtype, options)| (subtype.as_str(), options))
    }

    /// Whether any subtype is configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of configured subtypes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
