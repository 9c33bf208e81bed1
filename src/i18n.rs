// ABOUTME: Translator seam - language strings are owned by the host platform.
// ABOUTME: Unregistered keys echo back unchanged, matching host behavior.

use std::collections::HashMap;

/// Language string lookup, owned by the host platform.
pub trait Translator: Send + Sync {
    /// Resolve a language key to display text.
    ///
    /// Implementations return the key itself when no translation is
    /// registered; callers rely on that for namespaced label keys.
    fn echo(&self, key: &str) -> String;
}

/// Translator that echoes every key back unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyEcho;

impl Translator for KeyEcho {
    fn echo(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Translator backed by a fixed string table.
#[derive(Debug, Clone, Default)]
pub struct StaticTranslator {
    strings: HashMap<String, String>,
}

impl StaticTranslator {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a translation.
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.strings.insert(key.into(), text.into());
        self
    }
}

impl Translator for StaticTranslator {
    fn echo(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
