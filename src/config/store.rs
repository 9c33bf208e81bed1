// ABOUTME: Settings store seam - plugin settings persisted by the host.
// ABOUTME: Ships an in-memory store and a JSON-file store for embedders.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Setting key the subtype configuration blob is stored under.
pub const CONFIG_SETTING: &str = "config";

/// Persisted plugin settings, owned by the host platform.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read a setting by key.
    async fn get(&self, key: &str) -> Result<Option<String>, anyhow::Error>;

    /// Write a setting.
    async fn set(&self, key: &str, value: &str) -> Result<(), anyhow::Error>;
}

/// In-memory settings store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    settings: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a single setting.
    pub async fn with(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .settings
            .write()
            .await
            .insert(key.into(), value.into());
        store
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, anyhow::Error> {
        Ok(self.settings.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), anyhow::Error> {
        self.settings
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Settings store backed by a single JSON file on disk.
///
/// The whole settings map is read and rewritten on each access; suitable for
/// development deployments and tests, not for contended writes.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_all(&self) -> Result<HashMap<String, String>, anyhow::Error> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl SettingsStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, anyhow::Error> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), anyhow::Error> {
        let mut settings = self.read_all().await?;
        settings.insert(key.to_string(), value.to_string());
        let contents = serde_json::to_string_pretty(&settings)?;
        tokio::fs::write(&self.path, contents).await?;
        Ok(())
    }
}
