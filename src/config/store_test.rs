// ABOUTME: Tests for the settings store implementations.
// ABOUTME: Covers load fallbacks and the file-backed store round trip.

use super::*;

struct FailingStore;

#[async_trait::async_trait]
impl SettingsStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, anyhow::Error> {
        Err(anyhow::anyhow!("database gone"))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), anyhow::Error> {
        Err(anyhow::anyhow!("database gone"))
    }
}

#[tokio::test]
async fn test_load_from_memory_store() {
    let blob = r#"{"team": {"identifier": "teams", "root": true}}"#;
    let store = MemoryStore::with(CONFIG_SETTING, blob).await;

    let config = SubtypeConfig::load(&store).await;
    assert_eq!(config.identifier("team"), "teams");
}

#[tokio::test]
async fn test_load_missing_setting_yields_empty() {
    let store = MemoryStore::new();
    let config = SubtypeConfig::load(&store).await;
    assert!(config.is_empty());
}

#[tokio::test]
async fn test_load_store_failure_yields_empty() {
    let config = SubtypeConfig::load(&FailingStore).await;
    assert!(config.is_empty());
}

#[tokio::test]
async fn test_load_corrupt_setting_yields_empty() {
    let store = MemoryStore::with(CONFIG_SETTING, "a:1:{corrupt").await;
    let config = SubtypeConfig::load(&store).await;
    assert!(config.is_empty());
}

#[tokio::test]
async fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("settings.json"));

    assert!(store.get(CONFIG_SETTING).await.unwrap().is_none());

    store.set(CONFIG_SETTING, r#"{"team": {}}"#).await.unwrap();
    store.set("other", "value").await.unwrap();

    let blob = store.get(CONFIG_SETTING).await.unwrap().unwrap();
    assert_eq!(blob, r#"{"team": {}}"#);

    let config = SubtypeConfig::load(&store).await;
    assert!(config.contains("team"));
}
