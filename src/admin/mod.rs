// ABOUTME: Admin actions - thin handlers for adding subtypes, updating their
// ABOUTME: configuration, and moving an entity between subtypes.

use async_trait::async_trait;

use crate::config::{SettingsStore, SubtypeConfig, SubtypeOptions, CONFIG_SETTING};
use crate::entity::Group;
use crate::error::{AdminError, ConfigError};


/// Entity lookup and mutation, owned by the host platform.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Fetch a group entity by guid.
    async fn get_group(&self, guid: u64) -> Result<Option<Group>, anyhow::Error>;

    /// Persist a group's subtype.
    async fn set_subtype(&self, guid: u64, subtype: &str) -> Result<(), anyhow::Error>;
}

/// Admin request handlers over the configuration store.
///
/// Each handler mutates the passed configuration and persists it; running
/// workers pick the change up on their next restart, an accepted staleness
/// window.
pub struct AdminActions<'a> {
    settings: &'a dyn SettingsStore,
}

impl<'a> AdminActions<'a> {
    /// Create the handlers over a settings store.
    pub fn new(settings: &'a dyn SettingsStore) -> Self {
        Self { settings }
    }

    /// Add a new subtype with default options.
    pub async fn add_subtype(
        &self,
        config: &mut SubtypeConfig,
        name: &str,
    ) -> Result<(), AdminError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AdminError::EmptyName);
        }
        if config.contains(name) {
            return Err(AdminError::DuplicateSubtype(name.to_string()));
        }

        config.insert(name, SubtypeOptions::default());
        self.persist(config).await?;
        tracing::info!("added group subtype '{}'", name);
        Ok(())
    }

    /// Replace a subtype's options.
    pub async fn update_config(
        &self,
        config: &mut SubtypeConfig,
        name: &str,
        options: SubtypeOptions,
    ) -> Result<(), AdminError> {
        if !config.contains(name) {
            return Err(AdminError::UnknownSubtype(name.to_string()));
        }

        config.insert(name, options);
        self.persist(config).await?;
        tracing::info!("updated configuration for subtype '{}'", name);
        Ok(())
    }

    /// Move a group entity to another configured subtype.
    pub async fn change_subtype(
        &self,
        config: &SubtypeConfig,
        entities: &dyn EntityStore,
        guid: u64,
        subtype: &str,
    ) -> Result<(), AdminError> {
        if !config.contains(subtype) {
            return Err(AdminError::UnknownSubtype(subtype.to_string()));
        }

        let group = entities
            .get_group(guid)
            .await
            .map_err(AdminError::Store)?
            .ok_or(AdminError::GroupNotFound(guid))?;

        entities
            .set_subtype(group.guid, subtype)
            .await
            .map_err(AdminError::Store)?;
        tracing::info!("group {} moved to subtype '{}'", guid, subtype);
        Ok(())
    }

    async fn persist(&self, config: &SubtypeConfig) -> Result<(), AdminError> {
        let blob = config.to_blob().map_err(ConfigError::Serialize)?;
        self.settings
            .set(CONFIG_SETTING, &blob)
            .await
            .map_err(|err| AdminError::Config(ConfigError::Store(err)))
    }
}
