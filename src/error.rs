// ABOUTME: Defines all error types for the group-subtypes library using thiserror.
// ABOUTME: Each submodule has its own error enum, unified under SubtypesError.

/// Top-level error type for the group-subtypes library.
#[derive(Debug, thiserror::Error)]
pub enum SubtypesError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Route error: {0}")]
    Route(#[from] RouteError),

    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    #[error("Admin error: {0}")]
    Admin(#[from] AdminError),
}

/// Errors from configuration handling and registry assembly.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Identifier '{0}' is already bound to a route")]
    DuplicateIdentifier(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Settings store error: {0}")]
    Store(#[source] anyhow::Error),
}

/// Errors from route dispatch.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("View render failed for '{resource}': {source}")]
    Render {
        resource: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Errors from search execution.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Search backend error: {0}")]
    Backend(#[source] anyhow::Error),
}

/// Errors from admin actions.
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("Subtype '{0}' is not configured")]
    UnknownSubtype(String),

    #[error("Subtype '{0}' already exists")]
    DuplicateSubtype(String),

    #[error("Subtype name may not be empty")]
    EmptyName,

    #[error("Group entity {0} not found")]
    GroupNotFound(u64),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Entity store error: {0}")]
    Store(#[source] anyhow::Error),
}
