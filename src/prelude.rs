// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use group_subtypes::prelude::*;` to get started quickly.

pub use crate::admin::{AdminActions, EntityStore};
pub use crate::config::{
    FileStore, MemoryStore, SettingsStore, SubtypeConfig, SubtypeOptions, CONFIG_SETTING,
    DEFAULT_IDENTIFIER,
};
pub use crate::entity::Group;
pub use crate::error::{AdminError, ConfigError, RouteError, SearchError, SubtypesError};
pub use crate::hook::{Chain, Flow};
pub use crate::i18n::{KeyEcho, StaticTranslator, Translator};
pub use crate::menu::{site_menu_items, MenuItem};
pub use crate::permission::ParentGate;
pub use crate::plugin::{
    ListSubtypesContext, ModuleTitleContext, OwnerBlockContext, PageIdentifierContext, Plugin,
    Registry, UrlContext,
};
pub use crate::route::{
    intercept_edit_pages, translate, PageRender, RouteAction, RouteContext, RouteRequest,
    ViewRenderer,
};
pub use crate::search::{
    highlight_relevant, GroupSearch, SearchBackend, SearchParams, SearchResults, MATCHED_DESCRIPTION,
    MATCHED_TITLE,
};
pub use crate::tools::{
    apply_tool_defaults, configure_tools, update_fields_config, FieldConfig, FormInputs,
    ToolOption, HIDDEN,
};
pub use crate::url::{friendly_title, rewrite_group_url, rewrite_module_title, rewrite_owner_block};
