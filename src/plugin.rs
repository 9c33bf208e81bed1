// ABOUTME: Plugin assembly - builds the hook-chain registry from the subtype
// ABOUTME: configuration once at startup and exposes the extension points.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::config::{SubtypeConfig, DEFAULT_IDENTIFIER};
use crate::entity::Group;
use crate::error::{ConfigError, RouteError};
use crate::hook::{Chain, Flow};
use crate::i18n::Translator;
use crate::menu::{site_menu_items, MenuItem};
use crate::permission::ParentGate;
use crate::route::{
    intercept_edit_pages, translate, RouteAction, RouteContext, RouteRequest, ViewRenderer,
};
use crate::search::{GroupSearch, SearchBackend, SearchParams, SearchResults};
use crate::tools::{configure_tools, update_fields_config, FieldConfig, FormInputs, ToolOption};
use crate::url::{rewrite_group_url, rewrite_module_title, rewrite_owner_block};

/// Context for resolving a subtype's page identifier.
#[derive(Debug, Clone)]
pub struct PageIdentifierContext {
    /// Subtype being resolved.
    pub subtype: String,

    /// Resolved identifier; starts at the host default.
    pub identifier: String,
}

impl PageIdentifierContext {
    /// Create a context for the given subtype.
    pub fn new(subtype: impl Into<String>) -> Self {
        Self {
            subtype: subtype.into(),
            identifier: DEFAULT_IDENTIFIER.to_string(),
        }
    }
}

/// Context for listing the subtypes shown under an identifier.
#[derive(Debug, Clone)]
pub struct ListSubtypesContext {
    /// Page identifier being listed.
    pub identifier: String,

    /// Collected subtypes, de-duplicated across transforms.
    pub subtypes: Vec<String>,
}

impl ListSubtypesContext {
    /// Create a context for the given identifier.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            subtypes: Vec::new(),
        }
    }
}

/// Context for entity URL resolution.
#[derive(Debug, Clone)]
pub struct UrlContext {
    /// The group whose URL is being built.
    pub group: Group,

    /// Rewritten URL, if any transform produced one.
    pub url: Option<String>,
}

/// Context for owner-block menu construction.
#[derive(Debug, Clone)]
pub struct OwnerBlockContext {
    /// The group the owner block belongs to.
    pub group: Group,

    /// Menu items, relabelled in place.
    pub items: Vec<MenuItem>,
}

/// Context for the group profile module title.
#[derive(Debug, Clone)]
pub struct ModuleTitleContext {
    /// Identifier namespace the page is rendered under.
    pub context: String,

    /// Module title, rewritten in place.
    pub title: String,
}

/// The hook-chain registry, one chain per extension point.
///
/// Assembled once at plugin init; embedders may register additional
/// transforms before serving requests.
#[derive(Debug, Default)]
pub struct Registry {
    /// Route translation and page interception.
    pub route: Chain<RouteContext>,

    /// Subtype to page identifier resolution.
    pub page_identifier: Chain<PageIdentifierContext>,

    /// Identifier to subtype listing.
    pub list_subtypes: Chain<ListSubtypesContext>,

    /// Entity URL rewriting.
    pub entity_url: Chain<UrlContext>,

    /// Owner-block menu labeling.
    pub owner_block: Chain<OwnerBlockContext>,

    /// Profile module title rewriting.
    pub module_title: Chain<ModuleTitleContext>,

    bound_routes: BTreeSet<String>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a route transform to an identifier namespace.
    ///
    /// Each identifier may be bound exactly once; a second binding is a
    /// configuration error, not a silent skip.
    pub fn bind_route<F>(
        &mut self,
        identifier: &str,
        priority: i32,
        transform: F,
    ) -> Result<(), ConfigError>
    where
        F: Fn(&mut RouteContext) -> Flow + Send + Sync + 'static,
    {
        if !self.bound_routes.insert(identifier.to_string()) {
            return Err(ConfigError::DuplicateIdentifier(identifier.to_string()));
        }
        self.route.register(priority, transform);
        Ok(())
    }

    /// Identifiers with a route binding.
    pub fn bound_routes(&self) -> impl Iterator<Item = &str> {
        self.bound_routes.iter().map(String::as_str)
    }
}

/// The assembled plugin: immutable configuration plus the chain registry.
pub struct Plugin {
    config: Arc<SubtypeConfig>,
    translator: Arc<dyn Translator>,
    registry: Registry,
    search: GroupSearch,
    site_menu: Vec<MenuItem>,
}

impl Plugin {
    /// Build the plugin from a loaded configuration.
    ///
    /// Registers one route binding per distinct identifier, the page
    /// identifier and subtype listing resolvers, the URL and label
    /// rewriters, and the site menu entries. Fails if an identifier would
    /// be bound to a route twice.
    pub fn init(
        config: SubtypeConfig,
        translator: Arc<dyn Translator>,
        table_prefix: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = Arc::new(config);
        let mut registry = Registry::new();

        for identifier in config.identifiers() {
            registry.bind_route(
                identifier,
                1,
                translate(identifier.to_string(), Arc::clone(&translator)),
            )?;
        }
        registry.route.register(500, intercept_edit_pages);

        let cfg = Arc::clone(&config);
        registry.page_identifier.register(500, move |ctx| {
            ctx.identifier = cfg.identifier(&ctx.subtype).to_string();
            Flow::Continue
        });

        let cfg = Arc::clone(&config);
        registry.list_subtypes.register(500, move |ctx| {
            for subtype in cfg.subtypes_for_identifier(&ctx.identifier) {
                if !ctx.subtypes.iter().any(|existing| existing == subtype) {
                    ctx.subtypes.push(subtype.to_string());
                }
            }
            Flow::Continue
        });

        let cfg = Arc::clone(&config);
        registry.entity_url.register(500, move |ctx| {
            if let Some(url) = rewrite_group_url(&cfg, &ctx.group) {
                ctx.url = Some(url);
            }
            Flow::Continue
        });

        let cfg = Arc::clone(&config);
        let tr = Arc::clone(&translator);
        registry.owner_block.register(999, move |ctx| {
            rewrite_owner_block(&cfg, &ctx.group, &mut ctx.items, tr.as_ref());
            Flow::Continue
        });

        let tr = Arc::clone(&translator);
        registry.module_title.register(999, move |ctx| {
            if let Some(title) = rewrite_module_title(&ctx.context, &ctx.title, tr.as_ref()) {
                ctx.title = title;
            }
            Flow::Continue
        });

        let site_menu = site_menu_items(&config, translator.as_ref());
        let search = GroupSearch::new(table_prefix);

        tracing::info!(
            "group subtypes initialized: {} subtypes under {} identifiers",
            config.len(),
            config.identifiers().len()
        );

        Ok(Self {
            config,
            translator,
            registry,
            search,
            site_menu,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &SubtypeConfig {
        &self.config
    }

    /// The chain registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Mutable chain registry, for embedders extending the chains at init.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Site menu entries for the configured identifier namespaces.
    pub fn site_menu(&self) -> &[MenuItem] {
        &self.site_menu
    }

    /// Subtype names to register as group entity types with the host.
    pub fn entity_subtypes(&self) -> Vec<&str> {
        self.config.subtypes().collect()
    }

    /// Dispatch an incoming request through the route chain.
    ///
    /// Either forwards the rewritten request (and relabelled tools) back to
    /// the host, or renders the intercepted add/edit page through the
    /// host's renderer.
    pub async fn dispatch(
        &self,
        request: RouteRequest,
        tools: Vec<ToolOption>,
        renderer: &dyn ViewRenderer,
    ) -> Result<RouteAction, RouteError> {
        let mut ctx = RouteContext::new(request, tools);
        self.registry.route.run(&mut ctx);

        match ctx.render {
            Some(render) => {
                let body = renderer
                    .render(&render.resource, render.vars)
                    .await
                    .map_err(|source| RouteError::Render {
                        resource: render.resource.clone(),
                        source,
                    })?;
                Ok(RouteAction::Rendered {
                    body,
                    tools: ctx.tools,
                })
            }
            None => Ok(RouteAction::Forward {
                request: ctx.request,
                tools: ctx.tools,
            }),
        }
    }

    /// Run the route chain without rendering, returning the full context.
    pub fn translate_route(&self, request: RouteRequest, tools: Vec<ToolOption>) -> RouteContext {
        let mut ctx = RouteContext::new(request, tools);
        self.registry.route.run(&mut ctx);
        ctx
    }

    /// Page identifier for a group subtype.
    pub fn page_identifier(&self, subtype: &str) -> String {
        let mut ctx = PageIdentifierContext::new(subtype);
        self.registry.page_identifier.run(&mut ctx);
        ctx.identifier
    }

    /// Subtypes shown under a page identifier.
    pub fn list_subtypes(&self, identifier: &str) -> Vec<String> {
        let mut ctx = ListSubtypesContext::new(identifier);
        self.registry.list_subtypes.run(&mut ctx);
        ctx.subtypes
    }

    /// Resolved URL for a group, if its identifier rewrites it.
    pub fn group_url(&self, group: &Group) -> Option<String> {
        let mut ctx = UrlContext {
            group: group.clone(),
            url: None,
        };
        self.registry.entity_url.run(&mut ctx);
        ctx.url
    }

    /// Owner-block menu items for a group, relabelled for its namespace.
    pub fn owner_block(&self, group: &Group, items: Vec<MenuItem>) -> Vec<MenuItem> {
        let mut ctx = OwnerBlockContext {
            group: group.clone(),
            items,
        };
        self.registry.owner_block.run(&mut ctx);
        ctx.items
    }

    /// Profile module title for a page context.
    pub fn module_title(&self, context: &str, title: &str) -> String {
        let mut ctx = ModuleTitleContext {
            context: context.to_string(),
            title: title.to_string(),
        };
        self.registry.module_title.run(&mut ctx);
        ctx.title
    }

    /// Parent/child permission gate over the configuration.
    pub fn parent_gate(&self) -> ParentGate<'_> {
        ParentGate::new(&self.config)
    }

    /// Narrow the host tool list for a subtype's edit form.
    pub fn configure_tools(&self, subtype: &str, tools: Vec<ToolOption>) -> Vec<ToolOption> {
        configure_tools(&self.config, subtype, tools)
    }

    /// Apply subtype form behavior to an edit submission.
    pub fn update_fields_config(
        &self,
        entity: Option<&Group>,
        tools: &[ToolOption],
        inputs: &mut FormInputs,
        fields: &mut FieldConfig,
    ) {
        update_fields_config(&self.config, entity, tools, inputs, fields);
    }

    /// Run the augmented group search through the host backend.
    pub async fn search(
        &self,
        params: &SearchParams,
        backend: &dyn SearchBackend,
    ) -> Result<SearchResults, crate::error::SearchError> {
        self.search.execute(params, backend).await
    }

    /// The translator the plugin was built with.
    pub fn translator(&self) -> &dyn Translator {
        self.translator.as_ref()
    }
}

impl std::fmt::Debug for Plugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plugin")
            .field("subtypes", &self.config.len())
            .field("registry", &self.registry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SubtypeOptions;
    use crate::i18n::KeyEcho;

    fn config() -> SubtypeConfig {
        let mut config = SubtypeConfig::new();
        config.insert(
            "team",
            SubtypeOptions::with_identifier("teams")
                .parent("team")
                .tool("forum")
                .root(true),
        );
        config
    }

    fn plugin() -> Plugin {
        Plugin::init(config(), Arc::new(KeyEcho), "app_").unwrap()
    }

    #[test]
    fn test_page_identifier_resolution() {
        let plugin = plugin();
        assert_eq!(plugin.page_identifier("team"), "teams");
        assert_eq!(plugin.page_identifier("unknown"), "groups");
    }

    #[test]
    fn test_list_subtypes_for_identifier() {
        let plugin = plugin();
        assert_eq!(plugin.list_subtypes("teams"), vec!["team"]);
        assert!(plugin.list_subtypes("groups").is_empty());
    }

    #[test]
    fn test_duplicate_route_binding_rejected() {
        let mut registry = Registry::new();
        registry
            .bind_route("teams", 1, |_| Flow::Continue)
            .unwrap();

        let err = registry
            .bind_route("teams", 1, |_| Flow::Continue)
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateIdentifier(_)));
    }

    #[test]
    fn test_shared_identifier_binds_once() {
        let mut config = config();
        config.insert("squad", SubtypeOptions::with_identifier("teams"));

        let plugin = Plugin::init(config, Arc::new(KeyEcho), "app_").unwrap();
        assert_eq!(plugin.registry().bound_routes().count(), 1);

        let mut listed = plugin.list_subtypes("teams");
        listed.sort();
        assert_eq!(listed, vec!["squad", "team"]);
    }

    #[test]
    fn test_site_menu_built_at_init() {
        let plugin = plugin();
        assert_eq!(plugin.site_menu().len(), 1);
        assert_eq!(plugin.site_menu()[0].href, "teams/all");
    }

    #[test]
    fn test_entity_subtypes_registered() {
        let plugin = plugin();
        assert_eq!(plugin.entity_subtypes(), vec!["team"]);
    }

    #[test]
    fn test_group_url_through_chain() {
        let plugin = plugin();
        let group = Group::new(9, "Ops Team").subtype("team");
        assert_eq!(
            plugin.group_url(&group).as_deref(),
            Some("teams/profile/9/ops-team")
        );
        assert!(plugin.group_url(&Group::new(9, "Plain")).is_none());
    }

    #[test]
    fn test_parent_gate_canonical_examples() {
        let plugin = plugin();
        let gate = plugin.parent_gate();

        assert!(gate.can_parent(None, "team"));
        let other = Group::new(1, "Misc").subtype("other");
        assert!(!gate.can_parent(Some(&other), "team"));
    }
}
