// ABOUTME: Route translation - rewrites subtype identifiers to the groups
// ABOUTME: namespace, relabels tools, and describes add/edit page renders.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::DEFAULT_IDENTIFIER;
use crate::hook::Flow;
use crate::i18n::Translator;
use crate::tools::ToolOption;

/// A routed request as the host hands it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    /// First URL segment.
    pub identifier: String,

    /// Page handler the host will dispatch to.
    pub handler: String,

    /// Remaining URL segments.
    pub segments: Vec<String>,
}

impl RouteRequest {
    /// Create a request; the handler starts out equal to the identifier.
    pub fn new(identifier: impl Into<String>, segments: Vec<String>) -> Self {
        let identifier = identifier.into();
        Self {
            handler: identifier.clone(),
            identifier,
            segments,
        }
    }
}

/// A page render described by the route chain, executed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRender {
    /// Host resource to render (e.g. "groups/add").
    pub resource: String,

    /// View vars handed to the resource.
    pub vars: serde_json::Value,
}

/// Context the route chain transforms.
#[derive(Debug, Clone)]
pub struct RouteContext {
    /// The request, rewritten in place.
    pub request: RouteRequest,

    /// Identifier the request originally arrived under.
    pub initial_identifier: String,

    /// The host's tool options, relabelled in place.
    pub tools: Vec<ToolOption>,

    /// Set when a transform decided to render a page directly.
    pub render: Option<PageRender>,
}

impl RouteContext {
    /// Create a context for an incoming request.
    pub fn new(request: RouteRequest, tools: Vec<ToolOption>) -> Self {
        Self {
            initial_identifier: request.identifier.clone(),
            request,
            tools,
            render: None,
        }
    }
}

/// Outcome of route dispatch.
///
/// Both variants hand the (possibly relabelled) tool options back to the
/// host, which must use them in place of its own list for the rest of the
/// request.
#[derive(Debug)]
pub enum RouteAction {
    /// Hand the rewritten request back to the host's page handler.
    Forward {
        request: RouteRequest,
        tools: Vec<ToolOption>,
    },

    /// The plugin rendered the page itself; the host must not continue.
    Rendered {
        body: String,
        tools: Vec<ToolOption>,
    },
}

/// Host-owned resource/template rendering.
#[async_trait]
pub trait ViewRenderer: Send + Sync {
    /// Render a resource with the given view vars.
    async fn render(&self, resource: &str, vars: serde_json::Value)
        -> Result<String, anyhow::Error>;
}

/// Rewrite a request arriving under `identifier` onto the groups handler.
///
/// Tool option labels are namespaced to the identifier so downstream
/// rendering picks identifier-specific copy, and nothing is enabled by
/// default so the group's own settings prevail. Segments carry through
/// unchanged.
pub fn translate(
    identifier: String,
    translator: Arc<dyn Translator>,
) -> impl Fn(&mut RouteContext) -> Flow {
    move |ctx: &mut RouteContext| {
        if ctx.request.identifier != identifier {
            return Flow::Continue;
        }

        if identifier != DEFAULT_IDENTIFIER {
            for tool in &mut ctx.tools {
                tool.label = translator.echo(&format!(
                    "{}:tools:{}:label",
                    identifier, tool.name
                ));
                tool.default_on = false;
            }
        }

        ctx.request.identifier = DEFAULT_IDENTIFIER.to_string();
        ctx.request.handler = DEFAULT_IDENTIFIER.to_string();
        Flow::Continue
    }
}

/// Intercept the groups `add`/`edit` pages.
///
/// Describes the alternate resource render in the context and halts, so the
/// host's default handler never runs for those paths. Everything else flows
/// through untouched.
pub fn intercept_edit_pages(ctx: &mut RouteContext) -> Flow {
    if ctx.request.identifier != DEFAULT_IDENTIFIER {
        return Flow::Continue;
    }

    let mut segments = ctx.request.segments.iter();
    match segments.next().map(String::as_str) {
        Some("add") => {
            let parent_guid = segments.next().cloned();
            let subtype = segments.next().cloned();
            let rest: Vec<&String> = segments.collect();
            ctx.render = Some(PageRender {
                resource: "groups/add".to_string(),
                vars: serde_json::json!({
                    "parent_guid": parent_guid,
                    "subtype": subtype,
                    "segments": rest,
                    "identifier": ctx.initial_identifier,
                }),
            });
            Flow::Halt
        }
        Some("edit") => {
            let guid = segments.next().cloned();
            let rest: Vec<&String> = segments.collect();
            ctx.render = Some(PageRender {
                resource: "groups/edit".to_string(),
                vars: serde_json::json!({
                    "guid": guid,
                    "segments": rest,
                    "identifier": ctx.initial_identifier,
                }),
            });
            Flow::Halt
        }
        _ => Flow::Continue,
    }
}
