// ABOUTME: Tests for route translation and the add/edit page interception.
// ABOUTME: Covers identifier rewriting, tool relabeling, and pass-through.

use std::sync::Arc;

use super::*;
use crate::hook::{Chain, Flow};
use crate::i18n::{KeyEcho, Translator};
use crate::tools::ToolOption;

fn translator() -> Arc<dyn Translator> {
    Arc::new(KeyEcho)
}

fn ctx(identifier: &str, segments: &[&str]) -> RouteContext {
    let segments = segments.iter().map(|s| s.to_string()).collect();
    RouteContext::new(
        RouteRequest::new(identifier, segments),
        vec![ToolOption::new("forum", "Group forum").default_on()],
    )
}

#[test]
fn test_translates_subtype_identifier_to_groups() {
    let mut ctx = ctx("teams", &["edit", "123"]);
    let transform = translate("teams".to_string(), translator());

    assert_eq!(transform(&mut ctx), Flow::Continue);
    assert_eq!(ctx.request.identifier, "groups");
    assert_eq!(ctx.request.handler, "groups");
    assert_eq!(ctx.request.segments, vec!["edit", "123"]);
    assert_eq!(ctx.initial_identifier, "teams");
}

#[test]
fn test_namespaces_tool_labels() {
    let mut ctx = ctx("teams", &["all"]);
    let transform = translate("teams".to_string(), translator());
    transform(&mut ctx);

    assert_eq!(ctx.tools[0].label, "teams:tools:forum:label");
    assert!(!ctx.tools[0].default_on);
}

#[test]
fn test_other_identifier_untouched() {
    let mut ctx = ctx("clubs", &["all"]);
    let transform = translate("teams".to_string(), translator());
    transform(&mut ctx);

    assert_eq!(ctx.request.identifier, "clubs");
    assert_eq!(ctx.tools[0].label, "Group forum");
}

#[test]
fn test_intercepts_add_page() {
    let mut ctx = ctx("groups", &["add", "7", "team", "tab"]);
    assert_eq!(intercept_edit_pages(&mut ctx), Flow::Halt);

    let render = ctx.render.unwrap();
    assert_eq!(render.resource, "groups/add");
    assert_eq!(render.vars["parent_guid"], "7");
    assert_eq!(render.vars["subtype"], "team");
    assert_eq!(render.vars["segments"][0], "tab");
    assert_eq!(render.vars["identifier"], "groups");
}

#[test]
fn test_intercepts_edit_page() {
    let mut ctx = ctx("groups", &["edit", "123"]);
    assert_eq!(intercept_edit_pages(&mut ctx), Flow::Halt);

    let render = ctx.render.unwrap();
    assert_eq!(render.resource, "groups/edit");
    assert_eq!(render.vars["guid"], "123");
}

#[test]
fn test_other_pages_flow_through() {
    let mut ctx = ctx("groups", &["profile", "123"]);
    assert_eq!(intercept_edit_pages(&mut ctx), Flow::Continue);
    assert!(ctx.render.is_none());

    let mut empty = ctx_empty();
    assert_eq!(intercept_edit_pages(&mut empty), Flow::Continue);
}

fn ctx_empty() -> RouteContext {
    RouteContext::new(RouteRequest::new("groups", Vec::new()), Vec::new())
}

#[test]
fn test_chained_translation_keeps_initial_identifier() {
    let mut chain: Chain<RouteContext> = Chain::new();
    chain.register(1, translate("teams".to_string(), translator()));
    chain.register(500, intercept_edit_pages);

    let mut ctx = ctx("teams", &["add", "0", "team"]);
    assert_eq!(chain.run(&mut ctx), Flow::Halt);

    let render = ctx.render.unwrap();
    assert_eq!(render.vars["identifier"], "teams");
}
