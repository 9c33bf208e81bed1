// ABOUTME: Tests for the subtype configuration resolver.
// ABOUTME: Covers identifier fallback, reverse lookup, and blob degradation.

use super::*;

fn team_config() -> SubtypeConfig {
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

#[test]
fn test_unknown_subtype_falls_back_to_groups() {
    let config = team_config();
    assert_eq!(config.identifier("club"), DEFAULT_IDENTIFIER);
    assert_eq!(SubtypeConfig::new().identifier("team"), DEFAULT_IDENTIFIER);
}

#[test]
fn test_configured_subtype_resolves_identifier() {
    let config = team_config();
    assert_eq!(config.identifier("team"), "teams");
}

#[test]
fn test_every_subtype_listed_under_its_identifier() {
    let mut config = team_config();
    config.insert("club", SubtypeOptions::with_identifier("clubs"));
    config.insert("committee", SubtypeOptions::default());

    for (subtype, _) in config.iter() {
        let identifier = config.identifier(subtype);
        assert!(config.subtypes_for_identifier(identifier).contains(&subtype));
    }
}

#[test]
fn test_reverse_lookup_collects_shared_identifier() {
    let mut config = SubtypeConfig::new();
    config.insert("team", SubtypeOptions::with_identifier("teams"));
    config.insert("squad", SubtypeOptions::with_identifier("teams"));
    config.insert("club", SubtypeOptions::with_identifier("clubs"));

    let subtypes = config.subtypes_for_identifier("teams");
    assert_eq!(subtypes, vec!["squad", "team"]);
    assert!(config.subtypes_for_identifier("groups").is_empty());
}

#[test]
fn test_identifiers_are_distinct() {
    let mut config = SubtypeConfig::new();
    config.insert("team", SubtypeOptions::with_identifier("teams"));
    config.insert("squad", SubtypeOptions::with_identifier("teams"));
    assert_eq!(config.identifiers(), vec!["teams"]);
}

#[test]
fn test_corrupt_blob_degrades_to_empty() {
    assert!(SubtypeConfig::from_blob("not json").is_empty());
    assert!(SubtypeConfig::from_blob("").is_empty());
    assert!(SubtypeConfig::from_blob("   ").is_empty());
}

#[test]
fn test_blob_round_trip() {
    let config = team_config();
    let blob = config.to_blob().unwrap();
    assert_eq!(SubtypeConfig::from_blob(&blob), config);
}

#[test]
fn test_partial_blob_fills_defaults() {
    let config = SubtypeConfig::from_blob(r#"{"team": {"identifier": "teams"}}"#);
    let options = config.options("team").unwrap();
    assert!(options.parents.is_empty());
    assert!(options.tools.is_empty());
    assert!(!options.preset_tools);
    assert!(!options.root);

    let config = SubtypeConfig::from_blob(r#"{"team": {"root": true}}"#);
    assert_eq!(config.identifier("team"), DEFAULT_IDENTIFIER);
}
