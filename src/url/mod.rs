// ABOUTME: URL and label rewriters - identifier-specific profile URLs and
// ABOUTME: menu/module wording under non-default namespaces.

mod labels;
mod slug;

pub use labels::*;
pub use slug::*;

use crate::config::{SubtypeConfig, DEFAULT_IDENTIFIER};
use crate::entity::Group;

/// Rewrite a group's canonical URL to its identifier namespace.
///
/// Groups without a subtype, and subtypes served under the default
/// identifier, keep the host's URL (`None`).
pub fn rewrite_group_url(config: &SubtypeConfig, group: &Group) -> Option<String> {
    let subtype = group.subtype.as_deref()?;
    let identifier = config.identifier(subtype);
    if identifier == DEFAULT_IDENTIFIER {
        return None;
    }
    Some(format!(
        "{}/profile/{}/{}",
        identifier,
        group.guid,
        friendly_title(&group.name)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SubtypeOptions;

    #[test]
    fn test_rewrites_url_for_custom_identifier() {
        let mut config = SubtypeConfig::new();
        config.insert("team", SubtypeOptions::with_identifier("teams"));

        let group = Group::new(123, "Ops Team").subtype("team");
        assert_eq!(
            rewrite_group_url(&config, &group).as_deref(),
            Some("teams/profile/123/ops-team")
        );
    }

    #[test]
    fn test_default_identifier_keeps_host_url() {
        let mut config = SubtypeConfig::new();
        config.insert("committee", SubtypeOptions::default());

        let group = Group::new(5, "Board").subtype("committee");
        assert!(rewrite_group_url(&config, &group).is_none());
    }

    #[test]
    fn test_subtypeless_group_keeps_host_url() {
        let config = SubtypeConfig::new();
        let group = Group::new(5, "Board");
        assert!(rewrite_group_url(&config, &group).is_none());
    }
}
