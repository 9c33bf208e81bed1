// ABOUTME: Menu items - site navigation entries for identifier namespaces
// ABOUTME: and the owner-block items the label rewriter operates on.

use serde::{Deserialize, Serialize};

use crate::config::{SubtypeConfig, DEFAULT_IDENTIFIER};
use crate::i18n::Translator;

/// A menu entry, as the host's menu system models it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Machine name of the entry.
    pub name: String,

    /// Target href.
    pub href: String,

    /// Display text.
    pub text: String,
}

impl MenuItem {
    /// Create a menu item.
    pub fn new(
        name: impl Into<String>,
        href: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            text: text.into(),
        }
    }
}

/// Site menu entries for every non-default identifier namespace.
///
/// One `{identifier}/all` listing entry per distinct identifier, labelled
/// through the language table, in configuration order.
pub fn site_menu_items(config: &SubtypeConfig, translator: &dyn Translator) -> Vec<MenuItem> {
    config
        .identifiers()
        .into_iter()
        .filter(|identifier| *identifier != DEFAULT_IDENTIFIER)
        .map(|identifier| {
            MenuItem::new(
                identifier,
                format!("{}/all", identifier),
                translator.echo(identifier),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SubtypeOptions;
    use crate::i18n::StaticTranslator;

    #[test]
    fn test_one_entry_per_custom_identifier() {
        let mut config = SubtypeConfig::new();
        config.insert("team", SubtypeOptions::with_identifier("teams"));
        config.insert("squad", SubtypeOptions::with_identifier("teams"));
        config.insert("committee", SubtypeOptions::default());

        let translator = StaticTranslator::new().with("teams", "Teams");
        let items = site_menu_items(&config, &translator);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0], MenuItem::new("teams", "teams/all", "Teams"));
    }

    #[test]
    fn test_empty_config_yields_no_entries() {
        let config = SubtypeConfig::new();
        assert!(site_menu_items(&config, &StaticTranslator::new()).is_empty());
    }
}
