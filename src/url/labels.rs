// ABOUTME: Label rewriters - owner-block menu text and group profile module
// ABOUTME: titles adjusted under non-default identifier namespaces.

use regex::Regex;

use crate::config::{SubtypeConfig, DEFAULT_IDENTIFIER};
use crate::entity::Group;
use crate::i18n::Translator;
use crate::menu::MenuItem;

/// Relabel owner-block menu items for a group's identifier namespace.
///
/// Groups under the default identifier, and groups without a subtype, are
/// left alone; otherwise every item's text is resolved through the
/// identifier-namespaced language key.
pub fn rewrite_owner_block(
    config: &SubtypeConfig,
    group: &Group,
    items: &mut [MenuItem],
    translator: &dyn Translator,
) {
    let Some(subtype) = group.subtype.as_deref() else {
        return;
    };

    let identifier = config.identifier(subtype);
    if identifier == DEFAULT_IDENTIFIER {
        return;
    }

    for item in items {
        item.text = translator.echo(&format!("{}:tools:{}", identifier, item.name));
    }
}

/// Strip generic "group" wording from a profile module title.
///
/// Only applies when the page context is a non-default identifier; returns
/// `None` when the title should stand. The generic words come from the
/// host's language table, are removed case-insensitively, and the remainder
/// is trimmed with its first letter uppercased.
pub fn rewrite_module_title(
    context: &str,
    title: &str,
    translator: &dyn Translator,
) -> Option<String> {
    if context == DEFAULT_IDENTIFIER {
        return None;
    }

    let mut words = [
        translator.echo("groups:group"),
        translator.echo("item:group"),
    ];
    // longest first, so the plural form is not left with a trailing "s"
    words.sort_by_key(|word| std::cmp::Reverse(word.len()));
    let pattern = format!(
        "(?i){}|{}",
        regex::escape(&words[0]),
        regex::escape(&words[1])
    );
    let re = Regex::new(&pattern).ok()?;

    let stripped = re.replace_all(title, "");
    Some(ucfirst(stripped.trim()))
}

fn ucfirst(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
