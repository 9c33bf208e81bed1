// ABOUTME: The parent gate - decides whether a group subtype may live under a
// ABOUTME: given parent entity, or at the top level when no parent is passed.

use crate::config::SubtypeConfig;
use crate::entity::Group;

/// Evaluates parent/child containment rules for configured subtypes.
///
/// A single-level check only: the gate never recurses through ancestors and
/// never looks for cycles.
#[derive(Debug, Clone, Copy)]
pub struct ParentGate<'a> {
    config: &'a SubtypeConfig,
}

impl<'a> ParentGate<'a> {
    /// Create a gate over the given configuration.
    pub fn new(config: &'a SubtypeConfig) -> Self {
        Self { config }
    }

    /// Whether a group of `subtype` may be contained by `parent`.
    ///
    /// With no parent this asks whether the subtype may exist at the top
    /// level, which is its configured `root` flag. Empty configuration and
    /// unconfigured subtypes always deny.
    pub fn can_parent(&self, parent: Option<&Group>, subtype: &str) -> bool {
        if self.config.is_empty() {
            return false;
        }

        let Some(options) = self.config.options(subtype) else {
            return false;
        };

        match parent {
            None => options.root,
            Some(parent) => parent
                .subtype
                .as_deref()
                .is_some_and(|parent_subtype| options.parents.contains(parent_subtype)),
        }
    }

    /// All configured subtypes the given parent may contain.
    pub fn allowed_subtypes(&self, parent: Option<&Group>) -> Vec<&'a str> {
        self.config
            .subtypes()
            .filter(|subtype| self.can_parent(parent, subtype))
            .collect()
    }
}
