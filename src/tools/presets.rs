// ABOUTME: Tool options - the host's toggleable group features, narrowed per
// ABOUTME: subtype before the edit form renders.

use serde::{Deserialize, Serialize};

use crate::config::SubtypeConfig;

/// A toggleable group feature, owned by the host platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOption {
    /// Machine name of the tool (e.g. "forum").
    pub name: String,

    /// Display label shown on the edit form.
    pub label: String,

    /// Whether the tool is enabled by default for new groups.
    #[serde(default)]
    pub default_on: bool,
}

impl ToolOption {
    /// Create a tool option.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            default_on: false,
        }
    }

    /// Mark the tool enabled by default.
    pub fn default_on(mut self) -> Self {
        self.default_on = true;
        self
    }
}

/// Narrow the host's tool list to what the subtype allows.
///
/// With `preset_tools` set the full list passes through untouched and the
/// admin decides; otherwise only the subtype's configured tools survive,
/// in the host's original order. Unconfigured subtypes pass through.
pub fn configure_tools(
    config: &SubtypeConfig,
    subtype: &str,
    tools: Vec<ToolOption>,
) -> Vec<ToolOption> {
    let Some(options) = config.options(subtype) else {
        return tools;
    };

    if options.preset_tools {
        return tools;
    }

    tools
        .into_iter()
        .filter(|tool| options.tools.contains(&tool.name))
        .collect()
}
