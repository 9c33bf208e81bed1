// ABOUTME: Edit-form behavior - tool enable defaults applied on submit and
// ABOUTME: field visibility once a value is already implied by the request.

use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::config::SubtypeConfig;
use crate::entity::Group;

use super::ToolOption;

/// Marker the host uses for fields that should not render.
pub const HIDDEN: &str = "hidden";

/// Request input bag for a form submission.
///
/// Mirrors the host's input accessors: empty strings count as absent, and
/// defaults only apply where the submitter supplied nothing.
#[derive(Debug, Clone, Default)]
pub struct FormInputs {
    values: HashMap<String, String>,
}

impl FormInputs {
    /// Create an empty input bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an input value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style input value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Read a non-empty input value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Per-field input kinds for the group edit form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldConfig {
    fields: BTreeMap<String, String>,
}

impl FieldConfig {
    /// Create an empty field config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field's input kind.
    pub fn set(&mut self, field: impl Into<String>, kind: impl Into<String>) {
        self.fields.insert(field.into(), kind.into());
    }

    /// Builder-style field kind.
    pub fn with(mut self, field: impl Into<String>, kind: impl Into<String>) -> Self {
        self.set(field, kind);
        self
    }

    /// Read a field's input kind.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Hide a field.
    pub fn hide(&mut self, field: impl Into<String>) {
        self.set(field, HIDDEN);
    }

    /// Whether a field is hidden.
    pub fn is_hidden(&self, field: &str) -> bool {
        self.get(field) == Some(HIDDEN)
    }
}

/// Apply subtype behavior to a group edit submission.
///
/// Resolves the subtype from the entity being edited or, for new groups,
/// from the request; fills tool enable inputs from the subtype's allowed
/// set where the submitter left them blank; and hides the subtype,
/// container, and parent fields once their value is already implied.
pub fn update_fields_config(
    config: &SubtypeConfig,
    entity: Option<&Group>,
    tools: &[ToolOption],
    inputs: &mut FormInputs,
    fields: &mut FieldConfig,
) {
    let subtype = match entity {
        Some(entity) => entity.subtype.clone(),
        None => {
            let subtype = inputs.get("subtype").map(str::to_string);
            if subtype.is_some() {
                // only hide the subtype field for new entities
                fields.hide("subtype");
            }
            subtype
        }
    };

    if let Some(subtype) = subtype {
        apply_tool_defaults(config, &subtype, tools, inputs);
    }

    if inputs.get("container_guid").is_some() {
        fields.hide("container_guid");
    }

    if inputs.get("parent_guid").is_some() {
        fields.hide("parent_guid");
    }
}

/// Fill `{tool}_enable` inputs from the subtype's allowed tool set unless
/// the submitter already supplied an explicit value.
pub fn apply_tool_defaults(
    config: &SubtypeConfig,
    subtype: &str,
    tools: &[ToolOption],
    inputs: &mut FormInputs,
) {
    let Some(options) = config.options(subtype) else {
        return;
    };

    for tool in tools {
        let key = format!("{}_enable", tool.name);
        if inputs.get(&key).is_none() {
            let value = if options.tools.contains(&tool.name) {
                "yes"
            } else {
                "no"
            };
            inputs.set(key, value);
        }
    }
}
