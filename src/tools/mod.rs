// ABOUTME: Tools module - per-subtype narrowing of the host's group tool list
// ABOUTME: and the edit-form default/visibility behavior.

mod form;
mod presets;

pub use form::*;
pub use presets::*;
