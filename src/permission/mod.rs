// ABOUTME: Permission module - parent/child nesting rules for group subtypes.
// ABOUTME: A single-level containment check driven by the configuration.

mod gate;

pub use gate::*;
