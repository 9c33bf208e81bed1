// ABOUTME: Config module - subtype configuration resolver and settings store.
// ABOUTME: One mapping of subtype name to identifier/parents/tools/flags.

mod options;
mod store;

pub use options::*;
pub use store::*;

#[cfg(test)]
mod options_test;
#[cfg(test)]
mod store_test;
