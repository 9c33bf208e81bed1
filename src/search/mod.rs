// ABOUTME: Search module - augments the host's generic entity search for
// ABOUTME: groups with a relevance clause, count short-circuit, and highlights.

mod highlight;
mod query;

pub use highlight::*;
pub use query::*;
