// ABOUTME: Route module - translates subtype identifier namespaces onto the
// ABOUTME: canonical groups handler and intercepts the add/edit pages.

mod translator;

pub use translator::*;

#[cfg(test)]
mod translator_test;
