// ABOUTME: Root module for group-subtypes - configurable group subtype plugin.
// ABOUTME: Re-exports all public types from submodules.

pub mod admin;
pub mod config;
pub mod entity;
pub mod error;
pub mod hook;
pub mod i18n;
pub mod menu;
pub mod permission;
pub mod plugin;
pub mod prelude;
pub mod route;
pub mod search;
pub mod tools;
pub mod url;

pub use error::SubtypesError;
