//! catalog-shell - Interactive browser for a product and ingredient catalog
//!
//! Loads ingredients and products from two JSON documents once at startup and
//! answers listing, substring search, ingredient filtering and allergen queries
//! from a line-oriented shell.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod format;
pub mod query;
pub mod shell;

pub use catalog::{Catalog, LoadError, QueryError};
pub use commands::{CommandRegistry, Outcome, ShellContext};
pub use config::{Config, OutputFormat};
pub use shell::Shell;
