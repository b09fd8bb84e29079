//! Error types for catalog loading and lookups.

use super::models::IngredientId;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to build a catalog. Always fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("ingredient name '{name}' appears more than once")]
    DuplicateIngredientName { name: String },

    #[error("ingredient id {id} appears more than once")]
    DuplicateIngredientId { id: IngredientId },
}

/// Failure of a lookup against a loaded catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown ingredient '{0}'")]
    UnknownIngredient(String),

    #[error("product '{0}' not found")]
    ProductNotFound(String),

    #[error("product '{product}' references ingredient id {id}, which is not in the catalog")]
    DanglingIngredientReference { product: String, id: IngredientId },
}
