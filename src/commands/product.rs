//! Product detail command.

use super::search::product_matches;
use super::{Outcome, ShellContext};
use crate::catalog::QueryError;
use crate::query;
use anyhow::Result;
use tracing::info;

/// Shows the ingredients of the product named exactly `arg`.
///
/// A name that does not match exactly yields similar product names instead.
/// A product referencing an ingredient id missing from the catalog is an error.
pub fn show_product_ingredients(arg: &str, ctx: &ShellContext<'_>) -> Result<Outcome> {
    let name = arg.trim();
    if name.is_empty() {
        return Ok(Outcome::Continue("Need Product".to_string()));
    }

    match query::product_ingredients(ctx.catalog, name) {
        Ok(detail) => {
            info!("Showing {} ingredients of {}", detail.ingredients.len(), detail.product);
            Ok(Outcome::Continue(ctx.formatter.format_product_detail(&detail)))
        }
        Err(QueryError::ProductNotFound(_)) => Ok(Outcome::Continue(format!(
            "Product not found\nSimilar Products: \n{}",
            product_matches(name, ctx)
        ))),
        Err(e) => Err(e.into()),
    }
}
