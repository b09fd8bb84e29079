//! Commands that list the whole catalog.

use super::{Outcome, ShellContext};
use crate::query;
use anyhow::Result;

/// Lists every ingredient name.
pub fn ingredients(_arg: &str, ctx: &ShellContext<'_>) -> Result<Outcome> {
    let names = query::list_ingredient_names(ctx.catalog);
    Ok(Outcome::Continue(ctx.formatter.format_names(
        "Available Ingredients",
        "ingredients",
        &names,
    )))
}

/// Lists every product name.
pub fn products(_arg: &str, ctx: &ShellContext<'_>) -> Result<Outcome> {
    let names = query::list_product_names(ctx.catalog);
    Ok(Outcome::Continue(ctx.formatter.format_names("Available Products", "products", &names)))
}

/// Lists each collection with its representative product.
pub fn collections(_arg: &str, ctx: &ShellContext<'_>) -> Result<Outcome> {
    let collections = query::list_collections(ctx.catalog);
    Ok(Outcome::Continue(ctx.formatter.format_collections(&collections)))
}
