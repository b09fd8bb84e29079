//! Search commands: substring search over names and filtering products by ingredients.

use super::{Outcome, ShellContext};
use crate::query;
use anyhow::Result;
use tracing::{debug, info};

/// Substring search over ingredient names.
pub fn search_ingredients(arg: &str, ctx: &ShellContext<'_>) -> Result<Outcome> {
    Ok(Outcome::Continue(ingredient_matches(arg, ctx)))
}

/// Substring search over product names.
pub fn search_products(arg: &str, ctx: &ShellContext<'_>) -> Result<Outcome> {
    Ok(Outcome::Continue(product_matches(arg, ctx)))
}

/// Lists products containing every comma-separated ingredient in `arg`.
///
/// Unknown ingredient names are reported with spelling suggestions and left
/// out of the query.
pub fn search_with_ingredients(arg: &str, ctx: &ShellContext<'_>) -> Result<Outcome> {
    if arg.is_empty() {
        return Ok(Outcome::Continue("Need ingredients".to_string()));
    }

    let mut sections = Vec::new();
    let mut requested: Vec<&str> = Vec::new();

    for name in arg.split(',').map(str::trim) {
        if ctx.catalog.ingredient_id(name).is_some() {
            requested.push(name);
        } else {
            debug!("Dropping unknown ingredient from query: {:?}", name);
            sections.push(format!(
                "Ingredient [{}] Not found. Maybe incorrect ingredient spellings",
                name
            ));
            sections.push(ingredient_matches(name, ctx));
        }
    }

    if requested.is_empty() {
        sections.push("No product".to_string());
        return Ok(Outcome::Continue(sections.join("\n")));
    }

    sections.push(format!("Searching ingredients : [{}]", requested.join(", ")));

    let products = query::search_products_by_ingredients(ctx.catalog, &requested)?;
    info!("Found {} products with {} ingredients", products.len(), requested.len());

    sections.push(ctx.formatter.format_names("Available Products", "products", &products));
    Ok(Outcome::Continue(sections.join("\n")))
}

pub(crate) fn ingredient_matches(fragment: &str, ctx: &ShellContext<'_>) -> String {
    if fragment.is_empty() {
        return "Need some hints".to_string();
    }

    let names = query::search_by_substring(query::list_ingredient_names(ctx.catalog), fragment);
    ctx.formatter.format_names("Available Ingredients", "ingredients", &names)
}

pub(crate) fn product_matches(fragment: &str, ctx: &ShellContext<'_>) -> String {
    if fragment.is_empty() {
        return "Need some hints".to_string();
    }

    let names = query::search_by_substring(query::list_product_names(ctx.catalog), fragment);
    ctx.formatter.format_names("Available Products", "products", &names)
}
