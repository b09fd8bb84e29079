//! Pure lookups over a loaded [`Catalog`].

pub mod ingredient;
pub mod substring;

pub use ingredient::IngredientFilter;
pub use substring::SubstringMatcher;

use crate::catalog::{Catalog, IngredientRow, ProductDetail, QueryError};
use tracing::debug;

/// All ingredient names in load order.
pub fn list_ingredient_names(catalog: &Catalog) -> Vec<&str> {
    catalog.ingredients().map(|(name, _)| name).collect()
}

/// All product names in load order.
pub fn list_product_names(catalog: &Catalog) -> Vec<&str> {
    catalog.products().map(|(_, product)| product.name.as_str()).collect()
}

/// Names containing `fragment`, ignoring case. An empty fragment keeps every name.
pub fn search_by_substring<'a>(
    names: impl IntoIterator<Item = &'a str>,
    fragment: &str,
) -> Vec<&'a str> {
    SubstringMatcher::new(fragment).filter(names)
}

/// Names of products that contain every requested ingredient.
pub fn search_products_by_ingredients<'a, S: AsRef<str>>(
    catalog: &'a Catalog,
    requested: &[S],
) -> Result<Vec<&'a str>, QueryError> {
    let filter = IngredientFilter::resolve(catalog, requested)?;
    debug!("Active filter: {}", filter.description());

    Ok(catalog
        .products()
        .filter(|(_, product)| filter.matches(product))
        .map(|(_, product)| product.name.as_str())
        .collect())
}

/// Resolves a product's ingredients with their allergen flags.
///
/// `name` must match a product name exactly. Ingredients are listed in
/// ascending id order.
pub fn product_ingredients(catalog: &Catalog, name: &str) -> Result<ProductDetail, QueryError> {
    let product = catalog
        .product_by_name(name)
        .ok_or_else(|| QueryError::ProductNotFound(name.to_string()))?;

    let ingredients = product
        .ingredient_ids
        .iter()
        .map(|&id| {
            let name = catalog.ingredient_name(id).ok_or_else(|| {
                QueryError::DanglingIngredientReference { product: product.name.clone(), id }
            })?;
            Ok(IngredientRow { name: name.to_string(), is_allergen: catalog.is_allergen(id) })
        })
        .collect::<Result<Vec<_>, QueryError>>()?;

    Ok(ProductDetail { product: product.name.clone(), ingredients })
}

/// Collection labels paired with the name of their representative product.
pub fn list_collections(catalog: &Catalog) -> Vec<(&str, &str)> {
    catalog
        .collections()
        .filter_map(|(label, id)| catalog.product(id).map(|p| (label, p.name.as_str())))
        .collect()
}
