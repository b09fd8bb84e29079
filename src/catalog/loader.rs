//! Builds a [`Catalog`] from the ingredients and products JSON documents.

use super::error::LoadError;
use super::models::{IngredientsDocument, Product, ProductsDocument};
use super::Catalog;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, warn};

impl Catalog {
    /// Reads and parses both catalog files.
    pub fn load(
        ingredients_path: impl AsRef<Path>,
        products_path: impl AsRef<Path>,
    ) -> Result<Self, LoadError> {
        let ingredients: IngredientsDocument = read_document(ingredients_path.as_ref())?;
        let products: ProductsDocument = read_document(products_path.as_ref())?;

        Self::from_documents(ingredients, products)
    }

    /// Parses both documents from in-memory JSON text.
    pub fn from_json(ingredients: &str, products: &str) -> Result<Self, LoadError> {
        let ingredients = parse_document(ingredients, Path::new("<ingredients>"))?;
        let products = parse_document(products, Path::new("<products>"))?;

        Self::from_documents(ingredients, products)
    }

    /// Builds the lookup structures from already-parsed documents.
    ///
    /// Duplicate ingredient names or ids are rejected, since either would make
    /// name/id resolution ambiguous. Product references to unknown ingredient
    /// ids are accepted and reported; they only fail when a product's
    /// ingredients are displayed.
    pub fn from_documents(
        ingredients: IngredientsDocument,
        products: ProductsDocument,
    ) -> Result<Self, LoadError> {
        let mut catalog = Catalog::default();

        for ingredient in ingredients.ingredients {
            if catalog.ingredients.contains_key(&ingredient.name) {
                return Err(LoadError::DuplicateIngredientName { name: ingredient.name });
            }
            if catalog.ingredient_names.contains_key(&ingredient.id) {
                return Err(LoadError::DuplicateIngredientId { id: ingredient.id });
            }

            if ingredient.is_allergen {
                catalog.allergens.insert(ingredient.id);
            }
            catalog.ingredient_names.insert(ingredient.id, ingredient.name.clone());
            catalog.ingredients.insert(ingredient.name, ingredient.id);
        }

        for record in products.products {
            for id in &record.ingredient_ids {
                if !catalog.ingredient_names.contains_key(id) {
                    warn!("Product '{}' references unknown ingredient id {}", record.name, id);
                }
            }

            if let Some(previous) = catalog.collections.insert(record.collection.clone(), record.id)
            {
                if previous != record.id {
                    debug!(
                        "Collection '{}' already mapped to product {}, replacing with {}",
                        record.collection, previous, record.id
                    );
                }
            }

            let id = record.id;
            catalog.products.insert(id, Product::from(record));
        }

        debug!(
            "Loaded {} ingredients ({} allergens), {} products, {} collections",
            catalog.ingredients.len(),
            catalog.allergens.len(),
            catalog.products.len(),
            catalog.collections.len()
        );

        Ok(catalog)
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    debug!("Reading catalog file: {}", path.display());

    let content = std::fs::read_to_string(path)
        .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;

    parse_document(&content, path)
}

fn parse_document<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T, LoadError> {
    serde_json::from_str(content)
        .map_err(|source| LoadError::Parse { path: path.to_path_buf(), source })
}
