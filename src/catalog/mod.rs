//! In-memory catalog of ingredients and products, loaded once and read thereafter.

pub mod error;
pub mod loader;
pub mod models;

pub use error::{LoadError, QueryError};
pub use models::{
    Ingredient, IngredientId, IngredientRow, Product, ProductDetail, ProductId, ProductRecord,
};

use indexmap::IndexMap;
use std::collections::{BTreeSet, HashMap};

/// Immutable lookup structures built from the ingredients and products documents.
///
/// Iteration over ingredients, products and collections follows the order in
/// which records were loaded.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Ingredient name -> id
    ingredients: IndexMap<String, IngredientId>,
    /// Ingredient id -> name
    ingredient_names: HashMap<IngredientId, String>,
    /// Ids of ingredients flagged allergenic
    allergens: BTreeSet<IngredientId>,
    /// Product id -> product
    products: IndexMap<ProductId, Product>,
    /// Collection label -> representative product id (last writer wins)
    collections: IndexMap<String, ProductId>,
}

impl Catalog {
    /// Resolves an ingredient name to its id.
    pub fn ingredient_id(&self, name: &str) -> Option<IngredientId> {
        self.ingredients.get(name).copied()
    }

    /// Resolves an ingredient id back to its name.
    pub fn ingredient_name(&self, id: IngredientId) -> Option<&str> {
        self.ingredient_names.get(&id).map(String::as_str)
    }

    /// Returns true if the ingredient id is flagged allergenic.
    pub fn is_allergen(&self, id: IngredientId) -> bool {
        self.allergens.contains(&id)
    }

    /// Ingredient names with their ids, in load order.
    pub fn ingredients(&self) -> impl Iterator<Item = (&str, IngredientId)> {
        self.ingredients.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Products with their ids, in load order.
    pub fn products(&self) -> impl Iterator<Item = (ProductId, &Product)> {
        self.products.iter().map(|(id, product)| (*id, product))
    }

    /// Looks up a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Finds the first product whose name matches exactly.
    pub fn product_by_name(&self, name: &str) -> Option<&Product> {
        self.products.values().find(|p| p.name == name)
    }

    /// Collection labels with their representative product id, in load order.
    pub fn collections(&self) -> impl Iterator<Item = (&str, ProductId)> {
        self.collections.iter().map(|(label, id)| (label.as_str(), *id))
    }

    /// Returns the representative product id of a collection.
    pub fn collection_product(&self, label: &str) -> Option<ProductId> {
        self.collections.get(label).copied()
    }

    /// The set of allergenic ingredient ids.
    pub fn allergens(&self) -> &BTreeSet<IngredientId> {
        &self.allergens
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}
