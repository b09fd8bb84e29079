//! Data models for catalog ingredients and products.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Identifier shared by ingredients and the products that reference them.
pub type IngredientId = i64;

/// Identifier of a product.
pub type ProductId = i64;

/// A single ingredient record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Display name, also the external handle users type
    pub name: String,
    /// Join key referenced by products
    pub id: IngredientId,
    /// Whether the ingredient may cause allergic reactions
    pub is_allergen: bool,
}

/// A product record as it appears in the products document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub collection: String,
    pub ingredient_ids: Vec<IngredientId>,
}

/// A loaded product with its ingredient ids collapsed into a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product name
    pub name: String,
    /// Ingredient ids, ascending and without duplicates
    pub ingredient_ids: BTreeSet<IngredientId>,
}

impl Product {
    /// Returns true if the product contains every id in `ids`.
    pub fn contains_all(&self, ids: &BTreeSet<IngredientId>) -> bool {
        ids.is_subset(&self.ingredient_ids)
    }
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self { name: record.name, ingredient_ids: record.ingredient_ids.into_iter().collect() }
    }
}

/// Top-level shape of the ingredients document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientsDocument {
    pub ingredients: Vec<Ingredient>,
}

/// Top-level shape of the products document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsDocument {
    pub products: Vec<ProductRecord>,
}

/// One ingredient line of a product's detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientRow {
    pub name: String,
    pub is_allergen: bool,
}

/// A product together with its resolved ingredients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDetail {
    pub product: String,
    pub ingredients: Vec<IngredientRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_from_record_dedups_ids() {
        let record = ProductRecord {
            id: 7,
            name: "Acai + Cherry".to_string(),
            collection: "smoothie".to_string(),
            ingredient_ids: vec![3, 1, 3, 2],
        };

        let product = Product::from(record);
        assert_eq!(product.name, "Acai + Cherry");
        assert_eq!(product.ingredient_ids.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_contains_all() {
        let product =
            Product { name: "A".to_string(), ingredient_ids: [1, 2].into_iter().collect() };

        assert!(product.contains_all(&[1].into_iter().collect()));
        assert!(product.contains_all(&[1, 2].into_iter().collect()));
        assert!(!product.contains_all(&[1, 3].into_iter().collect()));
        assert!(product.contains_all(&BTreeSet::new()));
    }

    #[test]
    fn test_ingredients_document_requires_fields() {
        let missing_flag = r#"{"ingredients": [{"name": "Ginger", "id": 1}]}"#;
        assert!(serde_json::from_str::<IngredientsDocument>(missing_flag).is_err());

        let ok = r#"{"ingredients": [{"name": "Ginger", "id": 1, "is_allergen": false}]}"#;
        let doc: IngredientsDocument = serde_json::from_str(ok).unwrap();
        assert_eq!(doc.ingredients.len(), 1);
        assert_eq!(doc.ingredients[0].name, "Ginger");
    }

    #[test]
    fn test_products_document_parse() {
        let json = r#"{"products": [
            {"id": 1, "name": "Acai + Cherry", "collection": "smoothie", "ingredient_ids": [1, 2]}
        ]}"#;
        let doc: ProductsDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.products[0].collection, "smoothie");
        assert_eq!(doc.products[0].ingredient_ids, vec![1, 2]);
    }
}
