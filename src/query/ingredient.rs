//! Filtering products by required ingredients.

use crate::catalog::{Catalog, IngredientId, Product, QueryError};
use std::collections::BTreeSet;

/// Keeps products that contain every required ingredient.
#[derive(Debug, Clone)]
pub struct IngredientFilter {
    required: BTreeSet<IngredientId>,
    names: Vec<String>,
}

impl IngredientFilter {
    /// Resolves ingredient names against the catalog.
    ///
    /// Fails on the first name the catalog does not know.
    pub fn resolve<S: AsRef<str>>(catalog: &Catalog, names: &[S]) -> Result<Self, QueryError> {
        let mut required = BTreeSet::new();
        let mut resolved = Vec::with_capacity(names.len());

        for name in names {
            let name = name.as_ref();
            let id = catalog
                .ingredient_id(name)
                .ok_or_else(|| QueryError::UnknownIngredient(name.to_string()))?;
            required.insert(id);
            resolved.push(name.to_string());
        }

        Ok(Self { required, names: resolved })
    }

    /// Returns true if the product contains all required ingredients.
    pub fn matches(&self, product: &Product) -> bool {
        product.contains_all(&self.required)
    }

    /// The resolved ingredient ids.
    pub fn required(&self) -> &BTreeSet<IngredientId> {
        &self.required
    }

    pub fn description(&self) -> String {
        if self.names.is_empty() {
            "Ingredients: any".to_string()
        } else {
            format!("Must contain: {}", self.names.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{"ingredients": [
                {"name": "Organic Cherry", "id": 1, "is_allergen": false},
                {"name": "Ginger", "id": 2, "is_allergen": false}
            ]}"#,
            r#"{"products": []}"#,
        )
        .unwrap()
    }

    fn product(ids: &[IngredientId]) -> Product {
        Product { name: "P".to_string(), ingredient_ids: ids.iter().copied().collect() }
    }

    #[test]
    fn test_resolve_known_names() {
        let filter = IngredientFilter::resolve(&catalog(), &["Organic Cherry", "Ginger"]).unwrap();
        assert_eq!(filter.required().iter().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(filter.description(), "Must contain: Organic Cherry, Ginger");
    }

    #[test]
    fn test_resolve_unknown_name() {
        let err = IngredientFilter::resolve(&catalog(), &["Ginger", "Nonexistent"]).unwrap_err();
        assert_eq!(err, QueryError::UnknownIngredient("Nonexistent".to_string()));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert!(IngredientFilter::resolve(&catalog(), &["ginger"]).is_err());
    }

    #[test]
    fn test_matches_requires_all() {
        let filter = IngredientFilter::resolve(&catalog(), &["Organic Cherry", "Ginger"]).unwrap();

        assert!(filter.matches(&product(&[1, 2])));
        assert!(filter.matches(&product(&[1, 2, 5])));
        assert!(!filter.matches(&product(&[1])));
        assert!(!filter.matches(&product(&[2])));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = IngredientFilter::resolve::<&str>(&catalog(), &[]).unwrap();
        assert!(filter.matches(&product(&[])));
        assert_eq!(filter.description(), "Ingredients: any");
    }
}
