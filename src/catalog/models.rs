//! Catalogue models.

use serde::{Deserialize, Serialize};

/// Identifier the backend uses for a food item, e.g. `"b1"`.
pub type ProductId = String;

/// A priced add-on attached to a product's customization menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOn {
    /// Backend id of the add-on, e.g. `"d1"`.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Price in minor units (paise).
    pub price: u64,
}

/// Nutrition facts for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: u32,
    pub proteins: u32,
    pub fats: u32,
    pub carbs: u32,
    pub sugar: u32,
}

/// A food item in the catalogue, including its customization menus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend id.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Short description.
    #[serde(default)]
    pub description: String,

    /// Base price in minor units (paise).
    pub price: u64,

    /// Image URL.
    #[serde(default)]
    pub image: Option<String>,

    /// Dip add-on menu.
    #[serde(default)]
    pub dips: Vec<AddOn>,

    /// Beverage add-on menu.
    #[serde(default)]
    pub beverages: Vec<AddOn>,

    /// Drink add-on menu.
    #[serde(default)]
    pub drinks: Vec<AddOn>,

    /// Nutrition facts, when the backend provides them.
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_deserializes_with_minimal_fields() {
        let product: Product =
            serde_json::from_str(r#"{"id":"b1","name":"Chicken Biryani","price":26900}"#)
                .expect("product");

        assert_eq!(product.id, "b1");
        assert_eq!(product.price, 26900);
        assert!(product.dips.is_empty());
        assert!(product.nutrition.is_none());
    }
}
