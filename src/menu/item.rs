//! Menu item domain types.
//!
//! [`MenuItem`] is what the store holds and what the API returns.
//! [`NewMenuItem`] and [`MenuItemPatch`] are the typed forms of create and
//! update payloads, built only after the validator has accepted the raw JSON.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned identifier of a menu item.
pub type ItemId = u64;

/// Menu section an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Appetizer,
    Entree,
    Dessert,
    Beverage,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Appetizer,
        Category::Entree,
        Category::Dessert,
        Category::Beverage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Appetizer => "appetizer",
            Category::Entree => "entree",
            Category::Dessert => "dessert",
            Category::Beverage => "beverage",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A menu item as stored and served.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub ingredients: Vec<String>,
    pub available: bool,
}

impl MenuItem {
    /// Attach an id to a validated draft.
    pub fn from_new(id: ItemId, item: NewMenuItem) -> Self {
        Self {
            id,
            name: item.name,
            description: item.description,
            price: item.price,
            category: item.category,
            ingredients: item.ingredients,
            available: item.available,
        }
    }

    /// Overwrite every field the patch carries. Absent fields are left alone.
    pub fn apply(&mut self, patch: MenuItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(ingredients) = patch.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(available) = patch.available {
            self.available = available;
        }
    }
}

fn default_available() -> bool {
    true
}

/// A validated creation payload, not yet holding an id.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub ingredients: Vec<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

/// The present, non-null fields of an update payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<Category>,
    pub ingredients: Option<Vec<String>>,
    pub available: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burger() -> MenuItem {
        MenuItem {
            id: 1,
            name: "Classic Burger".into(),
            description: "Beef patty with lettuce".into(),
            price: 12.99,
            category: Category::Entree,
            ingredients: vec!["beef".into(), "bun".into()],
            available: true,
        }
    }

    #[test]
    fn test_category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("main".parse::<Category>().is_err());
    }

    #[test]
    fn test_item_serializes_with_lowercase_category() {
        let json = serde_json::to_value(burger()).unwrap();
        assert_eq!(json["category"], "entree");
        assert_eq!(json["id"], 1);
        assert_eq!(json["available"], true);
    }

    #[test]
    fn test_new_item_defaults_available() {
        let item: NewMenuItem = serde_json::from_value(serde_json::json!({
            "name": "Veggie Wrap",
            "description": "Fresh vegetables in a tortilla wrap",
            "price": 6.5,
            "category": "entree",
            "ingredients": ["tortilla"]
        }))
        .unwrap();
        assert!(item.available);
    }

    #[test]
    fn test_apply_patch_only_touches_present_fields() {
        let mut item = burger();
        item.apply(MenuItemPatch {
            price: Some(13.99),
            available: Some(false),
            ..Default::default()
        });
        assert_eq!(item.price, 13.99);
        assert!(!item.available);
        assert_eq!(item.name, "Classic Burger");
        assert_eq!(item.ingredients.len(), 2);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut item = burger();
        item.apply(MenuItemPatch::default());
        assert_eq!(item, burger());
    }
}
