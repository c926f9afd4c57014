//! Initial menu contents.
//!
//! The store starts either with the built-in house menu or with the entries
//! of a JSON seed file. Seed file entries go through the same validator as
//! creation requests.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::menu::item::{Category, NewMenuItem};
use crate::menu::validation::{validate_new, Violation};

/// Error type for seed file loading.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("seed file {} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("seed file {} must contain a JSON array of menu items", .path.display())]
    NotAnArray { path: PathBuf },

    #[error("seed entry {index} is invalid: {}", describe(.violations))]
    Invalid {
        index: usize,
        violations: Vec<Violation>,
    },
}

fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join(", ")
}

fn item(
    name: &str,
    description: &str,
    price: f64,
    category: Category,
    ingredients: &[&str],
    available: bool,
) -> NewMenuItem {
    NewMenuItem {
        name: name.to_string(),
        description: description.to_string(),
        price,
        category,
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        available,
    }
}

/// The house menu the service starts with by default.
pub fn default_menu() -> Vec<NewMenuItem> {
    vec![
        item(
            "Classic Burger",
            "Beef patty with lettuce, tomato, and cheese on a sesame seed bun",
            12.99,
            Category::Entree,
            &["beef", "lettuce", "tomato", "cheese", "bun"],
            true,
        ),
        item(
            "Chicken Caesar Salad",
            "Grilled chicken breast over romaine lettuce with parmesan and croutons",
            11.50,
            Category::Entree,
            &[
                "chicken",
                "romaine lettuce",
                "parmesan cheese",
                "croutons",
                "caesar dressing",
            ],
            true,
        ),
        item(
            "Mozzarella Sticks",
            "Crispy breaded mozzarella served with marinara sauce",
            8.99,
            Category::Appetizer,
            &["mozzarella cheese", "breadcrumbs", "marinara sauce"],
            true,
        ),
        item(
            "Chocolate Lava Cake",
            "Warm chocolate cake with molten center, served with vanilla ice cream",
            7.99,
            Category::Dessert,
            &["chocolate", "flour", "eggs", "butter", "vanilla ice cream"],
            true,
        ),
        item(
            "Fresh Lemonade",
            "House-made lemonade with fresh lemons and mint",
            3.99,
            Category::Beverage,
            &["lemons", "sugar", "water", "mint"],
            true,
        ),
        item(
            "Fish and Chips",
            "Beer-battered cod with seasoned fries and coleslaw",
            14.99,
            Category::Entree,
            &["cod", "beer batter", "potatoes", "coleslaw", "tartar sauce"],
            false,
        ),
    ]
}

/// Parse seed entries from a JSON document.
pub fn parse_seed(content: &str, path: &Path) -> Result<Vec<NewMenuItem>, SeedError> {
    let document: Value = serde_json::from_str(content).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Array(entries) = document else {
        return Err(SeedError::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            validate_new(entry).map_err(|violations| SeedError::Invalid { index, violations })
        })
        .collect()
}

/// Load and validate seed entries from a JSON file.
pub fn load_seed_file(path: &Path) -> Result<Vec<NewMenuItem>, SeedError> {
    let content = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&content, path)
}
