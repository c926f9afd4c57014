//! Field-level validation of menu item payloads.
//!
//! Validation runs on the raw JSON body so that type mismatches surface as
//! per-field violations instead of a single deserialization error. Every
//! rule runs; violations are collected, never short-circuited, and each field
//! reports at most one.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::menu::item::{Category, MenuItemPatch, NewMenuItem};

/// Which payload shape is being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Every required field must be present and valid.
    Create,
    /// Only fields that are present (and non-null) are checked.
    Update,
}

/// A single rule violation, reported to the client verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

struct Rule {
    field: &'static str,
    required: bool,
    check: fn(&Value) -> Result<(), &'static str>,
}

const RULES: [Rule; 6] = [
    Rule {
        field: "name",
        required: true,
        check: check_name,
    },
    Rule {
        field: "description",
        required: true,
        check: check_description,
    },
    Rule {
        field: "price",
        required: true,
        check: check_price,
    },
    Rule {
        field: "category",
        required: true,
        check: check_category,
    },
    Rule {
        field: "ingredients",
        required: true,
        check: check_ingredients,
    },
    Rule {
        field: "available",
        required: false,
        check: check_available,
    },
];

fn check_text(
    value: &Value,
    min_chars: usize,
    type_msg: &'static str,
    len_msg: &'static str,
) -> Result<(), &'static str> {
    let text = value.as_str().ok_or(type_msg)?;
    if text.chars().count() < min_chars {
        return Err(len_msg);
    }
    Ok(())
}

fn check_name(value: &Value) -> Result<(), &'static str> {
    check_text(
        value,
        3,
        "Name must be a string",
        "Name must be at least 3 characters",
    )
}

fn check_description(value: &Value) -> Result<(), &'static str> {
    check_text(
        value,
        10,
        "Description must be a string",
        "Description must be at least 10 characters",
    )
}

fn check_price(value: &Value) -> Result<(), &'static str> {
    match value.as_f64() {
        Some(price) if price.is_finite() && price > 0.0 => Ok(()),
        _ => Err("Price must be a number greater than 0"),
    }
}

fn check_category(value: &Value) -> Result<(), &'static str> {
    value
        .as_str()
        .and_then(|s| s.parse::<Category>().ok())
        .map(|_| ())
        .ok_or("Category must be appetizer, entree, dessert, or beverage")
}

fn check_ingredients(value: &Value) -> Result<(), &'static str> {
    let list = match value.as_array() {
        Some(list) if !list.is_empty() => list,
        _ => return Err("Ingredients must be an array with at least 1 item"),
    };
    if !list.iter().all(Value::is_string) {
        return Err("Ingredients must only contain strings");
    }
    Ok(())
}

fn check_available(value: &Value) -> Result<(), &'static str> {
    if value.is_boolean() {
        Ok(())
    } else {
        Err("Available must be a boolean")
    }
}

/// Check a payload against every field rule.
///
/// A payload that is not a JSON object is treated as an empty object. An
/// empty result means the payload is accepted. In update mode a `null` field
/// counts as absent; in create mode it is checked like any other value.
pub fn validate(payload: &Value, mode: ValidationMode) -> Vec<Violation> {
    let empty = Map::new();
    let fields = payload.as_object().unwrap_or(&empty);

    RULES
        .iter()
        .filter_map(|rule| {
            let outcome = match fields.get(rule.field) {
                Some(Value::Null) | None if mode == ValidationMode::Update => Ok(()),
                Some(value) => (rule.check)(value),
                None if rule.required => (rule.check)(&Value::Null),
                None => Ok(()),
            };
            outcome.err().map(|message| Violation::new(rule.field, message))
        })
        .collect()
}

/// Validate a creation payload and convert it to a [`NewMenuItem`].
pub fn validate_new(payload: Value) -> Result<NewMenuItem, Vec<Violation>> {
    let violations = validate(&payload, ValidationMode::Create);
    if !violations.is_empty() {
        return Err(violations);
    }
    serde_json::from_value(payload).map_err(|e| vec![Violation::new("body", e.to_string())])
}

/// Validate an update payload and convert it to a [`MenuItemPatch`].
pub fn validate_patch(payload: Value) -> Result<MenuItemPatch, Vec<Violation>> {
    let violations = validate(&payload, ValidationMode::Update);
    if !violations.is_empty() {
        return Err(violations);
    }
    // Non-object bodies carry no fields.
    if !payload.is_object() {
        return Ok(MenuItemPatch::default());
    }
    serde_json::from_value(payload).map_err(|e| vec![Violation::new("body", e.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "name": "Veggie Wrap",
            "description": "Fresh vegetables in a tortilla wrap",
            "price": 6.50,
            "category": "entree",
            "ingredients": ["tortilla", "lettuce"]
        })
    }

    fn fields(violations: &[Violation]) -> Vec<&str> {
        violations.iter().map(|v| v.field.as_str()).collect()
    }

    #[test]
    fn test_valid_payload_has_no_violations() {
        assert!(validate(&valid_payload(), ValidationMode::Create).is_empty());
    }

    #[test]
    fn test_empty_object_reports_every_required_field() {
        let violations = validate(&json!({}), ValidationMode::Create);
        assert_eq!(
            fields(&violations),
            vec!["name", "description", "price", "category", "ingredients"]
        );
        assert_eq!(violations[0].message, "Name must be a string");
    }

    #[test]
    fn test_non_object_body_is_treated_as_empty() {
        let violations = validate(&json!([1, 2, 3]), ValidationMode::Create);
        assert_eq!(violations.len(), 5);
        assert!(validate(&json!("text"), ValidationMode::Update).is_empty());
    }

    #[test]
    fn test_short_name() {
        let mut payload = valid_payload();
        payload["name"] = json!("ab");
        let violations = validate(&payload, ValidationMode::Create);
        assert_eq!(
            violations,
            vec![Violation::new("name", "Name must be at least 3 characters")]
        );
    }

    #[test]
    fn test_name_length_counts_characters_not_bytes() {
        let mut payload = valid_payload();
        payload["name"] = json!("é");
        assert_eq!(fields(&validate(&payload, ValidationMode::Create)), vec!["name"]);
        payload["name"] = json!("éèê");
        assert!(validate(&payload, ValidationMode::Create).is_empty());
    }

    #[test]
    fn test_wrong_types_report_type_messages() {
        let payload = json!({
            "name": 42,
            "description": ["not", "text"],
            "price": "6.50",
            "category": 1,
            "ingredients": "tortilla",
            "available": "yes"
        });
        let violations = validate(&payload, ValidationMode::Create);
        assert_eq!(
            violations,
            vec![
                Violation::new("name", "Name must be a string"),
                Violation::new("description", "Description must be a string"),
                Violation::new("price", "Price must be a number greater than 0"),
                Violation::new(
                    "category",
                    "Category must be appetizer, entree, dessert, or beverage"
                ),
                Violation::new(
                    "ingredients",
                    "Ingredients must be an array with at least 1 item"
                ),
                Violation::new("available", "Available must be a boolean"),
            ]
        );
    }

    #[test]
    fn test_price_must_be_strictly_positive() {
        for bad in [json!(-5), json!(0), json!(0.0)] {
            let mut payload = valid_payload();
            payload["price"] = bad;
            assert_eq!(fields(&validate(&payload, ValidationMode::Create)), vec!["price"]);
        }
        let mut payload = valid_payload();
        payload["price"] = json!(1);
        assert!(validate(&payload, ValidationMode::Create).is_empty());
    }

    #[test]
    fn test_unknown_category() {
        let mut payload = valid_payload();
        payload["category"] = json!("main");
        assert_eq!(fields(&validate(&payload, ValidationMode::Create)), vec!["category"]);
    }

    #[test]
    fn test_ingredients_rules() {
        let mut payload = valid_payload();
        payload["ingredients"] = json!([]);
        assert_eq!(
            validate(&payload, ValidationMode::Create)[0].message,
            "Ingredients must be an array with at least 1 item"
        );
        payload["ingredients"] = json!(["tortilla", 3]);
        assert_eq!(
            validate(&payload, ValidationMode::Create)[0].message,
            "Ingredients must only contain strings"
        );
    }

    #[test]
    fn test_available_is_optional_in_create() {
        let mut payload = valid_payload();
        assert!(validate(&payload, ValidationMode::Create).is_empty());
        payload["available"] = json!(false);
        assert!(validate(&payload, ValidationMode::Create).is_empty());
    }

    #[test]
    fn test_null_available_rejected_in_create() {
        let mut payload = valid_payload();
        payload["available"] = json!(null);
        assert_eq!(
            validate_new(payload).unwrap_err(),
            vec![Violation::new("available", "Available must be a boolean")]
        );
        assert!(validate(&json!({ "available": null }), ValidationMode::Update).is_empty());
    }

    #[test]
    fn test_update_mode_checks_only_present_fields() {
        assert!(validate(&json!({ "price": 13.99 }), ValidationMode::Update).is_empty());
        assert!(validate(&json!({}), ValidationMode::Update).is_empty());
        assert!(validate(&json!({ "name": null }), ValidationMode::Update).is_empty());

        let violations = validate(&json!({ "name": "ab", "price": -1 }), ValidationMode::Update);
        assert_eq!(fields(&violations), vec!["name", "price"]);
    }

    #[test]
    fn test_validate_new_converts_and_defaults_available() {
        let item = validate_new(valid_payload()).unwrap();
        assert_eq!(item.name, "Veggie Wrap");
        assert_eq!(item.category, Category::Entree);
        assert!(item.available);
    }

    #[test]
    fn test_validate_new_rejects_missing_price() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("price");
        let violations = validate_new(payload).unwrap_err();
        assert_eq!(fields(&violations), vec!["price"]);
    }

    #[test]
    fn test_validate_patch_drops_nulls() {
        let patch = validate_patch(json!({ "price": 13.99, "name": null })).unwrap();
        assert_eq!(patch.price, Some(13.99));
        assert_eq!(patch.name, None);
        assert_eq!(patch.available, None);
    }

    #[test]
    fn test_validate_patch_ignores_unknown_fields() {
        let patch = validate_patch(json!({ "id": 99, "available": false })).unwrap();
        assert_eq!(patch.available, Some(false));
    }
}
