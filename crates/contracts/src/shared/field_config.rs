//! Form field configuration: compile-time defaults plus server overrides.
//!
//! Merge rules, per field name:
//! - an override member that is set wins over the default member;
//! - fields without an override keep their default;
//! - an override with `visible: false` removes the field;
//! - an override for a field with no default adds it.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub label: String,
    pub visible: bool,
    pub required: bool,
    pub order: i32,
}

impl FieldConfig {
    pub fn new(label: impl Into<String>, order: i32) -> Self {
        Self {
            label: label.into(),
            visible: true,
            required: false,
            order,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Server-side override for one field. Absent members keep the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOverride {
    pub label: Option<String>,
    pub visible: Option<bool>,
    pub required: Option<bool>,
    pub order: Option<i32>,
}

pub type FieldConfigMap = BTreeMap<String, FieldConfig>;
pub type FieldOverrides = BTreeMap<String, FieldOverride>;

pub fn merge_field_config(defaults: &FieldConfigMap, overrides: &FieldOverrides) -> FieldConfigMap {
    let mut merged = defaults.clone();

    for (name, ov) in overrides {
        if ov.visible == Some(false) {
            merged.remove(name);
            continue;
        }

        let entry = merged.entry(name.clone()).or_insert_with(|| FieldConfig {
            label: name.clone(),
            visible: true,
            required: false,
            order: i32::MAX,
        });

        if let Some(label) = &ov.label {
            entry.label = label.clone();
        }
        if let Some(visible) = ov.visible {
            entry.visible = visible;
        }
        if let Some(required) = ov.required {
            entry.required = required;
        }
        if let Some(order) = ov.order {
            entry.order = order;
        }
    }

    merged
}

/// Field names in display order: by `order`, then by name.
pub fn ordered_fields(config: &FieldConfigMap) -> Vec<(&str, &FieldConfig)> {
    let mut fields: Vec<(&str, &FieldConfig)> = config
        .iter()
        .filter(|(_, c)| c.visible)
        .map(|(name, c)| (name.as_str(), c))
        .collect();
    fields.sort_by(|(an, a), (bn, b)| a.order.cmp(&b.order).then_with(|| an.cmp(bn)));
    fields
}

/// Required fields whose value is missing or blank.
pub fn missing_required(config: &FieldConfigMap, values: &HashMap<String, String>) -> Vec<String> {
    ordered_fields(config)
        .into_iter()
        .filter(|(_, c)| c.required)
        .filter(|(name, _)| values.get(*name).map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_defaults() -> FieldConfigMap {
        let mut map = FieldConfigMap::new();
        map.insert("name".into(), FieldConfig::new("Name", 1).required());
        map.insert("sku".into(), FieldConfig::new("SKU", 2));
        map.insert("barcode".into(), FieldConfig::new("Barcode", 3));
        map.insert("price".into(), FieldConfig::new("Price", 4).required());
        map
    }

    fn overrides(json: &str) -> FieldOverrides {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_no_overrides_keeps_defaults() {
        let merged = merge_field_config(&product_defaults(), &FieldOverrides::new());
        assert_eq!(merged, product_defaults());
    }

    #[test]
    fn test_override_wins_per_member() {
        let merged = merge_field_config(
            &product_defaults(),
            &overrides(r#"{"sku": {"required": true, "label": "Código"}}"#),
        );
        let sku = &merged["sku"];
        assert_eq!(sku.label, "Código");
        assert!(sku.required);
        assert_eq!(sku.order, 2);
        assert_eq!(merged["name"], product_defaults()["name"]);
    }

    #[test]
    fn test_visible_false_removes_field() {
        let merged = merge_field_config(&product_defaults(), &overrides(r#"{"barcode": {"visible": false}}"#));
        assert!(!merged.contains_key("barcode"));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_unknown_field_is_added() {
        let merged = merge_field_config(&product_defaults(), &overrides(r#"{"brand": {"order": 0}}"#));
        let brand = &merged["brand"];
        assert_eq!(brand.label, "brand");
        assert_eq!(brand.order, 0);
        assert!(brand.visible);

        let hidden = merge_field_config(&product_defaults(), &overrides(r#"{"brand": {"visible": false}}"#));
        assert!(!hidden.contains_key("brand"));
    }

    #[test]
    fn test_ordered_fields() {
        let merged = merge_field_config(
            &product_defaults(),
            &overrides(r#"{"price": {"order": 0}, "barcode": {"order": 2}}"#),
        );
        let names: Vec<&str> = ordered_fields(&merged).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["price", "name", "barcode", "sku"]);
    }

    #[test]
    fn test_missing_required() {
        let mut values = HashMap::new();
        values.insert("name".to_string(), "  ".to_string());
        values.insert("sku".to_string(), "A-1".to_string());
        assert_eq!(missing_required(&product_defaults(), &values), vec!["name", "price"]);

        values.insert("name".to_string(), "Drill".to_string());
        values.insert("price".to_string(), "10".to_string());
        assert!(missing_required(&product_defaults(), &values).is_empty());
    }
}
