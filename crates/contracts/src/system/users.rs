use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::shared::field_config::{FieldConfig, FieldConfigMap};
use crate::shared::filtering::{contains_ci, Searchable};
use crate::shared::sorting::{compare_text, Sortable};

pub const USER_FORM_KEY: &str = "sys_users_form";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "username" => compare_text(Some(&self.username), Some(&other.username)),
            "full_name" => compare_text(self.full_name.as_deref(), other.full_name.as_deref()),
            "email" => compare_text(self.email.as_deref(), other.email.as_deref()),
            "role" => compare_text(self.role.as_deref(), other.role.as_deref()),
            "is_active" => self.is_active.cmp(&other.is_active),
            "created_at" => self.created_at.cmp(&other.created_at),
            "last_login_at" => compare_text(self.last_login_at.as_deref(), other.last_login_at.as_deref()),
            _ => compare_text(Some(&self.username), Some(&other.username)),
        }
    }
}

impl Searchable for User {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(Some(&self.username), filter)
            || contains_ci(self.full_name.as_deref(), filter)
            || contains_ci(self.email.as_deref(), filter)
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "username" => Some(self.username.clone()),
            "full_name" => self.full_name.clone(),
            "email" => self.email.clone(),
            "role" => self.role.clone(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<String>,
}

impl CreateUserDto {
    /// Builds the DTO from form values keyed by field name. Blank values become `None`.
    pub fn from_values(values: &HashMap<String, String>) -> Self {
        let get = |name: &str| {
            values
                .get(name)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        Self {
            username: get("username").unwrap_or_default(),
            email: get("email"),
            full_name: get("full_name"),
            role: get("role"),
        }
    }
}

/// Built-in layout of the user form; the server may override it per tenant.
pub fn default_form_fields() -> FieldConfigMap {
    let mut fields = FieldConfigMap::new();
    fields.insert("username".into(), FieldConfig::new("Username", 10).required());
    fields.insert("full_name".into(), FieldConfig::new("Full name", 20));
    fields.insert("email".into(), FieldConfig::new("Email", 30));
    fields.insert("role".into(), FieldConfig::new("Role", 40));
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::field_config::{merge_field_config, missing_required, FieldOverrides};

    #[test]
    fn test_from_values() {
        let mut values = HashMap::new();
        values.insert("username".to_string(), " ana ".to_string());
        values.insert("email".to_string(), "".to_string());
        values.insert("role".to_string(), "cashier".to_string());
        let dto = CreateUserDto::from_values(&values);
        assert_eq!(dto.username, "ana");
        assert_eq!(dto.email, None);
        assert_eq!(dto.full_name, None);
        assert_eq!(dto.role.as_deref(), Some("cashier"));
    }

    #[test]
    fn test_tenant_can_require_email() {
        let overrides: FieldOverrides =
            serde_json::from_str(r#"{"email": {"required": true}, "role": {"visible": false}}"#).unwrap();
        let fields = merge_field_config(&default_form_fields(), &overrides);
        assert!(!fields.contains_key("role"));

        let mut values = HashMap::new();
        values.insert("username".to_string(), "ana".to_string());
        assert_eq!(missing_required(&fields, &values), vec!["email"]);
    }
}
