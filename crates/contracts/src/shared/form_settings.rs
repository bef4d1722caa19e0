use serde::{Deserialize, Serialize};

use super::field_config::{merge_field_config, FieldConfigMap, FieldOverrides};

/// Per-form settings as stored by the server (`settings_json` holds field overrides).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FormSettings {
    pub form_key: String,
    pub settings_json: String,
}

impl FormSettings {
    pub fn field_overrides(&self) -> Result<FieldOverrides, serde_json::Error> {
        if self.settings_json.trim().is_empty() {
            return Ok(FieldOverrides::new());
        }
        serde_json::from_str(&self.settings_json)
    }

    /// Defaults merged with this form's overrides. Unreadable JSON keeps the defaults.
    pub fn apply_to(&self, defaults: &FieldConfigMap) -> FieldConfigMap {
        match self.field_overrides() {
            Ok(overrides) => merge_field_config(defaults, &overrides),
            Err(e) => {
                log::warn!("Ignoring field settings for form {}: {}", self.form_key, e);
                defaults.clone()
            }
        }
    }
}
