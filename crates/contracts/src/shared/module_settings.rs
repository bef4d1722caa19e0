//! Which application modules are switched on.
//!
//! The store loads once on construction and saves after every mutation.
//! Persistence goes through `SettingsRepository`, so the browser build
//! can back it with localStorage and tests with memory.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings storage is unavailable")]
    Unavailable,
    #[error("settings storage error: {0}")]
    Storage(String),
    #[error("settings are not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}

/// Module name -> enabled. Modules not listed are enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSettings {
    #[serde(default)]
    pub modules: BTreeMap<String, bool>,
}

impl ModuleSettings {
    pub fn is_enabled(&self, module: &str) -> bool {
        self.modules.get(module).copied().unwrap_or(true)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }
}

pub trait SettingsRepository {
    fn load(&self) -> Result<ModuleSettings, SettingsError>;

    fn save(&self, settings: &ModuleSettings) -> Result<(), SettingsError>;
}

/// Keeps the serialized settings in memory. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsRepository {
    slot: Arc<Mutex<Option<String>>>,
}

impl InMemorySettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(json.into()))),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|s| s.clone())
    }
}

impl SettingsRepository for InMemorySettingsRepository {
    fn load(&self) -> Result<ModuleSettings, SettingsError> {
        let slot = self.slot.lock().map_err(|e| SettingsError::Storage(e.to_string()))?;
        match slot.as_deref() {
            Some(json) => ModuleSettings::from_json(json),
            None => Ok(ModuleSettings::default()),
        }
    }

    fn save(&self, settings: &ModuleSettings) -> Result<(), SettingsError> {
        let json = settings.to_json()?;
        let mut slot = self.slot.lock().map_err(|e| SettingsError::Storage(e.to_string()))?;
        *slot = Some(json);
        Ok(())
    }
}

#[derive(Debug)]
pub struct ModuleSettingsStore<R: SettingsRepository> {
    repository: R,
    settings: ModuleSettings,
}

impl<R: SettingsRepository> ModuleSettingsStore<R> {
    /// Loads from `repository`; unreadable settings fall back to defaults.
    pub fn load(repository: R) -> Self {
        let settings = repository.load().unwrap_or_else(|e| {
            log::warn!("Module settings not loaded, using defaults: {}", e);
            ModuleSettings::default()
        });
        Self { repository, settings }
    }

    pub fn settings(&self) -> &ModuleSettings {
        &self.settings
    }

    pub fn is_enabled(&self, module: &str) -> bool {
        self.settings.is_enabled(module)
    }

    pub fn set_enabled(&mut self, module: &str, enabled: bool) -> Result<(), SettingsError> {
        self.settings.modules.insert(module.to_string(), enabled);
        self.repository.save(&self.settings)
    }

    /// Flips a module and returns its new state.
    pub fn toggle(&mut self, module: &str) -> Result<bool, SettingsError> {
        let enabled = !self.is_enabled(module);
        self.set_enabled(module, enabled)?;
        Ok(enabled)
    }

    pub fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = ModuleSettings::default();
        self.repository.save(&self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenRepository;

    impl SettingsRepository for BrokenRepository {
        fn load(&self) -> Result<ModuleSettings, SettingsError> {
            Err(SettingsError::Unavailable)
        }

        fn save(&self, _settings: &ModuleSettings) -> Result<(), SettingsError> {
            Err(SettingsError::Unavailable)
        }
    }

    #[test]
    fn test_unknown_modules_are_enabled() {
        let store = ModuleSettingsStore::load(InMemorySettingsRepository::new());
        assert!(store.is_enabled("purchases"));
        assert!(store.settings().modules.is_empty());
    }

    #[test]
    fn test_mutation_is_saved() {
        let repo = InMemorySettingsRepository::new();
        let mut store = ModuleSettingsStore::load(repo.clone());
        store.set_enabled("crm", false).unwrap();
        assert!(!store.is_enabled("crm"));

        let reloaded = ModuleSettingsStore::load(repo.clone());
        assert!(!reloaded.is_enabled("crm"));
        assert!(reloaded.is_enabled("hr"));
    }

    #[test]
    fn test_toggle_and_reset() {
        let repo = InMemorySettingsRepository::new();
        let mut store = ModuleSettingsStore::load(repo.clone());
        assert!(!store.toggle("inventory").unwrap());
        assert!(store.toggle("inventory").unwrap());

        store.set_enabled("reports", false).unwrap();
        store.reset().unwrap();
        assert!(store.is_enabled("reports"));
        assert_eq!(repo.raw().as_deref(), Some(r#"{"modules":{}}"#));
    }

    #[test]
    fn test_loads_existing_json() {
        let repo = InMemorySettingsRepository::with_json(r#"{"modules":{"sales":false,"hr":true}}"#);
        let store = ModuleSettingsStore::load(repo);
        assert!(!store.is_enabled("sales"));
        assert!(store.is_enabled("hr"));
    }

    #[test]
    fn test_corrupt_storage_falls_back_to_defaults() {
        let repo = InMemorySettingsRepository::with_json("not json");
        assert!(matches!(repo.load(), Err(SettingsError::Format(_))));
        let store = ModuleSettingsStore::load(repo);
        assert_eq!(store.settings(), &ModuleSettings::default());
    }

    #[test]
    fn test_save_errors_propagate() {
        let mut store = ModuleSettingsStore::load(BrokenRepository);
        assert!(matches!(store.set_enabled("crm", false), Err(SettingsError::Unavailable)));
        // in-memory state still reflects the change
        assert!(!store.is_enabled("crm"));
    }
}
