//! Module enablement persisted in localStorage.

use contracts::shared::module_settings::{
    ModuleSettings, ModuleSettingsStore, SettingsError, SettingsRepository,
};
use leptos::prelude::*;
use web_sys::window;

const MODULE_SETTINGS_KEY: &str = "erp_module_settings";

/// Application modules that can be switched off: (key, English name, Spanish name).
pub const MODULES: &[(&str, &str, &str)] = &[
    ("sales", "Sales", "Ventas"),
    ("purchases", "Purchases", "Compras"),
    ("crm", "CRM", "CRM"),
    ("hr", "Human resources", "Recursos humanos"),
    ("inventory", "Inventory", "Inventario"),
    ("invoicing", "Invoicing", "Facturación"),
    ("reconciliation", "Reconciliation", "Conciliación"),
    ("reports", "Reports", "Reportes"),
    ("users", "Users", "Usuarios"),
];

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSettingsRepository;

impl SettingsRepository for LocalStorageSettingsRepository {
    fn load(&self) -> Result<ModuleSettings, SettingsError> {
        let storage = get_local_storage().ok_or(SettingsError::Unavailable)?;
        let raw = storage
            .get_item(MODULE_SETTINGS_KEY)
            .map_err(|e| SettingsError::Storage(format!("{:?}", e)))?;
        match raw {
            Some(json) => ModuleSettings::from_json(&json),
            None => Ok(ModuleSettings::default()),
        }
    }

    fn save(&self, settings: &ModuleSettings) -> Result<(), SettingsError> {
        let storage = get_local_storage().ok_or(SettingsError::Unavailable)?;
        storage
            .set_item(MODULE_SETTINGS_KEY, &settings.to_json()?)
            .map_err(|e| SettingsError::Storage(format!("{:?}", e)))
    }
}

/// Module settings context. Mutations are written through to localStorage.
#[derive(Clone, Copy)]
pub struct ModuleSettingsContext {
    store: RwSignal<ModuleSettingsStore<LocalStorageSettingsRepository>>,
}

impl ModuleSettingsContext {
    pub fn is_enabled(&self, module: &str) -> bool {
        self.store.with(|s| s.is_enabled(module))
    }

    pub fn set_enabled(&self, module: &str, enabled: bool) {
        self.store.update(|s| {
            if let Err(e) = s.set_enabled(module, enabled) {
                log::error!("Failed to save module settings: {}", e);
            }
        });
    }

    pub fn toggle(&self, module: &str) {
        self.store.update(|s| {
            if let Err(e) = s.toggle(module) {
                log::error!("Failed to save module settings: {}", e);
            }
        });
    }

    pub fn reset(&self) {
        self.store.update(|s| {
            if let Err(e) = s.reset() {
                log::error!("Failed to reset module settings: {}", e);
            }
        });
    }
}

pub fn provide_module_settings() {
    let store = ModuleSettingsStore::load(LocalStorageSettingsRepository);
    provide_context(ModuleSettingsContext {
        store: RwSignal::new(store),
    });
}

pub fn use_module_settings() -> ModuleSettingsContext {
    use_context::<ModuleSettingsContext>()
        .expect("ModuleSettingsContext not found. Call provide_module_settings() in App.")
}
