//! UI language for shared messages.
//!
//! Modules are written once and take a `Locale`; there are no per-language
//! copies of a module.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Name of the language in that language.
    pub fn label(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Español",
        }
    }

    /// Unknown tags fall back to English; region suffixes are ignored.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or("").to_ascii_lowercase();
        match primary.as_str() {
            "es" => Locale::Es,
            _ => Locale::En,
        }
    }

    pub fn all() -> [Locale; 2] {
        [Locale::En, Locale::Es]
    }

    pub fn access_denied(&self, capability: &str) -> String {
        match self {
            Locale::En => format!("Access denied. Permission \"{}\" is required.", capability),
            Locale::Es => format!("Acceso denegado. Se requiere el permiso \"{}\".", capability),
        }
    }

    pub fn not_authenticated(&self) -> &'static str {
        match self {
            Locale::En => "Not authenticated. Please log in.",
            Locale::Es => "No autenticado. Inicie sesión.",
        }
    }

    /// "page / total (count)" label of the pagination bar.
    pub fn page_summary(&self, page: usize, total_pages: usize, total_items: usize) -> String {
        match self {
            Locale::En => format!("Page {} of {} ({} items)", page, total_pages, total_items),
            Locale::Es => format!("Página {} de {} ({} registros)", page, total_pages, total_items),
        }
    }

    pub fn search_placeholder(&self) -> &'static str {
        match self {
            Locale::En => "Search (min. 3 characters)...",
            Locale::Es => "Buscar (mín. 3 caracteres)...",
        }
    }

    pub fn load_failed(&self, what: &str, error: &str) -> String {
        match self {
            Locale::En => format!("Failed to load {}: {}", what, error),
            Locale::Es => format!("No se pudo cargar {}: {}", what, error),
        }
    }
}
