use serde::{Deserialize, Serialize};

/// Body of a list endpoint.
///
/// Some services return a bare JSON array, others wrap it as `{ "items": [...] }`
/// (optionally with paging fields next to it). Both decode here so callers
/// only ever see `Vec<T>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Bare(Vec<T>),
    Envelope {
        items: Vec<T>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        total: Option<u64>,
    },
}

impl<T> ListResponse<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Bare(items) => items,
            Self::Envelope { items, .. } => items,
        }
    }

    /// Server-reported total when the envelope carries one, else the item count.
    pub fn total(&self) -> u64 {
        match self {
            Self::Bare(items) => items.len() as u64,
            Self::Envelope { items, total } => total.unwrap_or(items.len() as u64),
        }
    }
}

impl<T> From<ListResponse<T>> for Vec<T> {
    fn from(value: ListResponse<T>) -> Self {
        value.into_items()
    }
}
