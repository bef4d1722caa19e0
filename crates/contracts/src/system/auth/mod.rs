mod capability;
mod gate;
mod permission;

pub use capability::{Capability, CapabilityParseError};
pub use gate::{gate_decision, GateOutcome};
pub use permission::{PermissionCheck, PermissionSet};

use serde::{Deserialize, Serialize};

/// Current user as returned by `/api/system/auth/me`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub tenant_id: Option<String>,
    pub is_admin: bool,
    /// Granted capability strings (`resource`, `resource:action`, `resource:*`, `*`).
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl UserInfo {
    pub fn permission_set(&self) -> PermissionSet {
        PermissionSet::from_strings(self.permissions.iter().map(String::as_str)).with_admin(self.is_admin)
    }
}
