use std::collections::BTreeSet;

use super::capability::Capability;

/// The `can(permission, action)` predicate consumed by the gate.
pub trait PermissionCheck {
    fn can(&self, permission: &str, action: Option<&str>) -> bool;
}

impl<F> PermissionCheck for F
where
    F: Fn(&str, Option<&str>) -> bool,
{
    fn can(&self, permission: &str, action: Option<&str>) -> bool {
        self(permission, action)
    }
}

/// Capabilities granted to the current user.
///
/// `*` grants everything, `resource` and `resource:*` grant every action on
/// `resource`, `resource:action` grants exactly that action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    granted: BTreeSet<Capability>,
    admin: bool,
}

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unparseable entries are skipped with a warning.
    pub fn from_strings<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let mut set = Self::new();
        for value in values {
            match Capability::parse(value) {
                Ok(cap) => {
                    set.granted.insert(cap);
                }
                Err(e) => log::warn!("Skipping permission: {}", e),
            }
        }
        set
    }

    pub fn with_admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    pub fn grant(&mut self, capability: Capability) {
        self.granted.insert(capability);
    }

    pub fn revoke(&mut self, capability: &Capability) -> bool {
        self.granted.remove(capability)
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    pub fn is_empty(&self) -> bool {
        self.granted.is_empty() && !self.admin
    }

    pub fn allows(&self, requested: &Capability) -> bool {
        if self.admin || self.granted.iter().any(Capability::is_wildcard) {
            return true;
        }
        if self.granted.contains(requested) {
            return true;
        }
        match &requested.action {
            Some(_) => {
                self.granted.contains(&Capability::resource(requested.resource.as_str()))
                    || self.granted.contains(&Capability::new(requested.resource.as_str(), Some("*")))
            }
            None => false,
        }
    }
}

impl PermissionCheck for PermissionSet {
    fn can(&self, permission: &str, action: Option<&str>) -> bool {
        match Capability::parse(&Capability::effective(permission, action)) {
            Ok(requested) => self.allows(&requested),
            Err(_) => self.admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[&str]) -> PermissionSet {
        PermissionSet::from_strings(values.iter().copied())
    }

    #[test]
    fn test_exact_grant() {
        let perms = set(&["billing:create"]);
        assert!(perms.can("billing:create", None));
        assert!(perms.can("billing", Some("create")));
        assert!(!perms.can("billing", Some("delete")));
        assert!(!perms.can("billing", None));
    }

    #[test]
    fn test_resource_grants_all_actions() {
        for grant in ["usuarios", "usuarios:*"] {
            let perms = set(&[grant]);
            assert!(perms.can("usuarios", Some("delete")), "{grant}");
            assert!(!perms.can("ventas", Some("read")), "{grant}");
        }
        assert!(set(&["usuarios"]).can("usuarios", None));
    }

    #[test]
    fn test_wildcard_and_admin() {
        assert!(set(&["*"]).can("anything", Some("goes")));
        let admin = PermissionSet::new().with_admin(true);
        assert!(admin.can("reports", Some("export")));
        assert!(admin.can("", None));
        assert!(!PermissionSet::new().can("", None));
    }

    #[test]
    fn test_invalid_entries_are_skipped() {
        let perms = set(&["", "a:b:c", "crm:read"]);
        assert!(perms.can("crm", Some("read")));
        assert!(!perms.is_empty());
        assert!(set(&[":x"]).is_empty());
    }

    #[test]
    fn test_grant_and_revoke() {
        let mut perms = PermissionSet::new();
        perms.grant(Capability::new("hr", Some("read")));
        assert!(perms.can("hr", Some("read")));
        assert!(perms.revoke(&Capability::new("hr", Some("read"))));
        assert!(!perms.can("hr", Some("read")));
    }

    #[test]
    fn test_closure_predicate() {
        let only_read = |_: &str, action: Option<&str>| action == Some("read");
        assert!(only_read.can("sales", Some("read")));
        assert!(!only_read.can("sales", Some("write")));
    }
}
