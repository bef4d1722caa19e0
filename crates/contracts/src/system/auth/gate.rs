use super::capability::Capability;
use super::permission::PermissionCheck;
use crate::shared::locale::Locale;

/// What a permission gate renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    Children,
    /// Caller-supplied fallback, rendered even when it is empty.
    Fallback,
    /// No fallback was supplied: built-in message naming the capability.
    Denied(String),
}

impl GateOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Children)
    }
}

/// Evaluates `can` once. Nothing is cached; call again on every render.
pub fn gate_decision<C>(
    can: &C,
    permission: &str,
    action: Option<&str>,
    has_fallback: bool,
    locale: Locale,
) -> GateOutcome
where
    C: PermissionCheck + ?Sized,
{
    if can.can(permission, action) {
        GateOutcome::Children
    } else if has_fallback {
        GateOutcome::Fallback
    } else {
        GateOutcome::Denied(locale.access_denied(&Capability::effective(permission, action)))
    }
}
