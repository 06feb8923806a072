//! Input checks that do not depend on any manager state.

/// Loose email shape check: non-empty and containing both `@` and `.`.
///
/// This is not an RFC 5322 validator. It is the same check used to decide
/// whether a submission looks like an address at all.
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.contains('@') && email.contains('.')
}

/// Whether an email is enough to accept its user into the manager.
pub(crate) fn has_at_sign(email: &str) -> bool {
    email.contains('@')
}

/// A present, non-empty name.
pub(crate) fn usable_name(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.is_empty())
}
