//! ACL module - ordered, sign-prefixed access control lists.
//!
//! An ACL attribute owns one ordered string set plus the ACL type that
//! selects its order and match behavior. Mutations (replace/add/remove)
//! keep the list in type-specific priority order; the check procedure
//! walks the list in that order and the first matching entry decides.

pub mod check;
pub mod matching;
pub mod mutate;
pub mod order;


use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{AclError, Result};
use crate::set::StringSet;

// Re-exports for convenience
pub use check::{acl_check, CheckContext};
pub use mutate::MutationOp;

/// The type of an ACL attribute, fixed at definition time.
///
/// The type selects which order function places entries at mutation time
/// and which match function compares candidates at check time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AclType {
    /// Hostname patterns, wildcardable with a leading `*` segment.
    Host,
    /// `user` or `user@hostpattern` entries.
    User,
    /// Group names resolved through the group directory.
    Group,
    /// `subnet/mask` entries matched against dotted IPv4 candidates.
    Subnet,
    /// Exact-string entries with no ordering refinement.
    Generic,
}

impl FromStr for AclType {
    type Err = AclError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "host" => Ok(AclType::Host),
            "user" => Ok(AclType::User),
            "group" => Ok(AclType::Group),
            "subnet" => Ok(AclType::Subnet),
            "generic" => Ok(AclType::Generic),
            _ => Err(AclError::config(format!("Unknown ACL type: {}", s))),
        }
    }
}

/// An ACL attribute: the typed, ordered list of signed patterns owned by
/// a scheduler object (queue, server, host).
///
/// An empty list and an unset attribute are the same thing here; both
/// fall back to the type-dependent default at check time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AclAttribute {
    acl_type: AclType,
    entries: StringSet,
}

impl AclAttribute {
    /// Creates an empty (unset) attribute of the given type.
    pub fn new(acl_type: AclType) -> Self {
        Self {
            acl_type,
            entries: StringSet::new(),
        }
    }

    /// Creates an attribute holding `entries` as-is, without running the
    /// mutation procedure. The caller is responsible for order and
    /// duplicate invariants; decoded wire values should go through
    /// [`MutationOp::Replace`] instead.
    pub fn with_entries(acl_type: AclType, entries: impl Into<StringSet>) -> Self {
        Self {
            acl_type,
            entries: entries.into(),
        }
    }

    /// Returns the ACL type.
    pub fn acl_type(&self) -> AclType {
        self.acl_type
    }

    /// Returns the stored entries in match-priority order.
    pub fn entries(&self) -> &StringSet {
        &self.entries
    }

    /// Returns true if no list is configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies a mutation with the operand set. On any error the
    /// attribute keeps its pre-operation value.
    pub fn apply(&mut self, op: MutationOp, operand: &StringSet) -> Result<()> {
        mutate::apply_to_set(self.acl_type, &mut self.entries, op, operand)
    }

    /// Applies a mutation and invokes `hook` once if it succeeded.
    /// The hook is the attribute-lifecycle "value changed" notification.
    pub fn apply_with_hook<F>(&mut self, op: MutationOp, operand: &StringSet, hook: F) -> Result<()>
    where
        F: FnOnce(&AclAttribute),
    {
        self.apply(op, operand)?;
        hook(self);
        Ok(())
    }

    /// Checks a candidate identity against this list. See [`acl_check`].
    pub fn check(&self, candidate: Option<&str>, ctx: &CheckContext<'_>) -> bool {
        acl_check(self, candidate, ctx)
    }
}

/// Returns the entry text with a single leading `+` or `-` removed.
pub(crate) fn strip_sign(entry: &str) -> &str {
    match entry.as_bytes().first() {
        Some(b'+') | Some(b'-') => &entry[1..],
        _ => entry,
    }
}

/// Returns true if the entry carries an explicit deny sign.
pub(crate) fn is_deny(entry: &str) -> bool {
    entry.as_bytes().first() == Some(&b'-')
}

/// A bare `+` or `-` entry sets the running default instead of being
/// matched; returns the default it selects.
pub(crate) fn bare_sign(entry: &str) -> Option<bool> {
    match entry {
        "+" => Some(true),
        "-" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acl_type_parse() {
        assert_eq!("host".parse::<AclType>().unwrap(), AclType::Host);
        assert_eq!("USER".parse::<AclType>().unwrap(), AclType::User);
        assert_eq!("Group".parse::<AclType>().unwrap(), AclType::Group);
        assert_eq!("subnet".parse::<AclType>().unwrap(), AclType::Subnet);
        assert_eq!("generic".parse::<AclType>().unwrap(), AclType::Generic);
        assert!("invalid".parse::<AclType>().is_err());
    }

    #[test]
    fn test_strip_sign() {
        assert_eq!(strip_sign("+alice"), "alice");
        assert_eq!(strip_sign("-alice"), "alice");
        assert_eq!(strip_sign("alice"), "alice");
        // only a single leading sign is stripped
        assert_eq!(strip_sign("--alice"), "-alice");
        assert_eq!(strip_sign("+"), "");
        assert_eq!(strip_sign(""), "");
    }

    #[test]
    fn test_is_deny() {
        assert!(is_deny("-alice"));
        assert!(!is_deny("+alice"));
        assert!(!is_deny("alice"));
        assert!(!is_deny(""));
    }

    #[test]
    fn test_bare_sign() {
        assert_eq!(bare_sign("+"), Some(true));
        assert_eq!(bare_sign("-"), Some(false));
        assert_eq!(bare_sign("+a"), None);
        assert_eq!(bare_sign("a"), None);
        assert_eq!(bare_sign(""), None);
    }

    #[test]
    fn test_attribute_accessors() {
        let attr = AclAttribute::new(AclType::Host);
        assert_eq!(attr.acl_type(), AclType::Host);
        assert!(attr.is_empty());

        let attr = AclAttribute::with_entries(
            AclType::User,
            ["+alice", "-bob"].into_iter().collect::<StringSet>(),
        );
        assert_eq!(attr.entries().len(), 2);
        assert!(!attr.is_empty());
    }
}
