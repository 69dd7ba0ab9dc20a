//! Group membership directory seam.
//!
//! Group ACL matching needs to know which groups a user belongs to. The
//! lookup lives behind a trait so the embedding scheduler can plug in the
//! operating system's directory (or any other identity source) without
//! the engine depending on it. Lookup failures and unknown users are
//! treated as non-membership, never as errors.

use std::collections::HashMap;

/// Resolves a user name to the set of group names the user belongs to,
/// primary and supplementary alike.
pub trait GroupDirectory: Send + Sync {
    /// Returns the group names `user` belongs to. Unknown users yield
    /// an empty list.
    fn groups_of(&self, user: &str) -> Vec<String>;

    /// Returns true if `user` is a member of `group`.
    fn is_member(&self, user: &str, group: &str) -> bool {
        self.groups_of(user).iter().any(|g| g == group)
    }
}

/// A directory backed by a static user-to-groups map, typically loaded
/// from the configuration file.
#[derive(Debug, Clone, Default)]
pub struct StaticGroups {
    map: HashMap<String, Vec<String>>,
}

impl StaticGroups {
    /// Creates an empty directory that knows no users.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Adds a user with the given group memberships, replacing any
    /// previous entry for the same user.
    pub fn with_user(
        mut self,
        user: impl Into<String>,
        groups: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.map
            .insert(user.into(), groups.into_iter().map(Into::into).collect());
        self
    }
}

impl From<HashMap<String, Vec<String>>> for StaticGroups {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        Self { map }
    }
}

impl GroupDirectory for StaticGroups {
    fn groups_of(&self, user: &str) -> Vec<String> {
        self.map.get(user).cloned().unwrap_or_default()
    }
}
