//! Authorization policy configuration types.

use serde::{Deserialize, Serialize};

/// Deployment-time policy knobs for the ACL engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// When true, checks against an absent or exhausted list allow
    /// instead of deny ("default allow all").
    pub default_allow: bool,

    /// The server's own hostname, the Host-ACL fallback comparand.
    /// Defaults to the local hostname when unset.
    pub server_host: Option<String>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            default_allow: false,
            server_host: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_default() {
        let policy = PolicyConfig::default();
        assert!(!policy.default_allow);
        assert!(policy.server_host.is_none());
    }
}
