//! ACL check procedure - the authorization decision.
//!
//! Entries are scanned in stored order and the first matching one
//! decides: allow unless its sign is `-`. Bare `+`/`-` entries do not
//! match anything; they move the running default for a scan that
//! reaches the end of the list without a match. The scan is forward
//! only, so a bare sign can never affect entries placed before it.

use tracing::{debug, trace};

use super::matching::entry_matches;
use super::{bare_sign, is_deny, strip_sign, AclAttribute, AclType};
use crate::directory::GroupDirectory;

/// Injected collaborators for an ACL check.
///
/// The server hostname is the comparand for the Host-type default when
/// no list is configured, and the policy flag turns the engine into
/// default-allow (deployment choice, off by default).
pub struct CheckContext<'a> {
    server_host: &'a str,
    default_allow: bool,
    directory: &'a dyn GroupDirectory,
}

impl<'a> CheckContext<'a> {
    /// Creates a context with the default deny policy.
    pub fn new(server_host: &'a str, directory: &'a dyn GroupDirectory) -> Self {
        Self {
            server_host,
            default_allow: false,
            directory,
        }
    }

    /// Selects the "default allow all" policy.
    pub fn with_default_allow(mut self, default_allow: bool) -> Self {
        self.default_allow = default_allow;
        self
    }

    /// Returns the configured server hostname.
    pub fn server_host(&self) -> &str {
        self.server_host
    }
}

/// Decides whether `candidate` is allowed by `acl`.
///
/// With no list configured the decision is the type-dependent default:
/// under the default-allow policy everything is allowed; otherwise a
/// Host ACL admits only the server's own host and every other type
/// denies. An absent candidate always gets the pre-scan default.
pub fn acl_check(acl: &AclAttribute, candidate: Option<&str>, ctx: &CheckContext<'_>) -> bool {
    let Some(name) = candidate else {
        trace!(acl_type = ?acl.acl_type(), "no candidate identity, returning default");
        return ctx.default_allow;
    };

    if acl.is_empty() {
        let allowed = if ctx.default_allow {
            true
        } else if acl.acl_type() == AclType::Host {
            // no list configured: allow only from the server's own host
            super::matching::hacl_match(name, ctx.server_host)
        } else {
            false
        };
        debug!(
            acl_type = ?acl.acl_type(),
            candidate = name,
            allowed,
            "no ACL configured, using default"
        );
        return allowed;
    }

    let mut running_default = ctx.default_allow;
    for entry in acl.entries().iter() {
        if let Some(default) = bare_sign(entry) {
            running_default = default;
            continue;
        }
        let pattern = strip_sign(entry);
        if entry_matches(acl.acl_type(), name, pattern, ctx.directory) {
            let allowed = !is_deny(entry);
            debug!(
                acl_type = ?acl.acl_type(),
                candidate = name,
                entry,
                allowed,
                "ACL entry matched"
            );
            return allowed;
        }
    }

    debug!(
        acl_type = ?acl.acl_type(),
        candidate = name,
        allowed = running_default,
        "no ACL entry matched, using running default"
    );
    running_default
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::StaticGroups;
    use crate::set::StringSet;

    fn attr(acl_type: AclType, values: &[&str]) -> AclAttribute {
        AclAttribute::with_entries(acl_type, values.iter().copied().collect::<StringSet>())
    }

    fn ctx<'a>(directory: &'a StaticGroups) -> CheckContext<'a> {
        CheckContext::new("head01.cluster.example.com", directory)
    }

    #[test]
    fn test_empty_host_acl_allows_server_host_only() {
        let dir = StaticGroups::new();
        let acl = AclAttribute::new(AclType::Host);

        assert!(acl.check(Some("head01.cluster.example.com"), &ctx(&dir)));
        // hostname comparison is case-insensitive
        assert!(acl.check(Some("HEAD01.Cluster.Example.Com"), &ctx(&dir)));
        assert!(!acl.check(Some("other.cluster.example.com"), &ctx(&dir)));
    }

    #[test]
    fn test_empty_non_host_acl_denies() {
        let dir = StaticGroups::new();
        assert!(!AclAttribute::new(AclType::User).check(Some("alice"), &ctx(&dir)));
        assert!(!AclAttribute::new(AclType::Group).check(Some("alice"), &ctx(&dir)));
        assert!(!AclAttribute::new(AclType::Subnet).check(Some("10.0.0.1"), &ctx(&dir)));
    }

    #[test]
    fn test_default_allow_policy_admits_everything_on_empty_list() {
        let dir = StaticGroups::new();
        let context = ctx(&dir).with_default_allow(true);

        assert!(AclAttribute::new(AclType::User).check(Some("anyone"), &context));
        assert!(AclAttribute::new(AclType::Host).check(Some("any.host"), &context));
    }

    #[test]
    fn test_absent_candidate_gets_prescan_default() {
        let dir = StaticGroups::new();
        let acl = attr(AclType::User, &["+alice"]);

        assert!(!acl.check(None, &ctx(&dir)));
        assert!(acl.check(None, &ctx(&dir).with_default_allow(true)));
    }

    #[test]
    fn test_first_match_wins() {
        let dir = StaticGroups::new();
        let acl = attr(AclType::Host, &["-a.example.com", "+*.example.com"]);

        assert!(!acl.check(Some("a.example.com"), &ctx(&dir)));
        assert!(acl.check(Some("b.example.com"), &ctx(&dir)));
    }

    #[test]
    fn test_unsigned_entry_allows_on_match() {
        let dir = StaticGroups::new();
        let acl = attr(AclType::User, &["alice"]);

        assert!(acl.check(Some("alice"), &ctx(&dir)));
        assert!(!acl.check(Some("bob"), &ctx(&dir)));
    }

    #[test]
    fn test_bare_sign_moves_running_default() {
        let dir = StaticGroups::new();
        // no entry matches "y.example.com"; the bare "+" flips the
        // fallback to allow
        let acl = attr(AclType::Host, &["-x.example.com", "+"]);

        assert!(acl.check(Some("y.example.com"), &ctx(&dir)));
        assert!(!acl.check(Some("x.example.com"), &ctx(&dir)));
    }

    #[test]
    fn test_bare_minus_overrides_default_allow_policy() {
        let dir = StaticGroups::new();
        let acl = attr(AclType::User, &["-"]);

        let context = ctx(&dir).with_default_allow(true);
        assert!(!acl.check(Some("anyone"), &context));
    }

    #[test]
    fn test_last_bare_sign_governs() {
        let dir = StaticGroups::new();
        let acl = attr(AclType::User, &["+", "-"]);

        assert!(!acl.check(Some("anyone"), &ctx(&dir)));
    }

    #[test]
    fn test_group_check_uses_directory() {
        let dir = StaticGroups::new().with_user("alice", ["hpc"]);
        let acl = attr(AclType::Group, &["hpc"]);

        assert!(acl.check(Some("alice"), &ctx(&dir)));
        assert!(!acl.check(Some("bob"), &ctx(&dir)));
    }

    #[test]
    fn test_subnet_check() {
        let dir = StaticGroups::new();
        let acl = attr(AclType::Subnet, &["-10.0.0.0/24", "10.0.0.0/8"]);

        assert!(!acl.check(Some("10.0.0.5"), &ctx(&dir)));
        assert!(acl.check(Some("10.1.0.5"), &ctx(&dir)));
        assert!(!acl.check(Some("11.0.0.1"), &ctx(&dir)));
    }

    #[test]
    fn test_generic_check_is_exact() {
        let dir = StaticGroups::new();
        let acl = attr(AclType::Generic, &["-token-b", "token-a"]);

        assert!(acl.check(Some("token-a"), &ctx(&dir)));
        assert!(!acl.check(Some("token-b"), &ctx(&dir)));
        assert!(!acl.check(Some("token-c"), &ctx(&dir)));
    }
}
