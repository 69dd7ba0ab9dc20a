//! Order functions - type-specific comparators for ACL entries.
//!
//! List order is match-priority order: the mutation procedure scans the
//! existing list and inserts a new entry before the first entry that
//! sorts after it. Host entries compare from the tail (top-level domain
//! segment first) and push `*` wildcards to the end, so the most
//! specific pattern is always tested first. User entries compare the
//! user portion forward and defer ties to host order on the part after
//! `@`. A leading `+`/`-` sign never takes part in the comparison.

use super::strip_sign;
use super::AclType;

/// Comparator result: negative when `a` sorts before `b`, zero when
/// equal, positive when `a` sorts after `b`.
pub type OrderValue = i32;

/// Returns the comparator value for placing `incoming` relative to
/// `existing` under the given ACL type, or `None` for types with no
/// sort key (entries append in operand order).
pub(crate) fn insertion_order(
    acl_type: AclType,
    existing: &str,
    incoming: &str,
) -> Option<OrderValue> {
    match acl_type {
        AclType::Host => Some(host_order(existing, incoming)),
        AclType::User => Some(user_order(existing, incoming)),
        AclType::Group => Some(group_order(existing, incoming)),
        AclType::Subnet | AclType::Generic => None,
    }
}

/// Compares two host entries from the tail end, one character at a time.
///
/// A `*` reached as the leftmost remaining character while the other
/// side still has characters sorts that side after the other, so
/// wildcarded entries sink to the end of the list. With equal suffixes,
/// the longer (more specific) entry sorts first. Character differences
/// inside the walk resolve as `b - a`.
pub fn host_order(a: &str, b: &str) -> OrderValue {
    let a = strip_sign(a).as_bytes();
    let b = strip_sign(b).as_bytes();
    let mut i = a.len() as isize - 1;
    let mut j = b.len() as isize - 1;
    loop {
        if i > 0 && j > 0 {
            let d = b[j as usize] as OrderValue - a[i as usize] as OrderValue;
            if d != 0 {
                return d;
            }
            i -= 1;
            j -= 1;
        } else if i == 0 && j == 0 {
            if a[0] == b'*' {
                return 1;
            }
            if b[0] == b'*' {
                return -1;
            }
            return b[0] as OrderValue - a[0] as OrderValue;
        } else if i == 0 {
            return 1;
        } else {
            return -1;
        }
    }
}

/// Compares two user entries: user portion forward, character by
/// character, then the host portion after `@` via [`host_order`].
/// An entry with no `@` ties into host order with an empty host.
pub fn user_order(a: &str, b: &str) -> OrderValue {
    let sa = strip_sign(a);
    let sb = strip_sign(b);
    let ab = sa.as_bytes();
    let bb = sb.as_bytes();
    let mut i = 0usize;
    loop {
        let ca = ab.get(i).copied().unwrap_or(0);
        let cb = bb.get(i).copied().unwrap_or(0);
        let d = ca as OrderValue - cb as OrderValue;
        if d != 0 {
            return d;
        }
        if ca == b'@' || ca == 0 {
            // equal so far, so both sides are at '@' or at the end
            let ra = if ca == b'@' { &sa[i + 1..] } else { "" };
            let rb = if cb == b'@' { &sb[i + 1..] } else { "" };
            return host_order(ra, rb);
        }
        i += 1;
    }
}

/// Compares two group entries as plain byte-wise strings.
pub fn group_order(a: &str, b: &str) -> OrderValue {
    match strip_sign(a).cmp(strip_sign(b)) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }
}
