//! Wire form of an ACL attribute value.
//!
//! The external form is a comma- or newline-separated list of entries,
//! each optionally prefixed by `+` or `-`. The sign character is part of
//! the stored value and survives the round trip unchanged. Empty
//! segments (from doubled or trailing separators) are skipped.

use crate::set::StringSet;

/// Decodes the textual form into an operand set. Entry order is the
/// order of appearance; no sorting or duplicate detection happens here.
pub fn decode(text: &str) -> StringSet {
    text.split(['\n', ','])
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Encodes a set back into the comma-separated textual form.
pub fn encode(set: &StringSet) -> String {
    set.iter().collect::<Vec<_>>().join(",")
}
