//! ACL mutation procedure - replace, add, and remove with ordering and
//! duplicate detection.
//!
//! Add and Replace reject the whole operation when any operand value
//! duplicates another operand value or an existing entry; a rejected or
//! failed mutation leaves the attribute exactly as it was. New entries
//! are placed by scanning the list for the first entry that sorts after
//! them under the type's order function, so the list stays in
//! match-priority order across mutations.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, warn};

use super::order::insertion_order;
use super::AclType;
use crate::error::{AclError, Result};
use crate::set::StringSet;

/// A mutation applied to an ACL attribute together with an operand set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationOp {
    /// Discard all existing entries, then add the operand entries.
    Replace,
    /// Insert the operand entries in sorted position.
    Add,
    /// Remove each operand entry; absent values are ignored.
    Remove,
}

impl FromStr for MutationOp {
    type Err = AclError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "replace" | "set" => Ok(MutationOp::Replace),
            "add" | "incr" => Ok(MutationOp::Add),
            "remove" | "decr" => Ok(MutationOp::Remove),
            _ => Err(AclError::internal(format!("Unknown mutation op: {}", s))),
        }
    }
}

/// Applies `op` with `operand` to `existing` under the ordering rules of
/// `acl_type`. All-or-nothing: on error `existing` is untouched.
pub(crate) fn apply_to_set(
    acl_type: AclType,
    existing: &mut StringSet,
    op: MutationOp,
    operand: &StringSet,
) -> Result<()> {
    debug!(
        op = ?op,
        acl_type = ?acl_type,
        operand_len = operand.len(),
        existing_len = existing.len(),
        "applying ACL mutation"
    );

    match op {
        MutationOp::Replace => {
            // same duplicate check and sorted insertion as Add, against
            // an empty base; the old value is only discarded on success
            let empty = StringSet::new();
            let staged = build_sorted(acl_type, &empty, operand)?;
            *existing = staged;
        }
        MutationOp::Add => {
            let staged = build_sorted(acl_type, existing, operand)?;
            *existing = staged;
        }
        MutationOp::Remove => {
            for entry in operand.iter() {
                if let Some(index) = existing.position_of(entry) {
                    existing.remove_at(index);
                }
            }
        }
    }
    Ok(())
}

/// Returns the first value that appears twice, either inside `operand`
/// or between `operand` and `existing`. Comparison is exact, sign
/// included.
fn find_duplicate<'a>(existing: &StringSet, operand: &'a StringSet) -> Option<&'a str> {
    for (i, value) in operand.iter().enumerate() {
        for (j, other) in operand.iter().enumerate() {
            if i != j && value == other {
                return Some(value);
            }
        }
        if existing.contains(value) {
            return Some(value);
        }
    }
    None
}

/// Builds the post-mutation list: `base` plus each operand entry in
/// operand order, inserted before the first entry that sorts after it
/// (appended when no such entry exists or the type has no sort key).
fn build_sorted(acl_type: AclType, base: &StringSet, operand: &StringSet) -> Result<StringSet> {
    if let Some(dup) = find_duplicate(base, operand) {
        warn!(entry = %dup, "duplicate ACL entry rejected");
        return Err(AclError::duplicate(dup));
    }

    let mut staged = base.clone();
    for entry in operand.iter() {
        let position = staged
            .iter()
            .position(|old| matches!(insertion_order(acl_type, old, entry), Some(d) if d > 0))
            .unwrap_or(staged.len());
        staged.insert_at(position, entry.to_string())?;
    }
    Ok(staged)
}
