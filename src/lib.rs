//! torii - ACL engine for cluster job schedulers
//!
//! This crate provides the ordered, sign-prefixed access control lists
//! a scheduler attaches to its objects (queues, servers, hosts) to
//! decide which users, groups, hosts, or subnets may act on them.
//!
//! # Overview
//!
//! An ACL attribute holds an ordered list of patterns, each optionally
//! prefixed with `+` (allow) or `-` (deny). Mutations keep the list in
//! type-specific priority order - host patterns compare from the domain
//! tail and push `*` wildcards last - so that at check time the most
//! specific pattern is tested first and the first match decides.
//!
//! # Modules
//!
//! - [`acl`] - ACL types, mutation and check procedures
//! - [`codec`] - comma/newline wire form of an attribute value
//! - [`config`] - configuration file parsing and validation
//! - [`directory`] - group membership seam
//! - [`error`] - error types and error handling
//! - [`set`] - the ordered string container behind every attribute

pub mod acl;
pub mod codec;
pub mod config;
pub mod directory;
pub mod error;
pub mod set;

// Re-exports for convenience
pub use acl::{acl_check, AclAttribute, AclType, CheckContext, MutationOp};
pub use config::Config;
pub use directory::{GroupDirectory, StaticGroups};
pub use error::{AclError, ErrorCode, Result};
pub use set::StringSet;
