//! Error types and error handling for torii.
//!
//! This module defines all error types used throughout the engine,
//! including stable error codes the embedding scheduler reports back
//! to clients when an ACL operation fails.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stable error codes for ACL operations.
/// Each error has a unique code for identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// E001: Caller contract violation inside the engine
    #[serde(rename = "E001")]
    Internal,

    /// E002: Backing storage could not grow
    #[serde(rename = "E002")]
    Allocation,

    /// E003: Add operation rejected due to a duplicate entry
    #[serde(rename = "E003")]
    DuplicateEntry,

    /// E004: Configuration file is invalid
    #[serde(rename = "E004")]
    ConfigInvalid,
}

impl ErrorCode {
    /// Returns the error code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Internal => "E001",
            ErrorCode::Allocation => "E002",
            ErrorCode::DuplicateEntry => "E003",
            ErrorCode::ConfigInvalid => "E004",
        }
    }

    /// Returns the default message for this error code.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::Internal => "Internal engine error",
            ErrorCode::Allocation => "Backing storage could not grow",
            ErrorCode::DuplicateEntry => "Duplicate entry in access control list",
            ErrorCode::ConfigInvalid => "Configuration file is invalid",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The main error type for torii.
///
/// Match functions never return errors; malformed candidate or pattern
/// input is defined as a non-match so the authorization decision stays
/// total over all string inputs. Errors arise only from mutations and
/// configuration loading, and a failed mutation leaves the attribute in
/// its pre-operation state.
#[derive(Debug, Error)]
pub enum AclError {
    /// Caller contract violation (invalid index, missing operand).
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// Backing storage could not grow. Fatal to the current operation
    /// only; the attribute keeps its previous value.
    #[error("Allocation failure: {context}")]
    Allocation { context: String },

    /// An Add operation found the same value twice, either inside the
    /// operand list or between the operand and the existing list.
    #[error("Duplicate entry in access control list: {entry}")]
    DuplicateEntry { entry: String },

    /// Configuration file is invalid or cannot be loaded.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl AclError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AclError::Internal { .. } => ErrorCode::Internal,
            AclError::Allocation { .. } => ErrorCode::Allocation,
            AclError::DuplicateEntry { .. } => ErrorCode::DuplicateEntry,
            AclError::Config { .. } => ErrorCode::ConfigInvalid,
            AclError::Io(_) => ErrorCode::ConfigInvalid,
            AclError::Yaml(_) => ErrorCode::ConfigInvalid,
        }
    }

    /// Creates an internal error with a message.
    pub fn internal(message: impl Into<String>) -> Self {
        AclError::Internal {
            message: message.into(),
        }
    }

    /// Creates an allocation error with a context description.
    pub fn allocation(context: impl Into<String>) -> Self {
        AclError::Allocation {
            context: context.into(),
        }
    }

    /// Creates a duplicate-entry error for the offending value.
    pub fn duplicate(entry: impl Into<String>) -> Self {
        AclError::DuplicateEntry {
            entry: entry.into(),
        }
    }

    /// Creates a configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        AclError::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a configuration error with a message and source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AclError::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type alias for torii operations.
pub type Result<T> = std::result::Result<T, AclError>;
