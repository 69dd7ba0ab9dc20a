//! Configuration module for torii.
//!
//! This module provides the configuration types and loading
//! functionality for the engine's deployment knobs: the authorization
//! policy and the static group directory. Configuration is loaded from
//! YAML files.

mod policy;

pub use policy::PolicyConfig;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::directory::StaticGroups;
use crate::error::AclError;

/// Engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Authorization policy.
    pub policy: PolicyConfig,

    /// Static user-to-groups map backing the group directory.
    #[serde(default)]
    pub groups: HashMap<String, Vec<String>>,
}

impl Config {
    /// Loads configuration from an optional path.
    /// If path is None, uses default search paths.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self, AclError> {
        match path {
            Some(p) => Self::load_from_path(p),
            None => {
                // Try default paths
                let default_paths = [
                    "/etc/torii/config.yaml",
                    "/etc/torii/config.yml",
                    "config.yaml",
                    "config.yml",
                ];

                for path in &default_paths {
                    if std::path::Path::new(path).exists() {
                        return Self::load_from_path(path);
                    }
                }

                // No config file found, use defaults
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a YAML file.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, AclError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            AclError::config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::load_from_str(&content)
    }

    /// Loads configuration from a YAML string.
    pub fn load_from_str(content: &str) -> Result<Self, AclError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| AclError::config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    fn validate(&self) -> Result<(), AclError> {
        if let Some(host) = &self.policy.server_host {
            if host.is_empty() {
                return Err(AclError::config("policy.server_host must not be empty"));
            }
        }

        for (user, groups) in &self.groups {
            if user.is_empty() {
                return Err(AclError::config("groups keys must be user names"));
            }
            if groups.iter().any(String::is_empty) {
                return Err(AclError::config(format!(
                    "groups.{} contains an empty group name",
                    user
                )));
            }
        }

        Ok(())
    }

    /// Returns the server hostname (configured value or local hostname).
    pub fn server_host(&self) -> String {
        self.policy.server_host.clone().unwrap_or_else(|| {
            hostname::get()
                .ok()
                .and_then(|h| h.into_string().ok())
                .unwrap_or_else(|| "unknown".to_string())
        })
    }

    /// Builds the group directory from the static groups map.
    pub fn static_groups(&self) -> StaticGroups {
        StaticGroups::from(self.groups.clone())
    }
}
