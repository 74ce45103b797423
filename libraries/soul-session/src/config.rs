//! Session configuration

use crate::error::{Result, SessionError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Names of the two storage slots and the role that counts as admin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Storage key holding the bearer token
    #[serde(default = "default_token_key")]
    pub token_key: String,

    /// Storage key holding the JSON user record
    #[serde(default = "default_user_key")]
    pub user_key: String,

    /// Role value that marks a user as admin
    #[serde(default = "default_admin_role")]
    pub admin_role: String,
}

impl SessionConfig {
    /// Load configuration from `session.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        Self::load_from(Some(Path::new("session.toml")))
    }

    /// Load configuration from an optional file, then `SOUL_SESSION_*` variables
    ///
    /// A missing file is skipped. Environment variables win over the file,
    /// e.g. `SOUL_SESSION_ADMIN_ROLE=owner`.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            if path.exists() {
                settings = settings.add_source(config::File::from(PathBuf::from(path)));
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("SOUL_SESSION").try_parsing(true),
        );

        let config: Self = settings
            .build()
            .map_err(|e| SessionError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| SessionError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.token_key.is_empty() || self.user_key.is_empty() {
            return Err(SessionError::Config(
                "storage keys must not be empty".to_string(),
            ));
        }

        if self.token_key == self.user_key {
            return Err(SessionError::Config(format!(
                "token and user share the storage key {:?}",
                self.token_key
            )));
        }

        if self.admin_role.is_empty() {
            return Err(SessionError::Config(
                "admin role must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_token_key() -> String {
    "token".to_string()
}

fn default_user_key() -> String {
    "user".to_string()
}

fn default_admin_role() -> String {
    "admin".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
            user_key: default_user_key(),
            admin_role: default_admin_role(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_browser_keys() {
        let config = SessionConfig::default();
        assert_eq!(config.token_key, "token");
        assert_eq!(config.user_key, "user");
        assert_eq!(config.admin_role, "admin");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn loads_partial_file_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "admin_role = \"owner\"\n").unwrap();

        let config = SessionConfig::load_from(Some(&path)).unwrap();

        assert_eq!(config.admin_role, "owner");
        assert_eq!(config.token_key, "token");
        assert_eq!(config.user_key, "user");
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SessionConfig::load_from(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.token_key, "token");
    }

    #[test]
    fn rejects_shared_key() {
        let config = SessionConfig {
            user_key: "token".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SessionError::Config(_))));
    }

    #[test]
    fn rejects_empty_admin_role() {
        let config = SessionConfig {
            admin_role: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
