//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

const MAX_CACHE_CAPACITY: usize = 1024;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `cache_capacity` is 0 or exceeds 1024
    /// - `file_extension` is empty or contains a dot or path separator
    /// - `data_dir` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_capacity == 0 {
            return Err(ConfigError::Invalid { field: "cache_capacity".into(), reason: "must be greater than 0".into() });
        }
        if self.cache_capacity > MAX_CACHE_CAPACITY {
            return Err(ConfigError::Invalid {
                field: "cache_capacity".into(),
                reason: format!("must not exceed {MAX_CACHE_CAPACITY}"),
            });
        }

        if self.file_extension.is_empty() {
            return Err(ConfigError::Invalid { field: "file_extension".into(), reason: "must not be empty".into() });
        }
        if self.file_extension.contains(['.', '/', '\\']) {
            return Err(ConfigError::Invalid {
                field: "file_extension".into(),
                reason: "must not contain '.' or path separators".into(),
            });
        }

        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid { field: "data_dir".into(), reason: "must not be empty".into() });
        }

        if let Some(seed_file) = &self.seed_file
            && !seed_file.exists()
        {
            tracing::warn!(seed_file = %seed_file.display(), "Seed file does not exist yet; startup will fail to load it");
        }

        Ok(())
    }
}
