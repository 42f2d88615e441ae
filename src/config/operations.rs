//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{PressError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PressError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PressError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `output_dir` must be non-empty
    /// - `filename_title_limit` must be positive
    /// - `base_article.title` must be non-empty (it is cited in every piece)
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.trim().is_empty() {
            return Err(PressError::UserError(
                "config validation failed: output_dir must not be empty".to_string(),
            ));
        }

        if self.filename_title_limit == 0 {
            return Err(PressError::UserError(
                "config validation failed: filename_title_limit must be greater than 0"
                    .to_string(),
            ));
        }

        if self.base_article.title.trim().is_empty() {
            return Err(PressError::UserError(
                "config validation failed: base_article.title must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
