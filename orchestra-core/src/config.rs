use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_STORAGE_KEY: &str = "agent-orchestra-projects";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Key the whole project list is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// How long a focused card stays highlighted.
    #[serde(default = "default_focus_clear_ms")]
    pub focus_clear_ms: u64,
    #[serde(default = "default_true")]
    pub confirm_delete: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            focus_clear_ms: default_focus_clear_ms(),
            confirm_delete: default_true(),
        }
    }
}

impl DashboardConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn focus_delay(&self) -> Duration {
        Duration::from_millis(self.focus_clear_ms)
    }
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

const fn default_focus_clear_ms() -> u64 {
    1000
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = DashboardConfig::from_toml_str("").expect("parse");
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.storage_key, "agent-orchestra-projects");
        assert_eq!(config.focus_delay(), Duration::from_secs(1));
    }

    #[test]
    fn partial_file_overrides_fields() {
        let config =
            DashboardConfig::from_toml_str("focus_clear_ms = 250\nconfirm_delete = false\n")
                .expect("parse");
        assert_eq!(config.focus_clear_ms, 250);
        assert!(!config.confirm_delete);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = DashboardConfig::load(Path::new("/nonexistent/orchestra.toml"))
            .expect_err("missing");
        assert!(err.to_string().contains("/nonexistent/orchestra.toml"));
    }
}
