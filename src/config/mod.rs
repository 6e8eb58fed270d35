//! Configuration loading.
//!
//! TOML config file with defaults for every field: a missing file is not
//! an error, a present-but-broken file is. Precedence for the file
//! location: explicit path, then the `LOREBOOK_CONFIG` environment
//! variable, then the platform config directory.

use crate::view_state::MeasureConfig;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read an existing config file.
    #[error("failed to read config file at {path}: {reason}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
    #[error("invalid TOML in {path}: {reason}")]
    Parse {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// Every field is optional; unset fields fall back to hardcoded defaults
/// during [`merge_config`]. Corresponds to
/// `~/.config/lorebook/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// `[measure]` section: row measurement settings.
    #[serde(default)]
    pub measure: Option<MeasureConfig>,

    /// Path for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after merging the file over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Row measurement settings.
    pub measure: MeasureConfig,
    /// Path for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            measure: MeasureConfig::default(),
            log_file_path: default_log_path(),
        }
    }
}

/// Default log file location: the platform state directory, falling back
/// to the current directory when none exists.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("lorebook").join("lorebook.log"),
        None => PathBuf::from("lorebook.log"),
    }
}

/// Default config file location, `None` when the platform config
/// directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lorebook").join("config.toml"))
}

/// Load a config file from a specific path.
///
/// Returns `Ok(None)` when the file does not exist — defaults apply.
///
/// # Errors
///
/// Fails only when the file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with location precedence.
///
/// Highest to lowest: explicit `config_path` argument, the
/// `LOREBOOK_CONFIG` environment variable, the default platform path.
/// A missing file at any of these is not an error.
///
/// # Errors
///
/// Fails only when a file exists at the chosen location but cannot be
/// read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("LOREBOOK_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge a loaded config file over the defaults.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        measure: config.measure.unwrap_or(defaults.measure),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_an_error() {
        let result = load_config_file("/definitely/not/a/real/path/config.toml");
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn merge_of_nothing_yields_defaults() {
        let resolved = merge_config(None);
        assert_eq!(resolved, ResolvedConfig::default());
        assert_eq!(resolved.measure.min_height, 25);
    }

    #[test]
    fn measure_section_overrides_default() {
        let config: ConfigFile = toml::from_str(
            r#"
            [measure]
            min_height = 32
            "#,
        )
        .expect("valid toml");
        let resolved = merge_config(Some(config));
        assert_eq!(resolved.measure.min_height, 32);
    }

    #[test]
    fn empty_measure_section_keeps_defaults() {
        let config: ConfigFile = toml::from_str("[measure]\n").expect("valid toml");
        let resolved = merge_config(Some(config));
        assert_eq!(resolved.measure.min_height, 25);
    }

    #[test]
    fn log_path_overrides_default() {
        let config: ConfigFile = toml::from_str(
            r#"
            log_file_path = "/tmp/custom.log"
            "#,
        )
        .expect("valid toml");
        let resolved = merge_config(Some(config));
        assert_eq!(resolved.log_file_path, PathBuf::from("/tmp/custom.log"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = toml::from_str::<ConfigFile>("no_such_key = 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn broken_file_reports_parse_error_with_path() {
        let dir = std::env::temp_dir().join("lorebook_test_config_broken");
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, "not [ valid toml").expect("write");

        let result = load_config_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn existing_file_loads_and_merges() {
        let dir = std::env::temp_dir().join("lorebook_test_config_ok");
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, "[measure]\nmin_height = 48\n").expect("write");

        let loaded = load_config_file(&path).expect("readable").expect("present");
        let resolved = merge_config(Some(loaded));
        assert_eq!(resolved.measure.min_height, 48);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn default_log_path_names_the_application() {
        let path = default_log_path();
        assert!(path.to_string_lossy().contains("lorebook"));
    }
}
