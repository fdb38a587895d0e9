//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.bmi/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::state::DEFAULT_DECIMAL_PLACES;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BmiConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub decimal_places: Option<usize>,
    pub show_message: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "bmi.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
/// More digits than this is just float noise.
pub const MAX_DECIMAL_PLACES: usize = 6;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub decimal_places: usize,
    pub show_message: bool,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.bmi/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".bmi").join("config.toml"))
}

/// Load config from `~/.bmi/config.toml`, or from `explicit` when given.
///
/// A missing default file is generated (commented out) and yields
/// `BmiConfig::default()`. A missing explicit file is an I/O error.
pub fn load_config(explicit: Option<&Path>) -> Result<BmiConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_from(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(BmiConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(BmiConfig::default());
    }

    load_from(&path)
}

fn load_from(path: &Path) -> Result<BmiConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<BmiConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# BMI Calculator Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"        # "off", "error", "warn", "info", "debug", "trace" (or BMI_LOG_LEVEL)
# log_file = "bmi.log"       # Or set BMI_LOG_FILE env var

# [display]
# decimal_places = 1         # Digits shown after the decimal point
# show_message = true        # Show the advisory message under the category
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &BmiConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &BmiConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env("BMI_LOG_LEVEL"))
        .or_else(|| config.general.log_level.clone())
        .and_then(|s| parse_level(&s))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: env → config → default
    let log_file = env("BMI_LOG_FILE")
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    let decimal_places = config
        .display
        .decimal_places
        .unwrap_or(DEFAULT_DECIMAL_PLACES)
        .min(MAX_DECIMAL_PLACES);

    ResolvedConfig {
        log_level,
        log_file: PathBuf::from(log_file),
        decimal_places,
        show_message: config.display.show_message.unwrap_or(true),
    }
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.parse::<LevelFilter>() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Unknown log level {:?}, falling back", raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&BmiConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(resolved.decimal_places, 1);
        assert!(resolved.show_message);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = BmiConfig {
            general: GeneralConfig {
                log_level: Some("warn".to_string()),
                log_file: Some("/tmp/other.log".to_string()),
            },
            display: DisplayConfig {
                decimal_places: Some(2),
                show_message: Some(false),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.log_level, LevelFilter::Warn);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/other.log"));
        assert_eq!(resolved.decimal_places, 2);
        assert!(!resolved.show_message);
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = BmiConfig {
            general: GeneralConfig {
                log_level: Some("error".to_string()),
                log_file: Some("config.log".to_string()),
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "BMI_LOG_LEVEL" => Some("info".to_string()),
            "BMI_LOG_FILE" => Some("env.log".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.log_level, LevelFilter::Info);
        assert_eq!(resolved.log_file, PathBuf::from("env.log"));

        let cli = CliOverrides {
            log_level: Some("trace".to_string()),
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_unknown_level_falls_back_to_default() {
        let cli = CliOverrides {
            log_level: Some("loud".to_string()),
        };
        let resolved = resolve_with_env(&BmiConfig::default(), &cli, no_env);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_decimal_places_clamped() {
        let config = BmiConfig {
            display: DisplayConfig {
                decimal_places: Some(40),
                show_message: None,
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.decimal_places, MAX_DECIMAL_PLACES);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config = parse_config("[display]\ndecimal_places = 3\n").unwrap();
        assert_eq!(config.display.decimal_places, Some(3));
        assert!(config.display.show_message.is_none());
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[display\ndecimal_places = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let err = load_config(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
