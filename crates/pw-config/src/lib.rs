//! Configuration management for the messenger wiki navigation.
//!
//! Parses `pw.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.title`
//! - `site.lang`
//! - `navigation.file` (also expands a leading `~`)

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override navigation file.
    pub navigation_file: Option<PathBuf>,
    /// Override root font size in pixels.
    pub root_font_size: Option<f32>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "pw.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity.
    pub site: SiteConfig,
    /// Navigation row geometry.
    pub layout: LayoutConfig,
    /// Navigation source (path is a relative string from TOML).
    navigation: NavigationConfigRaw,

    /// Resolved navigation configuration (set after loading).
    #[serde(skip)]
    pub navigation_resolved: NavigationConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site identity configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Wordmark shown in the sidebar logo.
    pub title: String,
    /// Document language.
    pub lang: String,
    /// Text direction (`rtl` or `ltr`).
    pub dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "پیامرسان.ویکی".to_owned(),
            lang: "fa".to_owned(),
            dir: "rtl".to_owned(),
        }
    }
}

/// Navigation row geometry in rem.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Pixels per rem.
    pub root_font_size: f32,
    /// Height of one navigation row (rem).
    pub row_height: f32,
    /// Offset of the active marker within its row (rem).
    pub marker_offset: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            root_font_size: 16.0,
            row_height: 2.0,
            marker_offset: 0.25,
        }
    }
}

/// Raw navigation configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct NavigationConfigRaw {
    file: Option<String>,
}

/// Resolved navigation configuration.
#[derive(Debug, Default)]
pub struct NavigationConfig {
    /// JSON navigation file. `None` uses the built-in site map.
    pub file: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`navigation.file`").
        field: String,
        /// Error message (e.g., "${`NAV_FILE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a numeric field to be finite and greater than zero.
fn require_positive(value: f32, field: &str) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::Validation(format!(
            "{field} must be a positive number"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `pw.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(file) = &settings.navigation_file {
            self.navigation_resolved.file = Some(file.clone());
        }
        if let Some(root_font_size) = settings.root_font_size {
            self.layout.root_font_size = root_font_size;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI settings
    /// are applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_layout()?;
        Ok(())
    }

    /// Validate site configuration.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.lang, "site.lang")?;
        if self.site.dir != "rtl" && self.site.dir != "ltr" {
            return Err(ConfigError::Validation(format!(
                "site.dir must be \"rtl\" or \"ltr\", got \"{}\"",
                self.site.dir
            )));
        }
        Ok(())
    }

    /// Validate layout configuration.
    fn validate_layout(&self) -> Result<(), ConfigError> {
        require_positive(self.layout.root_font_size, "layout.root_font_size")?;
        require_positive(self.layout.row_height, "layout.row_height")?;
        // Zero places the marker flush with the row top
        if !self.layout.marker_offset.is_finite() || self.layout.marker_offset < 0.0 {
            return Err(ConfigError::Validation(
                "layout.marker_offset cannot be negative".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;
        self.site.lang = expand::expand_env(&self.site.lang, "site.lang")?;

        if let Some(ref file) = self.navigation.file {
            self.navigation.file = Some(expand::expand_path(file, "navigation.file")?);
        }

        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.navigation_resolved = NavigationConfig {
            file: self.navigation.file.as_deref().map(|f| config_dir.join(f)),
        };
    }
}
