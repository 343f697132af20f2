//! Configuration for the profile card
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/usercard/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;


pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Profile endpoint used when nothing overrides it
pub const DEFAULT_API_URL: &str = "https://randomuser.me/api/";

/// Seed that pins the "random" user
pub const DEFAULT_SEED: &str = "abc";

const DEFAULT_THEME: &str = "auto";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Profile endpoint (query string is added per request)
    pub api_url: String,

    /// Seed sent to the provider for a deterministic profile
    pub seed: String,

    /// Request timeout; None keeps the HTTP client's default
    pub request_timeout_secs: Option<u64>,

    /// Theme name: "auto", "dracula", "nord"
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// chrono format string for the birth date
    pub date_format: String,

    /// Caption under the info rows
    pub caption: String,

    /// Whether to run the TUI (false = print the card once and exit)
    pub enable_tui: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            seed: DEFAULT_SEED.to_string(),
            request_timeout_secs: None,
            theme: DEFAULT_THEME.to_string(),
            use_theme_background: true,
            date_format: crate::card::content::DEFAULT_DATE_FORMAT.to_string(),
            caption: crate::card::content::DEFAULT_CAPTION.to_string(),
            enable_tui: true,
            logging: LoggingConfig::default(),
        }
    }
}

/// True when every specifier in `format` is one chrono understands
pub fn is_valid_date_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub seed: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,
    pub date_format: Option<String>,
    pub caption: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/usercard/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("usercard").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    ///
    /// Returns whether a template was written. Config is optional, so the
    /// caller only logs an error here.
    pub fn ensure_config_exists() -> Result<bool> {
        match Self::config_path() {
            Some(path) => Self::write_template_if_missing(&path),
            None => Ok(false),
        }
    }

    /// Write `Config::default().to_toml()` to `path` unless a file is there
    pub(crate) fn write_template_if_missing(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, Self::default().to_toml())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(true)
    }

    /// Read and parse a config file. A missing file yields defaults.
    pub(crate) fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e).with_context(|| format!("Cannot read {}", path.display())),
        }
    }

    /// Load configuration: env vars -> file -> defaults
    ///
    /// A config file that exists but cannot be parsed is fatal; silently
    /// falling back to defaults would hide the typo.
    pub fn from_env() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        let config = Self::resolve(file, |key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse as TOML but cannot be used
    pub(crate) fn validate(&self) -> Result<()> {
        if !is_valid_date_format(&self.date_format) {
            anyhow::bail!(
                "Invalid date_format {:?}: not a chrono strftime format",
                self.date_format
            );
        }
        Ok(())
    }

    /// Merge file values with environment lookups
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // API URL: env > file > default
        let api_url = env("USERCARD_API_URL")
            .or(file.api_url)
            .unwrap_or(defaults.api_url);

        // Seed: env > file > default
        let seed = env("USERCARD_SEED").or(file.seed).unwrap_or(defaults.seed);

        // Theme: env > file > default
        let theme = env("USERCARD_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // TUI toggle: env only (runtime flag)
        let enable_tui = env("USERCARD_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        Self {
            api_url,
            seed,
            request_timeout_secs: file.request_timeout_secs,
            theme,
            use_theme_background: file
                .use_theme_background
                .unwrap_or(defaults.use_theme_background),
            date_format: file.date_format.unwrap_or(defaults.date_format),
            caption: file.caption.unwrap_or(defaults.caption),
            enable_tui,
            logging: LoggingConfig::from_file(file.logging),
        }
    }

    /// Presentation settings for the card renderer
    pub fn display_options(&self) -> crate::card::DisplayOptions<'_> {
        crate::card::DisplayOptions {
            date_format: &self.date_format,
            caption: &self.caption,
        }
    }
}
