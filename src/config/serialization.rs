//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// Quote a string as a TOML basic string
fn quote(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

impl Config {
    /// Serialize config to a commented TOML document
    pub fn to_toml(&self) -> String {
        let timeout = match self.request_timeout_secs {
            Some(secs) => format!("request_timeout_secs = {}", secs),
            None => "# request_timeout_secs = 10".to_string(),
        };

        format!(
            r#"# usercard configuration

# Profile endpoint (page, results and seed are appended per request)
api_url = {api_url}

# Seed for the provider - same seed, same profile
seed = {seed}

# Request timeout in seconds (unset = HTTP client default)
{timeout}

# Theme: auto, dracula, nord
theme = {theme}

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# Birth date format (chrono strftime syntax)
date_format = {date_format}

# Caption shown under the contact details
caption = {caption}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# JSON file logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            api_url = quote(&self.api_url),
            seed = quote(&self.seed),
            timeout = timeout,
            theme = quote(&self.theme),
            use_bg = self.use_theme_background,
            date_format = quote(&self.date_format),
            caption = quote(&self.caption),
            log_level = quote(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = quote(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = quote(&self.logging.file_prefix),
        )
    }
}
