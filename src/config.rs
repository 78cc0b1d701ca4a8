//! Runtime settings for the command-line tool.
//!
//! Values come from the environment; `main` loads an optional `.env` first
//! with `dotenv`, so the same keys can live in a file next to the binary.

use std::path::PathBuf;
use std::str::FromStr;

/// log4rs configuration file.
pub const ENV_LOG_CONFIG: &str = "NETCALC_LOG_CONFIG";
/// `text` or `json`.
pub const ENV_OUTPUT: &str = "NETCALC_OUTPUT";
/// `auto`, `always` or `never`.
pub const ENV_COLOR: &str = "NETCALC_COLOR";

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!("unknown color mode '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_config: PathBuf,
    pub output: OutputFormat,
    pub color: ColorMode,
    /// Problems found while reading the environment, logged once logging is up.
    pub warnings: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            output: OutputFormat::default(),
            color: ColorMode::default(),
            warnings: Vec::new(),
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup.
    ///
    /// Unknown values keep their default and are recorded in `warnings`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(path) = lookup(ENV_LOG_CONFIG).filter(|p| !p.trim().is_empty()) {
            settings.log_config = PathBuf::from(path.trim());
        }
        if let Some(raw) = lookup(ENV_OUTPUT) {
            match raw.parse() {
                Ok(output) => settings.output = output,
                Err(e) => settings
                    .warnings
                    .push(format!("{ENV_OUTPUT}: {e}, using {:?}", settings.output)),
            }
        }
        if let Some(raw) = lookup(ENV_COLOR) {
            match raw.parse() {
                Ok(color) => settings.color = color,
                Err(e) => settings
                    .warnings
                    .push(format!("{ENV_COLOR}: {e}, using {:?}", settings.color)),
            }
        }
        settings
    }

    /// Emit the collected warnings; call after the logger is initialised.
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            log::warn!("{warning}");
        }
    }

    /// Force colours on or off; `Auto` leaves the terminal detection alone.
    pub fn apply_color(&self) {
        match self.color {
            ColorMode::Auto => colored::control::unset_override(),
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}
