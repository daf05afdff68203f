//! Settings file discovery and loading.
//!
//! Settings only shape the front end (prompt, banner, output format); they
//! never change how input is reduced.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::output::OutputFormat;

/// Default settings file name, looked up in the home directory.
pub const CONFIG_FILE_NAME: &str = ".noop.toml";

pub const ENV_CONFIG: &str = "NOOP_CONFIG";
pub const ENV_PROMPT: &str = "NOOP_PROMPT";
pub const ENV_OUTPUT_FORMAT: &str = "NOOP_OUTPUT_FORMAT";

pub const DEFAULT_PROMPT: &str = ">>> ";

/// Front-end settings after file and environment have been applied.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Prompt printed before each REPL line.
    pub prompt: String,
    /// Whether the REPL prints its version banner on start.
    pub banner: bool,
    pub output_format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            banner: true,
            output_format: OutputFormat::Text,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text. `path` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] on malformed TOML or unknown keys.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Apply overrides from a variable lookup. Takes a closure so tests do
    /// not have to touch the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the output format override is not a
    /// known format.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(prompt) = lookup(ENV_PROMPT) {
            self.prompt = prompt;
        }
        if let Some(format) = lookup(ENV_OUTPUT_FORMAT) {
            self.output_format = format.parse().map_err(|message| Error::Config {
                path: PathBuf::from(format!("${ENV_OUTPUT_FORMAT}")),
                message,
            })?;
        }
        Ok(())
    }
}

/// Get the user's home directory in a cross-platform way.
#[must_use]
pub fn get_home_dir() -> Option<PathBuf> {
    if let Some(home) = env::var_os("HOME") {
        return Some(PathBuf::from(home));
    }

    if let Some(userprofile) = env::var_os("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }

    None
}

/// Decide which settings file to read, if any.
///
/// An explicit path (flag, then `NOOP_CONFIG`) is returned whether or not it
/// exists so that loading can report it; the home file only when present.
#[must_use]
pub fn find_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Some(path) = env::var_os(ENV_CONFIG).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }

    let home_file = get_home_dir()?.join(CONFIG_FILE_NAME);
    home_file.is_file().then_some(home_file)
}

/// Read and parse a settings file.
///
/// # Errors
///
/// Returns [`Error::Config`] if the file cannot be read or parsed.
pub fn load_from_path(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let settings = Settings::from_toml(&content, path)?;
    info!(path = %path.display(), "using config file");
    Ok(settings)
}

/// Load settings from the discovered file (or defaults) and apply
/// environment overrides.
///
/// # Errors
///
/// Returns [`Error::Config`] if a settings file is named but unreadable or
/// invalid, or an environment override is invalid.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let mut settings = match find_config_path(explicit) {
        Some(path) => load_from_path(&path)?,
        None => Settings::default(),
    };
    settings.apply_env(|key| env::var(key).ok())?;
    Ok(settings)
}
