//! Secret configuration for the Gemini API key.
//!
//! The key is read from the `GEMINI_API_KEY` environment variable first,
//! falling back to `~/.config/gita-guide/secret.json`. A missing key is a
//! startup error, not something discovered on the first request.

use crate::error::{GitaError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable consulted before the secret file.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Model used when the configuration does not name one.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Root structure of secret.json
#[derive(Debug, Clone, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}

/// Gemini API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

impl GeminiConfig {
    /// Loads the configuration from the environment or the secret file.
    ///
    /// # Errors
    ///
    /// Returns `GitaError::Config` when neither source provides an API key.
    /// The message never contains the key itself.
    pub fn load() -> Result<Self> {
        if let Ok(api_key) = std::env::var(GEMINI_API_KEY_ENV) {
            if !api_key.trim().is_empty() {
                return Ok(Self {
                    api_key,
                    model_name: None,
                });
            }
        }

        let path = secret_file_path()?;
        Self::from_file(&path)
    }

    /// Loads the configuration from a specific secret.json file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GitaError::config(format!(
                "No API key: set {} or create {}",
                GEMINI_API_KEY_ENV,
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            GitaError::config(format!(
                "Failed to read secret file at {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: SecretConfig = serde_json::from_str(&content).map_err(|e| {
            GitaError::config(format!(
                "Failed to parse secret file at {}: {}",
                path.display(),
                e
            ))
        })?;

        config
            .gemini
            .ok_or_else(|| GitaError::config("Gemini configuration not found in secret.json"))
    }

    /// Returns the configured model name, or the default.
    pub fn model(&self) -> &str {
        self.model_name.as_deref().unwrap_or(DEFAULT_GEMINI_MODEL)
    }
}

/// Returns the path to the secret file: ~/.config/gita-guide/secret.json
fn secret_file_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| GitaError::config("Could not determine home directory"))?;
    Ok(home.join(".config").join("gita-guide").join("secret.json"))
}
