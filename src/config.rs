//! Runtime configuration drawn from the environment

use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Default Gemini API base URL.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default model used for semantic profiles.
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Errors that can occur while loading configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("No API key configured: set GEMINI_API_KEY (or API_KEY)")]
    MissingApiKey,
}

/// Settings for reaching the completion service.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

impl Config {
    /// Load from `GEMINI_API_KEY` / `API_KEY`, `COGNILEXICON_MODEL` and
    /// `COGNILEXICON_API_BASE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = non_empty("GEMINI_API_KEY")
            .or_else(|| non_empty("API_KEY"))
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            api_key,
            model: non_empty("COGNILEXICON_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: non_empty("COGNILEXICON_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        })
    }
}

/// Default token database path (~/.local/share/cognilexicon/tokens.db)
pub fn default_db_path() -> PathBuf {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".local/share"));
    data_dir.join("cognilexicon").join("tokens.db")
}
