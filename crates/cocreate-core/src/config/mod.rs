use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{endpoints, env, paths, storage};
use crate::error::CocreateError;
use crate::llm::ModelSet;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub gemini: GeminiSettings,
    #[serde(default)]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiSettings {
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub base_url: String,
    #[serde(default)]
    pub models: ModelSet,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key_env: env::GEMINI_API_KEY.to_string(),
            base_url: endpoints::GEMINI_BASE_URL.to_string(),
            models: ModelSet::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Overrides the default `<data dir>/cocreate/cocreate.db`
    pub db_path: Option<PathBuf>,
}

impl Settings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(paths::CONFIG_DIR)
            .join(paths::CONFIG_FILE)
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load from `path`; a missing or unparsable file yields defaults.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!("Ignoring invalid config {}: {}", path.display(), e),
                },
                Err(e) => tracing::warn!("Failed to read config {}: {}", path.display(), e),
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<(), CocreateError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), CocreateError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| CocreateError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The API key from the configured variable, else from `API_KEY`.
    /// Empty values count as absent.
    pub fn api_key(&self) -> Option<String> {
        let lookup = |name: &str| {
            if name.is_empty() {
                return None;
            }
            std::env::var(name).ok().filter(|v| !v.trim().is_empty())
        };
        lookup(&self.gemini.api_key_env).or_else(|| lookup(env::FALLBACK_API_KEY))
    }

    /// Check everything needed before the first request and return the key.
    pub fn validate(&self) -> Result<String, CocreateError> {
        if self.gemini.base_url.trim().is_empty() {
            return Err(CocreateError::Config("gemini.base_url is empty".into()));
        }
        self.api_key().ok_or_else(|| {
            CocreateError::Config(format!(
                "Set {} (or {}) environment variable for Gemini",
                self.gemini.api_key_env,
                env::FALLBACK_API_KEY
            ))
        })
    }

    /// Resolved path of the project database.
    pub fn db_path(&self) -> PathBuf {
        self.storage.db_path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(paths::CONFIG_DIR)
                .join(storage::DB_FILE)
        })
    }
}
