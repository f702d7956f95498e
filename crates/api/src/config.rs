//! Process configuration, read once at startup from the environment and an
//! optional `.env` file.

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use discvr_ai::{GeminiConfig, GenerationConfig};
use discvr_ai::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use discvr_observability::LogFormat;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

impl ConfigError {
    fn invalid(key: &'static str, message: impl ToString) -> Self {
        Self::Invalid {
            key,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Catalog file; the bundled sample catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub gemini: GeminiConfig,
    pub generation: GenerationConfig,
    pub log_format: LogFormat,
}

impl ApiConfig {
    /// Read `HOST`, `PORT`, `CATALOG_PATH`, `GEMINI_*` and `LOG_FORMAT`.
    ///
    /// Values in the process environment win over the dotenv file; a missing
    /// file is fine.
    pub fn load(dotenv_path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = read_dotenv(dotenv_path.as_ref())?;
        Self::from_layers(|key| std::env::var(key).ok(), &file)
    }

    fn from_layers(
        env: impl Fn(&str) -> Option<String>,
        file: &HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            env(key)
                .filter(|v| !v.trim().is_empty())
                .or_else(|| file.get(key).cloned())
        })
    }

    /// Build from an injectable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let host: IpAddr = match get("HOST") {
            Some(raw) => raw.parse().map_err(|e| ConfigError::invalid("HOST", e))?,
            None => IpAddr::from([0, 0, 0, 0]),
        };
        let port: u16 = match get("PORT") {
            Some(raw) => raw.parse().map_err(|e| ConfigError::invalid("PORT", e))?,
            None => DEFAULT_PORT,
        };
        let timeout = match get("GEMINI_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .map_err(|e| ConfigError::invalid("GEMINI_TIMEOUT_SECS", e))?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };
        let mut generation = GenerationConfig::default();
        if let Some(raw) = get("GEMINI_TEMPERATURE") {
            generation.temperature = raw
                .parse()
                .map_err(|e| ConfigError::invalid("GEMINI_TEMPERATURE", e))?;
        }
        if let Some(raw) = get("GEMINI_MAX_OUTPUT_TOKENS") {
            generation.max_output_tokens = raw
                .parse()
                .map_err(|e| ConfigError::invalid("GEMINI_MAX_OUTPUT_TOKENS", e))?;
        }
        let log_format = match get("LOG_FORMAT") {
            Some(raw) => raw.parse().map_err(|e| ConfigError::invalid("LOG_FORMAT", e))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            catalog_path: get("CATALOG_PATH").map(PathBuf::from),
            gemini: GeminiConfig {
                api_key: get("GEMINI_API_KEY"),
                model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                base_url: get("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                timeout,
            },
            generation,
            log_format,
        })
    }
}

fn read_dotenv(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    match dotenvy::from_path_iter(path) {
        Ok(entries) => entries
            .collect::<Result<HashMap<_, _>, _>>()
            .map_err(|e| ConfigError::invalid("dotenv file", e)),
        Err(e) if e.not_found() => Ok(HashMap::new()),
        Err(e) => Err(ConfigError::invalid("dotenv file", e)),
    }
}
