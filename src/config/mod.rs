//! Configuration management
//!
//! Everything is read from the process environment, the way the serverless
//! runtime hands configuration to the function:
//!
//! - `LogLevel`: `INFO` or `DEBUG`, anything else falls back to `INFO`
//! - `WAVFILE_BUCKET`: bucket holding the prompt audio (required)
//! - `HTTP_HOST` / `HTTP_PORT`: where the invocation endpoint listens

use ::config::{Environment, Map};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("WAVFILE_BUCKET must be set to the bucket holding prompt audio")]
    MissingAudioBucket,

    #[error("Invalid HTTP_PORT '{0}'")]
    InvalidPort(String),

    #[error("Failed to read configuration: {0}")]
    Source(#[from] ::config::ConfigError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub audio: AudioConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    pub bucket: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogLevel {
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    /// Parse the `LogLevel` setting. Only the exact string `DEBUG` selects
    /// debug output; anything else, including `debug`, means `INFO`.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("DEBUG") => LogLevel::Debug,
            _ => LogLevel::Info,
        }
    }

    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => f.write_str("INFO"),
            LogLevel::Debug => f.write_str("DEBUG"),
        }
    }
}

/// Raw environment variables; the `config` crate lowercases keys
#[derive(Debug, Default, Deserialize)]
struct EnvSettings {
    loglevel: Option<String>,
    wavfile_bucket: Option<String>,
    http_host: Option<String>,
    http_port: Option<String>,
}

impl Config {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8080;

    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(Environment::default())
    }

    /// Load from an explicit variable map instead of the process environment
    pub fn from_map(vars: Map<String, String>) -> Result<Self, ConfigError> {
        Self::load(Environment::default().source(Some(vars)))
    }

    fn load(source: Environment) -> Result<Self, ConfigError> {
        let settings: EnvSettings = ::config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;
        Self::from_settings(settings)
    }

    fn from_settings(settings: EnvSettings) -> Result<Self, ConfigError> {
        let bucket = settings
            .wavfile_bucket
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .ok_or(ConfigError::MissingAudioBucket)?;

        let port = match settings.http_port {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => Self::DEFAULT_PORT,
        };

        Ok(Self {
            server: ServerConfig {
                host: settings
                    .http_host
                    .unwrap_or_else(|| Self::DEFAULT_HOST.to_string()),
                port,
            },
            logging: LoggingConfig {
                level: LogLevel::parse(settings.loglevel.as_deref()),
            },
            audio: AudioConfig { bucket },
        })
    }
}
