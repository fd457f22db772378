//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address, site root and reload port come from `[package.metadata.leptos]`
//! and the `LEPTOS_*` variables, not from here.

/// Toggles the br/gzip response compression layer
pub const COMPRESSION_VAR: &str = "CITYTRACK_COMPRESSION";

/// Toggles serving precompressed `.br`/`.gz` siblings for `/pkg` assets
pub const PRECOMPRESSED_VAR: &str = "CITYTRACK_PRECOMPRESSED";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a boolean (true/false, 1/0, yes/no, on/off), got {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Compress responses with brotli/gzip
    pub compression: bool,

    /// Serve precompressed bundle files when present
    pub precompressed_assets: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compression: true,
            precompressed_assets: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            compression: read_bool(&lookup, COMPRESSION_VAR, defaults.compression)?,
            precompressed_assets: read_bool(
                &lookup,
                PRECOMPRESSED_VAR,
                defaults.precompressed_assets,
            )?,
        })
    }
}

fn read_bool<F>(lookup: &F, var: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidBool { var, value }),
    }
}

/// Parse a human-friendly boolean
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
