//! Server configuration parsed from environment variables.
//!
//! `main` loads an optional `.env` file first, so every key below can live
//! there during development.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DELIVERY_DELAY_MS: u64 = 1500;
pub const DEFAULT_CONTACT_FROM: &str = "Portfolio <onboarding@resend.dev>";
pub const DEFAULT_CONTACT_RATE_LIMIT: usize = 5;
pub const DEFAULT_CONTACT_RATE_WINDOW_SECS: u64 = 600;
pub const DEFAULT_GLOBAL_RATE_LIMIT: usize = 50;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("RESEND_API_KEY is set but {var} is missing")]
    IncompleteResend { var: &'static str },
}

/// How accepted contact messages leave the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryConfig {
    /// Wait `delay`, then report success without sending anything.
    Simulated { delay: Duration },
    /// Send through the Resend API.
    Resend { api_key: String, from: String, to: String },
}

/// Sliding-window limits for `POST /api/contact`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_client_limit: usize,
    pub global_limit: usize,
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_client_limit: DEFAULT_CONTACT_RATE_LIMIT,
            global_limit: DEFAULT_GLOBAL_RATE_LIMIT,
            window: Duration::from_secs(DEFAULT_CONTACT_RATE_WINDOW_SECS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Static files (portrait, résumé) served as the router fallback.
    /// `None` means the Leptos site root.
    pub site_dir: Option<PathBuf>,
    pub delivery: DeliveryConfig,
    pub rate_limit: RateLimitConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_DIR`: static asset directory, default the Leptos site root
    /// - `CONTACT_DELIVERY_DELAY_MS`: simulated delivery delay, default 1500
    /// - `RESEND_API_KEY`: switches delivery to Resend; then
    ///   `CONTACT_TO_EMAIL` is required and `CONTACT_FROM_EMAIL` optional
    /// - `CONTACT_RATE_LIMIT`: submissions per client per window, default 5
    /// - `CONTACT_GLOBAL_RATE_LIMIT`: submissions per window overall, default 50
    /// - `CONTACT_RATE_WINDOW_SECS`: default 600
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` does not parse or the Resend settings are
    /// incomplete.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env_nonempty("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let site_dir = env_nonempty("SITE_DIR").map(PathBuf::from);

        let delivery = match env_nonempty("RESEND_API_KEY") {
            Some(api_key) => {
                let to = env_nonempty("CONTACT_TO_EMAIL").ok_or(ConfigError::IncompleteResend { var: "CONTACT_TO_EMAIL" })?;
                let from = env_nonempty("CONTACT_FROM_EMAIL").unwrap_or_else(|| DEFAULT_CONTACT_FROM.to_owned());
                DeliveryConfig::Resend { api_key, from, to }
            }
            None => DeliveryConfig::Simulated {
                delay: Duration::from_millis(env_parse("CONTACT_DELIVERY_DELAY_MS", DEFAULT_DELIVERY_DELAY_MS)),
            },
        };

        let rate_limit = RateLimitConfig {
            per_client_limit: env_parse("CONTACT_RATE_LIMIT", DEFAULT_CONTACT_RATE_LIMIT),
            global_limit: env_parse("CONTACT_GLOBAL_RATE_LIMIT", DEFAULT_GLOBAL_RATE_LIMIT),
            window: Duration::from_secs(env_parse("CONTACT_RATE_WINDOW_SECS", DEFAULT_CONTACT_RATE_WINDOW_SECS)),
        };

        Ok(Self { port, site_dir, delivery, rate_limit })
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    env_nonempty(key)
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
