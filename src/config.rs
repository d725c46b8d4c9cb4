//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::{DEFAULT_MAX_ENTRIES, DEFAULT_TTL_SECS};

pub const DEFAULT_MISTRAL_API_URL: &str = "https://api.mistral.ai/v1/chat/completions";
pub const DEFAULT_MISTRAL_MODEL: &str = "mistral-small-latest";

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Clone)]
pub struct Config {
    /// Maximum number of cached transformations
    pub max_entries: usize,
    /// Lifetime of a cached transformation in seconds
    pub cache_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Credential for the Mistral API; transformations are refused without it
    pub mistral_api_key: Option<String>,
    /// Chat-completions endpoint
    pub mistral_api_url: String,
    /// Model name sent with every request
    pub mistral_model: String,
    /// Completion token limit
    pub max_tokens: u32,
    /// Upstream request timeout in seconds
    pub upstream_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 100)
    /// - `CACHE_TTL` - Cache entry lifetime in seconds (default: 3600)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `MISTRAL_API_KEY` - API credential (default: unset)
    /// - `MISTRAL_API_URL` - Chat-completions endpoint
    /// - `MISTRAL_MODEL` - Model name (default: mistral-small-latest)
    /// - `MISTRAL_MAX_TOKENS` - Completion token limit (default: 1024)
    /// - `UPSTREAM_TIMEOUT` - Upstream timeout in seconds (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_entries: parse_var("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            mistral_api_key: non_empty_var("MISTRAL_API_KEY"),
            mistral_api_url: non_empty_var("MISTRAL_API_URL").unwrap_or(defaults.mistral_api_url),
            mistral_model: non_empty_var("MISTRAL_MODEL").unwrap_or(defaults.mistral_model),
            max_tokens: parse_var("MISTRAL_MAX_TOKENS").unwrap_or(defaults.max_tokens),
            upstream_timeout: parse_var("UPSTREAM_TIMEOUT").unwrap_or(defaults.upstream_timeout),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            cache_ttl: DEFAULT_TTL_SECS,
            server_port: 3000,
            mistral_api_key: None,
            mistral_api_url: DEFAULT_MISTRAL_API_URL.to_string(),
            mistral_model: DEFAULT_MISTRAL_MODEL.to_string(),
            max_tokens: 1024,
            upstream_timeout: 60,
        }
    }
}

// The API key must never reach the logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("max_entries", &self.max_entries)
            .field("cache_ttl", &self.cache_ttl)
            .field("server_port", &self.server_port)
            .field(
                "mistral_api_key",
                &self.mistral_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("mistral_api_url", &self.mistral_api_url)
            .field("mistral_model", &self.mistral_model)
            .field("max_tokens", &self.max_tokens)
            .field("upstream_timeout", &self.upstream_timeout)
            .finish()
    }
}
