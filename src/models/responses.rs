//! Response DTOs for the tone API
//!
//! Defines the structure of outgoing HTTP response bodies. Error bodies are
//! produced by [`ToneError`](crate::error::ToneError) itself.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::tone::{PlaygroundPosition, PlaygroundPreset, ToneDescriptor, DEFAULT_PRESET};

/// Response body for POST /api/tone/transform
#[derive(Debug, Clone, Serialize)]
pub struct TransformResponse {
    /// Always true; failures use the error body
    pub success: bool,
    pub data: TransformData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformData {
    /// Rephrased text
    pub transformed_text: String,
    /// Whether the text came from the cache
    pub cached: bool,
}

impl From<TransformData> for TransformResponse {
    fn from(data: TransformData) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// One playground corner in GET /api/tone/presets
#[derive(Debug, Clone, Serialize)]
pub struct PresetInfo {
    pub name: PlaygroundPreset,
    pub label: &'static str,
    pub position: PlaygroundPosition,
    pub tone: ToneDescriptor,
}

/// Response body for GET /api/tone/presets
#[derive(Debug, Clone, Serialize)]
pub struct PresetsResponse {
    /// Named preset applied to all three tone fields by default
    pub default_preset: &'static str,
    pub presets: Vec<PresetInfo>,
}

impl PresetsResponse {
    pub fn all() -> Self {
        Self {
            default_preset: DEFAULT_PRESET,
            presets: PlaygroundPreset::ALL
                .iter()
                .map(|preset| PresetInfo {
                    name: *preset,
                    label: preset.label(),
                    position: preset.position(),
                    tone: preset.descriptor(),
                })
                .collect(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Configured capacity
    pub max_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn new(stats: &CacheStats, max_entries: usize) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
            max_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Whether an upstream API key is configured
    pub upstream_configured: bool,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(upstream_configured: bool) -> Self {
        Self {
            status: "healthy".to_string(),
            upstream_configured,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
