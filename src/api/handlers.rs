//! API Handlers
//!
//! HTTP request handlers for each tone service endpoint.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::{Result, ToneError};
use crate::models::{
    HealthResponse, PresetsResponse, StatsResponse, TransformData, TransformRequest,
    TransformResponse, ValidTransform,
};
use crate::tone::{build_prompt, cache_key};
use crate::upstream::{MistralClient, TextGenerator};

/// Application state shared across all handlers.
///
/// The cache sits behind a single mutex so that each `get` and `put` is
/// atomic and the capacity bound holds under concurrent requests. The lock
/// is never held while the generator runs.
#[derive(Clone)]
pub struct AppState {
    /// Shared response cache
    pub cache: Arc<Mutex<ResponseCache>>,
    /// Text generator, absent when no API key is configured
    pub generator: Option<Arc<dyn TextGenerator>>,
}

impl AppState {
    /// Creates a new AppState around the given cache and generator.
    pub fn new(cache: ResponseCache, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            cache: Arc::new(Mutex::new(cache)),
            generator,
        }
    }

    /// Creates a new AppState from configuration, wiring up the Mistral
    /// client when an API key is present.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = ResponseCache::new(config.max_entries, config.cache_ttl);
        let generator = MistralClient::from_config(config)?
            .map(|client| Arc::new(client) as Arc<dyn TextGenerator>);
        Ok(Self::new(cache, generator))
    }

    // == Transform ==
    /// Serves a validated request from the cache, or generates, caches and
    /// returns a fresh transformation.
    ///
    /// Failed generations leave the cache untouched. An empty completion is
    /// returned but not cached.
    pub async fn transform(&self, request: &ValidTransform) -> Result<TransformData> {
        let generator = self.generator.as_ref().ok_or(ToneError::Unconfigured)?;
        let key = cache_key(&request.text, &request.tone);

        let hit = self.cache.lock().await.get(&key);
        if let Some(transformed_text) = hit {
            debug!(chars = transformed_text.len(), "serving transformation from cache");
            return Ok(TransformData {
                transformed_text,
                cached: true,
            });
        }

        let prompt = build_prompt(&request.text, &request.tone);
        let transformed_text = generator.generate(&prompt).await?.trim().to_string();

        if !transformed_text.is_empty() {
            self.cache
                .lock()
                .await
                .put(key, transformed_text.clone());
        }
        info!(chars = transformed_text.len(), "transformation generated");

        Ok(TransformData {
            transformed_text,
            cached: false,
        })
    }
}

/// Handler for POST /api/tone/transform
///
/// Rephrases `text` into the requested tone. The body is parsed as JSON
/// whatever its `Content-Type`.
pub async fn transform_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TransformResponse>> {
    // A missing credential is reported before anything about the body
    if state.generator.is_none() {
        return Err(ToneError::Unconfigured);
    }

    let request: TransformRequest = serde_json::from_slice(&body)
        .map_err(|err| ToneError::InvalidInput(format!("Invalid JSON body: {}", err)))?;
    let request = request.validate()?;

    let data = state.transform(&request).await?;
    Ok(Json(data.into()))
}

/// Handler for GET /api/tone/presets
pub async fn presets_handler() -> Json<PresetsResponse> {
    Json(PresetsResponse::all())
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.lock().await;
    Json(StatsResponse::new(&cache.stats(), cache.capacity()))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.generator.is_some()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tone::ToneDescriptor;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a fixed reply and counts calls.
    struct CountingGenerator {
        calls: AtomicUsize,
        reply: String,
    }

    #[async_trait]
    impl TextGenerator for CountingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Err(ToneError::Upstream {
                status: 503,
                message: "overloaded".to_string(),
            })
        }
    }

    fn counting(reply: &str) -> Arc<CountingGenerator> {
        Arc::new(CountingGenerator {
            calls: AtomicUsize::new(0),
            reply: reply.to_string(),
        })
    }

    fn state_with(generator: Arc<dyn TextGenerator>) -> AppState {
        AppState::new(ResponseCache::new(100, 3600), Some(generator))
    }

    fn request(text: &str) -> ValidTransform {
        ValidTransform {
            text: text.to_string(),
            tone: ToneDescriptor::new("casual", "neutral", "blend:10%"),
        }
    }

    #[tokio::test]
    async fn test_miss_then_hit() {
        let generator = counting("  Hey there!  ");
        let state = state_with(generator.clone());

        let first = state.transform(&request("Hello there")).await.unwrap();
        assert_eq!(first.transformed_text, "Hey there!");
        assert!(!first.cached);

        let second = state.transform(&request("Hello there")).await.unwrap();
        assert_eq!(second.transformed_text, "Hey there!");
        assert!(second.cached);

        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_different_tone_is_a_miss() {
        let generator = counting("ok");
        let state = state_with(generator.clone());

        state.transform(&request("Hello")).await.unwrap();
        let mut other = request("Hello");
        other.tone.style = "blend:20%".to_string();
        let result = state.transform(&other).await.unwrap();

        assert!(!result.cached);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_not_cached() {
        let state = state_with(Arc::new(FailingGenerator));

        let result = state.transform(&request("Hello")).await;
        assert!(matches!(result, Err(ToneError::Upstream { status: 503, .. })));
        assert!(state.cache.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_completion_is_not_cached() {
        let generator = counting("   ");
        let state = state_with(generator.clone());

        let result = state.transform(&request("Hello")).await.unwrap();
        assert_eq!(result.transformed_text, "");
        assert!(state.cache.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_unconfigured() {
        let state = AppState::new(ResponseCache::new(100, 3600), None);

        let result = state.transform(&request("Hello")).await;
        assert!(matches!(result, Err(ToneError::Unconfigured)));
    }

    #[tokio::test]
    async fn test_from_config_without_key() {
        let state = AppState::from_config(&Config::default()).unwrap();

        assert!(state.generator.is_none());
        assert_eq!(state.cache.lock().await.capacity(), 100);
    }

    #[tokio::test]
    async fn test_transform_handler_parses_raw_body() {
        let generator = counting("Hey!");
        let state = state_with(generator.clone());
        let body = Bytes::from_static(
            br#"{"text": "Hello", "tone": {"formality": "casual", "emotion": "neutral", "style": "blend:10%"}}"#,
        );

        let Json(response) = transform_handler(State(state), body).await.unwrap();
        assert!(response.success);
        assert_eq!(response.data.transformed_text, "Hey!");
        assert!(!response.data.cached);
    }

    #[tokio::test]
    async fn test_transform_handler_rejects_malformed_body() {
        let state = state_with(counting("Hey!"));

        let result = transform_handler(State(state), Bytes::from_static(b"{\"text\"")).await;
        assert!(matches!(result, Err(ToneError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = AppState::new(ResponseCache::new(10, 3600), None);
        state
            .cache
            .lock()
            .await
            .put("k".to_string(), "v".to_string());

        let Json(stats) = stats_handler(State(state)).await;
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.max_entries, 10);
    }
}
