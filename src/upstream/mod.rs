//! Upstream Module
//!
//! The text-generation service the tone handler forwards cache misses to.

mod mistral;

use async_trait::async_trait;

use crate::error::Result;

pub use mistral::MistralClient;

/// Produces a completion for a single prompt.
///
/// Implementations return the completion text trimmed of surrounding
/// whitespace. A failure status from the service maps to
/// [`ToneError::Upstream`](crate::error::ToneError::Upstream); transport and
/// decoding failures map to `Internal`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
