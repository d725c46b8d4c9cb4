//! Tone Shift - text tone-transformation service
//!
//! Rephrases text into a requested tone through an LLM API, memoizing
//! identical requests in a bounded, lazily-expiring FIFO cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tone;
pub mod upstream;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{Result, ToneError};
