//! Request and Response models for the tone API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{TransformRequest, ValidTransform, MAX_TEXT_CHARS};
pub use responses::{
    HealthResponse, PresetInfo, PresetsResponse, StatsResponse, TransformData, TransformResponse,
};
