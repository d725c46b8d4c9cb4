//! API Module
//!
//! HTTP handlers and routing for the tone service REST API.
//!
//! # Endpoints
//! - `POST /api/tone/transform` - Rephrase text into a tone
//! - `GET /api/tone/presets` - List playground presets
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
