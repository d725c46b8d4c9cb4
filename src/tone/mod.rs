//! Tone Module
//!
//! Tone descriptors, the playground mapping, cache-key composition and the
//! instruction template.

mod descriptor;
mod playground;
mod prompt;

pub use descriptor::{cache_key, ToneDescriptor, ToneInput, KEY_DELIMITER};
pub use playground::{PlaygroundPosition, PlaygroundPreset, AXIS_LIMIT};
pub use prompt::{build_prompt, REFUSAL_MESSAGE};

/// Preset the editor's submit action applies when no tone is chosen.
pub const DEFAULT_PRESET: &str = "balanced";
