//! Tone Descriptor Module
//!
//! The (formality, emotion, style) triple and the cache key derived from it.

use serde::{Deserialize, Serialize};

use super::playground::PlaygroundPosition;

/// Separator between the text and the tone fields, and between the fields.
pub const KEY_DELIMITER: char = ':';

// == Tone Descriptor ==
/// Desired phrasing of the output text.
///
/// Each field is free text; the playground produces weighted strings such as
/// `professional:70% casual:0%`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToneDescriptor {
    pub formality: String,
    pub emotion: String,
    pub style: String,
}

impl ToneDescriptor {
    pub fn new(
        formality: impl Into<String>,
        emotion: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            formality: formality.into(),
            emotion: emotion.into(),
            style: style.into(),
        }
    }

    /// Expands a named preset into all three fields.
    pub fn uniform(preset: impl Into<String>) -> Self {
        let preset = preset.into();
        Self::new(preset.clone(), preset.clone(), preset)
    }

    // == Tone Key ==
    /// Serializes the fields as `formality:emotion:style`.
    ///
    /// Field order is part of the cache key format and must stay fixed.
    pub fn tone_key(&self) -> String {
        format!(
            "{}{d}{}{d}{}",
            self.formality,
            self.emotion,
            self.style,
            d = KEY_DELIMITER
        )
    }
}

// == Cache Key ==
/// Builds the cache key for `text` rendered in `tone`.
///
/// The text is used exactly as submitted, surrounding whitespace included.
pub fn cache_key(text: &str, tone: &ToneDescriptor) -> String {
    format!("{}{}{}", text, KEY_DELIMITER, tone.tone_key())
}

// == Tone Input ==
/// A tone as it arrives over the wire.
///
/// Accepts a preset name (`"balanced"`), an explicit descriptor object, or a
/// playground position object (`{"x": -70, "y": 70}`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ToneInput {
    Preset(String),
    Explicit(ToneDescriptor),
    Position(PlaygroundPosition),
}

impl ToneInput {
    /// Resolves the input into the descriptor used for prompting and keying.
    pub fn resolve(&self) -> ToneDescriptor {
        match self {
            ToneInput::Preset(name) => ToneDescriptor::uniform(name.as_str()),
            ToneInput::Explicit(descriptor) => descriptor.clone(),
            ToneInput::Position(position) => position.to_descriptor(),
        }
    }
}
