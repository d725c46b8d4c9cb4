//! Request DTOs for the tone API
//!
//! Defines the structure of incoming HTTP request bodies and their validation.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, ToneError};
use crate::tone::{ToneDescriptor, ToneInput};

/// Maximum accepted text length, in characters, after trimming.
pub const MAX_TEXT_CHARS: usize = 5000;

/// Request body for POST /api/tone/transform
///
/// Both fields are kept loosely typed so that every malformed shape is
/// reported with a structured error code instead of a bare rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransformRequest {
    /// Text to rephrase
    #[serde(default)]
    pub text: Option<Value>,
    /// Preset name, explicit descriptor or playground position
    #[serde(default)]
    pub tone: Option<Value>,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidTransform {
    /// Text exactly as submitted
    pub text: String,
    pub tone: ToneDescriptor,
}

impl TransformRequest {
    pub fn new(text: impl Into<Value>, tone: impl Into<Value>) -> Self {
        Self {
            text: Some(text.into()),
            tone: Some(tone.into()),
        }
    }

    /// Validates the request data.
    ///
    /// Checks run in order: presence of both fields, text type and
    /// emptiness, text length, then tone shape.
    pub fn validate(&self) -> Result<ValidTransform> {
        let (text, tone) = match (&self.text, &self.tone) {
            (Some(text), Some(tone)) if !is_blank_value(text) && !is_blank_value(tone) => {
                (text, tone)
            }
            _ => return Err(ToneError::InvalidInput("Missing text or tone".to_string())),
        };

        let text = match text.as_str() {
            Some(text) if !trim_text(text).is_empty() => text,
            _ => {
                return Err(ToneError::InvalidInput(
                    "Text must be a non-empty string".to_string(),
                ))
            }
        };

        if trim_text(text).chars().count() > MAX_TEXT_CHARS {
            return Err(ToneError::TextTooLong {
                max: MAX_TEXT_CHARS,
            });
        }

        let tone = ToneInput::deserialize(tone).map_err(|_| {
            ToneError::InvalidInput(
                "Tone must be a preset name, a formality/emotion/style object or a playground position"
                    .to_string(),
            )
        })?;

        Ok(ValidTransform {
            text: text.to_string(),
            tone: tone.resolve(),
        })
    }
}

/// Trims whitespace and byte-order marks, which `str::trim` keeps.
fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Null, `false`, `0` and `""` count as absent.
fn is_blank_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
