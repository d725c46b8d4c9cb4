//! Tone Playground Module
//!
//! Maps a point on the 2-axis tone playground to a weighted tone descriptor.
//!
//! The vertical axis runs from casual (bottom) to professional (top), the
//! horizontal axis from concise (left) to expanded (right). Both axes span
//! `-100..=100`.

use serde::{Deserialize, Serialize};

use super::ToneDescriptor;

/// Bound of each playground axis.
pub const AXIS_LIMIT: f64 = 100.0;

// == Playground Position ==
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaygroundPosition {
    pub x: f64,
    pub y: f64,
}

impl PlaygroundPosition {
    /// Creates a position clamped to the playground bounds.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }.clamped()
    }

    pub fn clamped(self) -> Self {
        Self {
            x: clamp_axis(self.x),
            y: clamp_axis(self.y),
        }
    }

    // == To Descriptor ==
    /// Weights each axis pole by its distance from the centre, and blends by
    /// the overall distance capped at 100.
    pub fn to_descriptor(&self) -> ToneDescriptor {
        let Self { x, y } = self.clamped();

        let professional = percent(y.max(0.0));
        let casual = percent((-y).max(0.0));
        let expanded = percent(x.max(0.0));
        let concise = percent((-x).max(0.0));
        let blend = percent(x.hypot(y)).min(100);

        ToneDescriptor::new(
            format!("professional:{}% casual:{}%", professional, casual),
            format!("expanded:{}% concise:{}%", expanded, concise),
            format!("blend:{}%", blend),
        )
    }
}

fn clamp_axis(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-AXIS_LIMIT, AXIS_LIMIT)
    }
}

fn percent(value: f64) -> i64 {
    value.round() as i64
}

// == Playground Preset ==
/// Named corners of the playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaygroundPreset {
    Executive,
    Technical,
    Basic,
    Educational,
    Reset,
}

impl PlaygroundPreset {
    pub const ALL: [PlaygroundPreset; 5] = [
        PlaygroundPreset::Executive,
        PlaygroundPreset::Technical,
        PlaygroundPreset::Basic,
        PlaygroundPreset::Educational,
        PlaygroundPreset::Reset,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PlaygroundPreset::Executive => "Executive",
            PlaygroundPreset::Technical => "Technical",
            PlaygroundPreset::Basic => "Basic",
            PlaygroundPreset::Educational => "Educational",
            PlaygroundPreset::Reset => "Reset",
        }
    }

    pub fn position(&self) -> PlaygroundPosition {
        match self {
            PlaygroundPreset::Executive => PlaygroundPosition::new(-70.0, 70.0),
            PlaygroundPreset::Technical => PlaygroundPosition::new(70.0, 70.0),
            PlaygroundPreset::Basic => PlaygroundPosition::new(-70.0, -70.0),
            PlaygroundPreset::Educational => PlaygroundPosition::new(70.0, -70.0),
            PlaygroundPreset::Reset => PlaygroundPosition::default(),
        }
    }

    pub fn descriptor(&self) -> ToneDescriptor {
        self.position().to_descriptor()
    }
}
