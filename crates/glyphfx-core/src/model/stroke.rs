//! Glyph outline paint.

use serde::{Deserialize, Serialize};

/// Where the stroke sits relative to the glyph contour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StrokeAlign {
    /// Straddles the contour (native vector behavior).
    #[default]
    Center,
    /// Entirely inside the glyph.
    Inside,
    /// Entirely outside the glyph.
    Outside,
}

/// Outline around glyph contours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub enabled: bool,
    pub color: String,
    /// Width in pixels.
    pub width: f64,
    #[serde(default = "super::default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub align: StrokeAlign,
}

impl Stroke {
    /// An enabled, centered, fully opaque stroke.
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            enabled: true,
            color: color.into(),
            width,
            opacity: 1.0,
            align: StrokeAlign::Center,
        }
    }

    /// The baseline "no stroke" value.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            color: "#000000".to_string(),
            width: 0.0,
            opacity: 1.0,
            align: StrokeAlign::Center,
        }
    }

    pub fn with_align(mut self, align: StrokeAlign) -> Self {
        self.align = align;
        self
    }

    /// Disabled or zero-width strokes mean "no stroke".
    pub fn is_visible(&self) -> bool {
        self.enabled && self.width > 0.0
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::disabled()
    }
}
