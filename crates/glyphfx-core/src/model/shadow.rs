//! Shadows and glow.

use serde::{Deserialize, Serialize};

/// An offset, blurred, colored copy of the glyph silhouette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub enabled: bool,
    /// Horizontal offset in pixels (positive = right).
    pub x: f64,
    /// Vertical offset in pixels (positive = down).
    pub y: f64,
    /// Blur radius in pixels.
    pub blur: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
    pub color: String,
    #[serde(default = "super::default_opacity")]
    pub opacity: f64,
}

/// Inner shadows share the shadow structure; they paint inside the glyphs.
pub type InnerShadow = Shadow;

impl Shadow {
    pub fn new(x: f64, y: f64, blur: f64, color: impl Into<String>) -> Self {
        Self {
            enabled: true,
            x,
            y,
            blur,
            spread: None,
            color: color.into(),
            opacity: 1.0,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_spread(mut self, spread: f64) -> Self {
        self.spread = Some(spread);
        self
    }
}

/// A centered shadow, usually with a larger radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glow {
    pub enabled: bool,
    pub color: String,
    #[serde(default = "super::default_opacity")]
    pub opacity: f64,
    pub blur: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
}

impl Glow {
    pub fn new(color: impl Into<String>, blur: f64) -> Self {
        Self {
            enabled: true,
            color: color.into(),
            opacity: 1.0,
            blur,
            spread: None,
        }
    }

    /// The equivalent shadow with no offset.
    pub fn as_shadow(&self) -> Shadow {
        Shadow {
            enabled: self.enabled,
            x: 0.0,
            y: 0.0,
            blur: self.blur,
            spread: self.spread,
            color: self.color.clone(),
            opacity: self.opacity,
        }
    }
}
