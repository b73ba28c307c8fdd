//! Text effect model definitions.
//!
//! A [`TextEffectModel`] is a renderer-agnostic description of text styling.
//! It is a plain nested record: every type here round-trips through JSON
//! and carries no behavior beyond construction and validation.

mod fill;
mod shadow;
mod stroke;

pub use fill::{ColorStop, Fill, resolved_offsets};
pub use shadow::{Glow, InnerShadow, Shadow};
pub use stroke::{Stroke, StrokeAlign};

use crate::error::{EffectError, EffectResult};
use serde::{Deserialize, Serialize};

/// Current model schema version.
pub const MODEL_VERSION: u32 = 1;

fn default_opacity() -> f64 {
    1.0
}

fn default_version() -> u32 {
    MODEL_VERSION
}

/// How a layer composites with the layers beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

impl BlendMode {
    /// Get the CSS `mix-blend-mode` keyword.
    pub fn css_name(&self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::Darken => "darken",
            BlendMode::Lighten => "lighten",
            BlendMode::ColorDodge => "color-dodge",
            BlendMode::ColorBurn => "color-burn",
            BlendMode::HardLight => "hard-light",
            BlendMode::SoftLight => "soft-light",
            BlendMode::Difference => "difference",
            BlendMode::Exclusion => "exclusion",
            BlendMode::Hue => "hue",
            BlendMode::Saturation => "saturation",
            BlendMode::Color => "color",
            BlendMode::Luminosity => "luminosity",
        }
    }

    /// Parse a CSS keyword (case-insensitive).
    pub fn from_css_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::all().iter().copied().find(|mode| mode.css_name() == name)
    }

    /// Get all blend modes.
    pub fn all() -> &'static [BlendMode] {
        &[
            BlendMode::Normal,
            BlendMode::Multiply,
            BlendMode::Screen,
            BlendMode::Overlay,
            BlendMode::Darken,
            BlendMode::Lighten,
            BlendMode::ColorDodge,
            BlendMode::ColorBurn,
            BlendMode::HardLight,
            BlendMode::SoftLight,
            BlendMode::Difference,
            BlendMode::Exclusion,
            BlendMode::Hue,
            BlendMode::Saturation,
            BlendMode::Color,
            BlendMode::Luminosity,
        ]
    }
}

/// One complete paint/stroke/shadow/blend configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectLayer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
    /// Back-to-front: the first shadow is furthest back.
    #[serde(default)]
    pub shadows: Vec<Shadow>,
    #[serde(default)]
    pub inner_shadows: Vec<InnerShadow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glow: Option<Glow>,
    #[serde(default)]
    pub blend_mode: BlendMode,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

impl Default for EffectLayer {
    fn default() -> Self {
        Self {
            fill: Some(Fill::black()),
            stroke: Some(Stroke::disabled()),
            shadows: Vec::new(),
            inner_shadows: Vec::new(),
            glow: None,
            blend_mode: BlendMode::Normal,
            opacity: 1.0,
        }
    }
}

impl EffectLayer {
    /// Whether the layer carries anything for a filter chain.
    pub fn has_filter_effects(&self) -> bool {
        self.shadows.iter().any(|s| s.enabled)
            || self.inner_shadows.iter().any(|s| s.enabled)
            || self.glow.as_ref().is_some_and(|g| g.enabled)
    }

    /// The stroke, if it should be painted at all.
    pub fn visible_stroke(&self) -> Option<&Stroke> {
        self.stroke.as_ref().filter(|s| s.is_visible())
    }
}

/// Top-level text effect: one or more layers rendered bottom to top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextEffectModel {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub layers: Vec<EffectLayer>,
}

impl Default for TextEffectModel {
    fn default() -> Self {
        create_default_text_effect(EffectOverrides::default())
    }
}

impl TextEffectModel {
    /// Create a model from a non-empty layer list.
    ///
    /// An empty list yields the default single layer instead.
    pub fn from_layers(name: Option<String>, layers: Vec<EffectLayer>) -> Self {
        let layers = if layers.is_empty() {
            vec![EffectLayer::default()]
        } else {
            layers
        };
        Self {
            version: MODEL_VERSION,
            name,
            layers,
        }
    }

    /// Check the model invariants.
    pub fn validate(&self) -> EffectResult<()> {
        if self.version != MODEL_VERSION {
            return Err(EffectError::UnsupportedVersion(self.version));
        }
        if self.layers.is_empty() {
            return Err(EffectError::EmptyLayers);
        }
        for fill in self.layers.iter().filter_map(|layer| layer.fill.as_ref()) {
            fill.validate()?;
        }
        Ok(())
    }

    /// Serialize the model to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize and validate a model from JSON.
    pub fn from_json(json: &str) -> EffectResult<Self> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }
}

/// Partial values merged over the default effect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectOverrides {
    pub name: Option<String>,
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
    pub shadows: Option<Vec<Shadow>>,
    pub inner_shadows: Option<Vec<InnerShadow>>,
    pub glow: Option<Glow>,
    pub blend_mode: Option<BlendMode>,
    pub opacity: Option<f64>,
    /// Replaces the whole layer list when non-empty.
    pub layers: Option<Vec<EffectLayer>>,
}

/// Create the canonical "no effect" model with overrides applied.
///
/// The result always has at least one layer.
pub fn create_default_text_effect(overrides: EffectOverrides) -> TextEffectModel {
    let EffectOverrides {
        name,
        fill,
        stroke,
        shadows,
        inner_shadows,
        glow,
        blend_mode,
        opacity,
        layers,
    } = overrides;

    if let Some(layers) = layers.filter(|layers| !layers.is_empty()) {
        return TextEffectModel::from_layers(name, layers);
    }

    let base = EffectLayer::default();
    let layer = EffectLayer {
        fill: fill.or(base.fill),
        stroke: stroke.or(base.stroke),
        shadows: shadows.unwrap_or(base.shadows),
        inner_shadows: inner_shadows.unwrap_or(base.inner_shadows),
        glow: glow.or(base.glow),
        blend_mode: blend_mode.unwrap_or(base.blend_mode),
        opacity: opacity.unwrap_or(base.opacity),
    };

    TextEffectModel {
        version: MODEL_VERSION,
        name,
        layers: vec![layer],
    }
}
