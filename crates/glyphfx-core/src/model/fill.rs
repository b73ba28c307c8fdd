//! Glyph interior paint.

use crate::error::{EffectError, EffectResult};
use serde::{Deserialize, Serialize};

/// One color stop of a linear gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Color string, passed through uninterpreted.
    pub color: String,
    /// Position along the gradient line (0.0..=1.0). `None` = evenly distributed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
}

impl ColorStop {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            offset: None,
        }
    }

    pub fn at(color: impl Into<String>, offset: f64) -> Self {
        Self {
            color: color.into(),
            offset: Some(offset),
        }
    }
}

/// Paint applied to glyph interiors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Fill {
    /// Flat color.
    Solid {
        color: String,
        #[serde(default = "super::default_opacity")]
        opacity: f64,
    },
    /// Linear gradient in polar form.
    LinearGradient {
        /// Direction in degrees. 0 points right, 90 points down.
        angle: f64,
        stops: Vec<ColorStop>,
    },
}

impl Fill {
    /// Minimum number of stops a gradient needs.
    pub const MIN_GRADIENT_STOPS: usize = 2;

    /// Solid fill at full opacity.
    pub fn solid(color: impl Into<String>) -> Self {
        Fill::Solid {
            color: color.into(),
            opacity: 1.0,
        }
    }

    /// Opaque black, the fallback fill everywhere.
    pub fn black() -> Self {
        Self::solid("#000000")
    }

    /// Build a linear gradient, rejecting fewer than two stops.
    pub fn linear_gradient(angle: f64, stops: Vec<ColorStop>) -> EffectResult<Self> {
        if stops.len() < Self::MIN_GRADIENT_STOPS {
            return Err(EffectError::GradientStops(stops.len()));
        }
        Ok(Fill::LinearGradient { angle, stops })
    }

    /// Check the gradient stop invariant.
    pub fn validate(&self) -> EffectResult<()> {
        match self {
            Fill::Solid { .. } => Ok(()),
            Fill::LinearGradient { stops, .. } if stops.len() < Self::MIN_GRADIENT_STOPS => {
                Err(EffectError::GradientStops(stops.len()))
            }
            Fill::LinearGradient { .. } => Ok(()),
        }
    }

    pub fn is_gradient(&self) -> bool {
        matches!(self, Fill::LinearGradient { .. })
    }
}

impl Default for Fill {
    fn default() -> Self {
        Self::black()
    }
}

/// Resolve stop offsets, distributing missing ones evenly along the line.
///
/// Explicit offsets are clamped into `0.0..=1.0`.
pub fn resolved_offsets(stops: &[ColorStop]) -> Vec<f64> {
    let last = stops.len().saturating_sub(1).max(1) as f64;
    stops
        .iter()
        .enumerate()
        .map(|(i, stop)| stop.offset.unwrap_or(i as f64 / last).clamp(0.0, 1.0))
        .collect()
}
