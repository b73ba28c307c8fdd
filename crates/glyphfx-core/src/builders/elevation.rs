//! Elevation: light from directly above, shadow cast straight down.
//!
//! The model has no transform concept, so the lifted look comes from the
//! shadow alone.

use super::{SLIDER_MAX, slider_to_blur_px, transparency_to_opacity};
use crate::model::{EffectOverrides, Shadow, TextEffectModel, create_default_text_effect};
use serde::{Deserialize, Serialize};

/// UI control values for elevation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevationParams {
    /// 0..100, how far the text appears lifted.
    pub strength: f64,
    /// 0..100, independent of strength.
    pub blur: f64,
    /// 0..100, where 100 is fully opaque.
    pub transparency: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElevationBuilderConfig {
    /// Downward offset at strength 100.
    pub max_lift_px: f64,
    /// Blur at slider value 100.
    pub max_blur_px: f64,
}

impl Default for ElevationBuilderConfig {
    fn default() -> Self {
        Self {
            max_lift_px: 6.0,
            max_blur_px: 20.0,
        }
    }
}

/// Build a single-layer model with one straight-down shadow.
pub fn build_elevation_effect(
    params: &ElevationParams,
    config: &ElevationBuilderConfig,
) -> TextEffectModel {
    let lift = params.strength / SLIDER_MAX * config.max_lift_px;

    let shadow = Shadow::new(
        0.0,
        lift,
        slider_to_blur_px(params.blur, config.max_blur_px),
        params.color.clone(),
    )
    .with_opacity(transparency_to_opacity(params.transparency));

    create_default_text_effect(EffectOverrides {
        name: Some("Elevation".to_string()),
        shadows: Some(vec![shadow]),
        ..Default::default()
    })
}
