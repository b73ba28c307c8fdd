//! Directional drop shadow.

use super::{slider_to_blur_px, transparency_to_opacity};
use crate::model::{EffectOverrides, Shadow, TextEffectModel, create_default_text_effect};
use serde::{Deserialize, Serialize};

/// UI control values for a drop shadow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowParams {
    /// 0..100.
    pub distance: f64,
    /// -180..180 degrees. 0 casts right, 90 casts down.
    pub angle: f64,
    /// 0..100.
    pub blur: f64,
    /// 0..100, where 100 is fully opaque.
    pub transparency: f64,
    pub color: String,
}

/// Scaling from slider units to pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShadowBuilderConfig {
    /// Pixels per distance unit: 50 maps to a 5px offset.
    pub distance_to_px_scale: f64,
    /// Blur at slider value 100.
    pub max_blur_px: f64,
}

impl Default for ShadowBuilderConfig {
    fn default() -> Self {
        Self {
            distance_to_px_scale: 0.1,
            max_blur_px: 40.0,
        }
    }
}

/// Build a single-layer model with one directional shadow.
pub fn build_shadow_effect(params: &ShadowParams, config: &ShadowBuilderConfig) -> TextEffectModel {
    let radians = params.angle.to_radians();
    let offset = params.distance * config.distance_to_px_scale;

    let shadow = Shadow::new(
        radians.cos() * offset,
        radians.sin() * offset,
        slider_to_blur_px(params.blur, config.max_blur_px),
        params.color.clone(),
    )
    .with_opacity(transparency_to_opacity(params.transparency));

    create_default_text_effect(EffectOverrides {
        name: Some("Shadow".to_string()),
        shadows: Some(vec![shadow]),
        ..Default::default()
    })
}
