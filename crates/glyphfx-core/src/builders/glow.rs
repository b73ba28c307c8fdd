//! Centered glow.

use super::{slider_to_blur_px, transparency_to_opacity};
use crate::model::{EffectOverrides, Glow, TextEffectModel, create_default_text_effect};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlowParams {
    /// 0..100, glow radius.
    pub size: f64,
    /// 0..100, where 100 is fully opaque.
    pub transparency: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlowBuilderConfig {
    /// Blur at size 100.
    pub max_blur_px: f64,
}

impl Default for GlowBuilderConfig {
    fn default() -> Self {
        Self { max_blur_px: 30.0 }
    }
}

pub fn build_glow_effect(params: &GlowParams, config: &GlowBuilderConfig) -> TextEffectModel {
    let mut glow = Glow::new(
        params.color.clone(),
        slider_to_blur_px(params.size, config.max_blur_px),
    );
    glow.opacity = transparency_to_opacity(params.transparency);

    create_default_text_effect(EffectOverrides {
        name: Some("Glow".to_string()),
        glow: Some(glow),
        ..Default::default()
    })
}
