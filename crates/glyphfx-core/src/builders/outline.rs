//! Outline: a stroked layer beneath a plain fill layer.

use super::SLIDER_MAX;
use crate::model::{EffectLayer, Fill, Stroke, StrokeAlign, TextEffectModel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineParams {
    /// 0..100.
    pub thickness: f64,
    /// Outline color.
    pub color: String,
    /// Glyph interior color.
    pub fill_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutlineBuilderConfig {
    /// Stroke width at thickness 100.
    pub max_width_px: f64,
}

impl Default for OutlineBuilderConfig {
    fn default() -> Self {
        Self { max_width_px: 12.0 }
    }
}

/// Build a two-layer model: outline at the bottom, fill on top.
pub fn build_outline_effect(params: &OutlineParams, config: &OutlineBuilderConfig) -> TextEffectModel {
    let width = params.thickness / SLIDER_MAX * config.max_width_px;

    let outline = EffectLayer {
        fill: Some(Fill::solid(params.fill_color.clone())),
        stroke: Some(Stroke::new(params.color.clone(), width).with_align(StrokeAlign::Outside)),
        ..Default::default()
    };
    let face = EffectLayer {
        fill: Some(Fill::solid(params.fill_color.clone())),
        stroke: None,
        ..Default::default()
    };

    TextEffectModel::from_layers(Some("Outline".to_string()), vec![outline, face])
}
