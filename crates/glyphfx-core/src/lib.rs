//! glyphfx Core Library
//!
//! Renderer-agnostic text effect model, the builders that turn UI slider
//! values into models, and the migrator for legacy flat style bags.

pub mod builders;
pub mod error;
pub mod migrate;
pub mod model;

pub use builders::{
    BuilderConfigs, ElevationBuilderConfig, ElevationParams, GlowBuilderConfig, GlowParams,
    OutlineBuilderConfig, OutlineParams, ShadowBuilderConfig, ShadowParams, build_elevation_effect,
    build_glow_effect, build_outline_effect, build_shadow_effect,
};
pub use error::{EffectError, EffectResult};
pub use migrate::migrate_css_to_text_effect;
pub use model::{
    BlendMode, ColorStop, EffectLayer, EffectOverrides, Fill, Glow, InnerShadow, MODEL_VERSION,
    Shadow, Stroke, StrokeAlign, TextEffectModel, create_default_text_effect,
};
