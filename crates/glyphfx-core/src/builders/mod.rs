//! Builders mapping bounded UI control values onto text effect models.
//!
//! Every slider the editor exposes lives in a 0..100 range. The builders own
//! the mapping from those values into pixel units, so panels never need to
//! know the rendering backend's native units. Only opacity is clamped;
//! geometric inputs outside their documented range keep scaling linearly.

mod elevation;
mod glow;
mod outline;
mod shadow;

pub use elevation::{ElevationBuilderConfig, ElevationParams, build_elevation_effect};
pub use glow::{GlowBuilderConfig, GlowParams, build_glow_effect};
pub use outline::{OutlineBuilderConfig, OutlineParams, build_outline_effect};
pub use shadow::{ShadowBuilderConfig, ShadowParams, build_shadow_effect};

use serde::{Deserialize, Serialize};

/// Upper bound of every UI slider.
pub const SLIDER_MAX: f64 = 100.0;

/// Scaling constants for all builders, as loaded from a config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfigs {
    pub shadow: ShadowBuilderConfig,
    pub elevation: ElevationBuilderConfig,
    pub glow: GlowBuilderConfig,
    pub outline: OutlineBuilderConfig,
}

impl BuilderConfigs {
    /// Parse configs from JSON; missing sections and fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Map a 0..100 transparency slider to an opacity in 0..=1.
pub fn transparency_to_opacity(transparency: f64) -> f64 {
    (transparency / SLIDER_MAX).clamp(0.0, 1.0)
}

/// Map a 0..100 slider to whole pixels in 0..`max_px`.
pub fn slider_to_blur_px(value: f64, max_px: f64) -> f64 {
    (value / SLIDER_MAX * max_px).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparency_is_clamped() {
        assert_eq!(transparency_to_opacity(40.0), 0.4);
        assert_eq!(transparency_to_opacity(-10.0), 0.0);
        assert_eq!(transparency_to_opacity(250.0), 1.0);
    }

    #[test]
    fn test_blur_rounds_and_extends() {
        assert_eq!(slider_to_blur_px(50.0, 40.0), 20.0);
        assert_eq!(slider_to_blur_px(1.0, 40.0), 0.0);
        assert_eq!(slider_to_blur_px(2.0, 40.0), 1.0);
        // Beyond the slider range the mapping keeps going.
        assert_eq!(slider_to_blur_px(150.0, 40.0), 60.0);
    }

    #[test]
    fn test_configs_fill_missing_fields() {
        let configs = BuilderConfigs::from_json(r#"{"shadow":{"maxBlurPx":80}}"#).unwrap();
        assert_eq!(configs.shadow.max_blur_px, 80.0);
        assert_eq!(configs.shadow.distance_to_px_scale, 0.1);
        assert_eq!(configs.elevation, ElevationBuilderConfig::default());
    }
}
