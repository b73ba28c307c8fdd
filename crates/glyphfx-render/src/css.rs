//! CSS backend.
//!
//! Maps each layer onto inline style declarations for HTML text. CSS has
//! no inner shadows and no shadow spread for text, so those are skipped.

use crate::markup::num;
use crate::renderer::{EffectRenderer, RenderContext};
use glyphfx_core::model::{EffectLayer, Fill, Shadow, StrokeAlign, resolved_offsets};

/// Declarations for one layer, in emission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CssLayer {
    pub declarations: Vec<(String, String)>,
}

impl CssLayer {
    fn push(&mut self, property: &str, value: impl Into<String>) {
        self.declarations.push((property.to_string(), value.into()));
    }

    /// Look up a property value.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Format as an inline `style` attribute value.
    pub fn to_inline(&self) -> String {
        self.declarations
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One entry per model layer, bottom to top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CssOutput {
    pub layers: Vec<CssLayer>,
}

/// Style-sheet renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssRenderer;

impl CssRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_layer(&self, layer: &EffectLayer) -> CssLayer {
        let mut css = CssLayer::default();

        match &layer.fill {
            Some(Fill::Solid { color, opacity }) => css.push("color", with_opacity(color, *opacity)),
            Some(Fill::LinearGradient { angle, stops }) => {
                let stops: Vec<String> = stops
                    .iter()
                    .zip(resolved_offsets(stops))
                    .map(|(stop, offset)| format!("{} {}%", stop.color, num(offset * 100.0)))
                    .collect();
                css.push(
                    "background-image",
                    format!("linear-gradient({}deg, {})", num(css_angle(*angle)), stops.join(", ")),
                );
                css.push("background-clip", "text");
                css.push("-webkit-background-clip", "text");
                css.push("color", "transparent");
            }
            None => css.push("color", "transparent"),
        }

        if let Some(stroke) = layer.visible_stroke() {
            let width = match stroke.align {
                StrokeAlign::Outside => stroke.width * 2.0,
                StrokeAlign::Center | StrokeAlign::Inside => stroke.width,
            };
            css.push(
                "-webkit-text-stroke",
                format!("{}px {}", num(width), with_opacity(&stroke.color, stroke.opacity)),
            );
            if stroke.align == StrokeAlign::Outside {
                css.push("paint-order", "stroke fill");
            }
        }

        // Back-to-front model order; CSS paints the first shadow on top.
        let mut shadows: Vec<Shadow> = layer.shadows.iter().filter(|s| s.enabled).cloned().collect();
        if let Some(glow) = layer.glow.as_ref().filter(|g| g.enabled) {
            shadows.push(glow.as_shadow());
        }
        if !shadows.is_empty() {
            let list: Vec<String> = shadows.iter().rev().map(text_shadow).collect();
            css.push("text-shadow", list.join(", "));
        }
        if layer.inner_shadows.iter().any(|s| s.enabled) {
            log::debug!("Inner shadows have no CSS equivalent, skipping");
        }

        css.push("mix-blend-mode", layer.blend_mode.css_name());
        css.push("opacity", num(layer.opacity.clamp(0.0, 1.0)));
        css
    }
}

impl EffectRenderer for CssRenderer {
    type Output = CssOutput;

    fn name(&self) -> &'static str {
        "css"
    }

    fn render(&self, ctx: &RenderContext) -> CssOutput {
        log::trace!(
            "Rendering {} layer(s) for instance {:?} as CSS",
            ctx.model.layers.len(),
            ctx.instance_key.as_str()
        );
        CssOutput {
            layers: ctx.model.layers.iter().map(|layer| self.render_layer(layer)).collect(),
        }
    }
}

/// Model angles start at "right"; CSS angles start at "up".
pub fn css_angle(angle_deg: f64) -> f64 {
    (angle_deg + 90.0).rem_euclid(360.0)
}

fn text_shadow(shadow: &Shadow) -> String {
    format!(
        "{}px {}px {}px {}",
        num(shadow.x),
        num(shadow.y),
        num(shadow.blur.max(0.0)),
        with_opacity(&shadow.color, shadow.opacity)
    )
}

/// Fold an opacity into a color string without parsing it.
fn with_opacity(color: &str, opacity: f64) -> String {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity >= 1.0 {
        color.to_string()
    } else {
        format!("color-mix(in srgb, {color} {}%, transparent)", num(opacity * 100.0))
    }
}
