//! SVG backend.
//!
//! Produces one self-contained `<svg>` fragment per render. Each model layer
//! becomes a `<g>` carrying the layer's blend mode and opacity, drawn in
//! array order so the first layer ends up at the bottom. Gradients, shadow
//! filters and clip paths go into a shared `<defs>` block with identifiers
//! scoped to the caller's instance key.

use crate::markup::{escape_xml, num};
use crate::renderer::{EffectRenderer, RenderContext};
use glyphfx_core::model::{
    ColorStop, EffectLayer, Fill, Shadow, Stroke, StrokeAlign, resolved_offsets,
};
use kurbo::{Point, Vec2};

/// Geometry of a linear gradient in object bounding box units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientLine {
    pub start: Point,
    pub end: Point,
}

/// Convert a gradient angle into a line through the center of the unit box.
///
/// 0° runs left to right, 90° top to bottom, 180° right to left and 270°
/// bottom to top (y grows downward).
pub fn gradient_line(angle_deg: f64) -> GradientLine {
    let center = Point::new(0.5, 0.5);
    let half = Vec2::from_angle(angle_deg.to_radians()) * 0.5;
    GradientLine {
        start: center - half,
        end: center + half,
    }
}

/// Vector renderer producing SVG markup.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    /// Filter region padding on every side, as a fraction of the text bounds.
    pub filter_padding: f64,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self {
            filter_padding: 0.5,
        }
    }

    pub fn with_filter_padding(mut self, padding: f64) -> Self {
        self.filter_padding = padding.max(0.0);
        self
    }

    /// Render one layer: definitions go to `defs`, the glyph group to `body`.
    fn render_layer(
        &self,
        ctx: &RenderContext,
        glyphs: &GlyphRun,
        index: usize,
        layer: &EffectLayer,
        defs: &mut String,
        body: &mut String,
    ) {
        let mut attrs = Vec::new();

        // 1. Fill
        match &layer.fill {
            Some(Fill::Solid { color, opacity }) => {
                attrs.push(("fill", escape_xml(color)));
                let opacity = opacity.clamp(0.0, 1.0);
                if opacity != 1.0 {
                    attrs.push(("fill-opacity", num(opacity)));
                }
            }
            Some(Fill::LinearGradient { angle, stops }) => {
                let id = ctx.instance_key.scoped_id(&format!("l{index}-fill"));
                defs.push_str(&linear_gradient_def(&id, *angle, stops));
                attrs.push(("fill", format!("url(#{id})")));
            }
            None => attrs.push(("fill", "none".to_string())),
        }

        // 2. Shadows, glow, inner shadows
        // Filters sit on the layer group, outside any clip on the text.
        let mut group_filter = String::new();
        if layer.has_filter_effects() {
            let id = ctx.instance_key.scoped_id(&format!("l{index}-fx"));
            defs.push_str(&self.filter_def(&id, layer));
            group_filter = format!(" filter=\"url(#{id})\"");
        }

        // 3. Stroke
        if let Some(stroke) = layer.visible_stroke() {
            attrs.extend(stroke_attrs(stroke));
            if stroke.align == StrokeAlign::Inside {
                let id = ctx.instance_key.scoped_id(&format!("l{index}-clip"));
                defs.push_str(&format!(
                    "<clipPath id=\"{id}\">{}</clipPath>",
                    glyphs.to_svg(&[])
                ));
                attrs.push(("clip-path", format!("url(#{id})")));
            }
        }

        // 4. Blend group
        body.push_str(&format!(
            "<g style=\"mix-blend-mode:{}\" opacity=\"{}\"{group_filter}>",
            layer.blend_mode.css_name(),
            num(layer.opacity.clamp(0.0, 1.0)),
        ));
        body.push_str(&glyphs.to_svg(&attrs));
        body.push_str("</g>");
    }

    /// One filter per layer; chains are merged back to front.
    fn filter_def(&self, id: &str, layer: &EffectLayer) -> String {
        let pad = self.filter_padding;
        let mut filter = format!(
            "<filter id=\"{id}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" color-interpolation-filters=\"sRGB\">",
            num(-pad),
            num(-pad),
            num(1.0 + 2.0 * pad),
            num(1.0 + 2.0 * pad),
        );
        let mut merge = Vec::new();

        for (i, shadow) in layer.shadows.iter().enumerate().filter(|(_, s)| s.enabled) {
            let result = format!("shadow{i}");
            filter.push_str(&drop_shadow_chain(shadow, &result));
            merge.push(result);
        }

        if let Some(glow) = layer.glow.as_ref().filter(|g| g.enabled) {
            let result = "glow".to_string();
            filter.push_str(&drop_shadow_chain(&glow.as_shadow(), &result));
            merge.push(result);
        }

        merge.push("SourceGraphic".to_string());

        for (i, shadow) in layer.inner_shadows.iter().enumerate().filter(|(_, s)| s.enabled) {
            let result = format!("inner{i}");
            filter.push_str(&inner_shadow_chain(shadow, &result));
            merge.push(result);
        }

        filter.push_str("<feMerge>");
        for node in &merge {
            filter.push_str(&format!("<feMergeNode in=\"{node}\"/>"));
        }
        filter.push_str("</feMerge></filter>");
        filter
    }
}

impl EffectRenderer for SvgRenderer {
    type Output = String;

    fn name(&self) -> &'static str {
        "svg"
    }

    fn render(&self, ctx: &RenderContext) -> String {
        let layout = &ctx.layout;
        let (width, height) = (num(layout.size.width), num(layout.size.height));

        let glyphs = GlyphRun::new(ctx);
        let mut defs = String::new();
        let mut body = String::new();
        for (index, layer) in ctx.model.layers.iter().enumerate() {
            self.render_layer(ctx, &glyphs, index, layer, &mut defs, &mut body);
        }

        log::trace!(
            "Rendered {} layer(s) for instance {:?} as SVG",
            ctx.model.layers.len(),
            ctx.instance_key.as_str()
        );

        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" x=\"{}\" y=\"{}\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" overflow=\"visible\">",
            num(layout.position.x),
            num(layout.position.y),
        );
        if !defs.is_empty() {
            svg.push_str("<defs>");
            svg.push_str(&defs);
            svg.push_str("</defs>");
        }
        svg.push_str(&body);
        svg.push_str("</svg>");
        svg
    }
}

/// Positioned text element shared by every layer of one render.
struct GlyphRun {
    /// Attributes common to the `<text>` element.
    base: String,
    /// Escaped content: plain text or `<tspan>` lines.
    content: String,
}

impl GlyphRun {
    fn new(ctx: &RenderContext) -> Self {
        let layout = &ctx.layout;
        let font = &layout.font;
        let x = num(layout.anchor_x());
        let lines = ctx.lines();
        let midlines = layout.line_midlines(lines.len());

        let mut base = format!(
            "font-family=\"{}\" font-size=\"{}\" font-weight=\"{}\"",
            escape_xml(&font.family),
            num(font.size),
            font.weight,
        );
        if font.italic {
            base.push_str(" font-style=\"italic\"");
        }
        if font.letter_spacing != 0.0 {
            base.push_str(&format!(" letter-spacing=\"{}\"", num(font.letter_spacing)));
        }
        base.push_str(&format!(
            " text-anchor=\"{}\" dominant-baseline=\"middle\"",
            layout.align.anchor()
        ));

        let content = if lines.len() == 1 {
            base.push_str(&format!(" x=\"{x}\" y=\"{}\"", num(midlines[0])));
            escape_xml(lines[0])
        } else {
            lines
                .iter()
                .zip(&midlines)
                .map(|(line, y)| format!("<tspan x=\"{x}\" y=\"{}\">{}</tspan>", num(*y), escape_xml(line)))
                .collect()
        };

        Self { base, content }
    }

    fn to_svg(&self, paint: &[(&str, String)]) -> String {
        let mut text = format!("<text {}", self.base);
        for (name, value) in paint {
            text.push_str(&format!(" {name}=\"{value}\""));
        }
        text.push('>');
        text.push_str(&self.content);
        text.push_str("</text>");
        text
    }
}

fn linear_gradient_def(id: &str, angle: f64, stops: &[ColorStop]) -> String {
    let line = gradient_line(angle);
    let mut def = format!(
        "<linearGradient id=\"{id}\" gradientUnits=\"objectBoundingBox\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\">",
        num(line.start.x),
        num(line.start.y),
        num(line.end.x),
        num(line.end.y),
    );
    for (stop, offset) in stops.iter().zip(resolved_offsets(stops)) {
        def.push_str(&format!(
            "<stop offset=\"{}\" stop-color=\"{}\"/>",
            num(offset),
            escape_xml(&stop.color)
        ));
    }
    def.push_str("</linearGradient>");
    def
}

fn stroke_attrs(stroke: &Stroke) -> Vec<(&'static str, String)> {
    let width = match stroke.align {
        StrokeAlign::Center => stroke.width,
        // Half of a doubled stroke is hidden by the fill or the clip.
        StrokeAlign::Inside | StrokeAlign::Outside => stroke.width * 2.0,
    };
    let mut attrs = vec![
        ("stroke", escape_xml(&stroke.color)),
        ("stroke-width", num(width)),
        ("stroke-opacity", num(stroke.opacity.clamp(0.0, 1.0))),
        ("stroke-linejoin", "round".to_string()),
    ];
    if stroke.align == StrokeAlign::Outside {
        attrs.push(("paint-order", "stroke".to_string()));
    }
    attrs
}

/// Optional spread step; positive dilates, negative erodes.
fn spread_primitive(input: &str, spread: Option<f64>, result: &str) -> Option<String> {
    let spread = spread.filter(|s| *s != 0.0)?;
    let operator = if spread > 0.0 { "dilate" } else { "erode" };
    Some(format!(
        "<feMorphology in=\"{input}\" operator=\"{operator}\" radius=\"{}\" result=\"{result}\"/>",
        num(spread.abs())
    ))
}

/// Blurred, offset, flooded silhouette behind the glyphs.
fn drop_shadow_chain(shadow: &Shadow, result: &str) -> String {
    let mut chain = String::new();
    let mut source = "SourceAlpha".to_string();
    if let Some(primitive) = spread_primitive(&source, shadow.spread, &format!("{result}-spread")) {
        chain.push_str(&primitive);
        source = format!("{result}-spread");
    }
    chain.push_str(&format!(
        "<feGaussianBlur in=\"{source}\" stdDeviation=\"{}\" result=\"{result}-blur\"/>",
        num(shadow.blur.max(0.0) / 2.0)
    ));
    chain.push_str(&format!(
        "<feOffset in=\"{result}-blur\" dx=\"{}\" dy=\"{}\" result=\"{result}-offset\"/>",
        num(shadow.x),
        num(shadow.y)
    ));
    chain.push_str(&flood_in(shadow, &format!("{result}-offset"), result));
    chain
}

/// Shadow cast inside the glyphs by the offset edge.
fn inner_shadow_chain(shadow: &Shadow, result: &str) -> String {
    let mut chain = String::new();
    let mut source = "SourceAlpha".to_string();
    // A positive spread chokes the silhouette, widening the inner shadow.
    if let Some(primitive) =
        spread_primitive(&source, shadow.spread.map(|s| -s), &format!("{result}-spread"))
    {
        chain.push_str(&primitive);
        source = format!("{result}-spread");
    }
    chain.push_str(&format!(
        "<feOffset in=\"{source}\" dx=\"{}\" dy=\"{}\" result=\"{result}-offset\"/>",
        num(shadow.x),
        num(shadow.y)
    ));
    chain.push_str(&format!(
        "<feGaussianBlur in=\"{result}-offset\" stdDeviation=\"{}\" result=\"{result}-blur\"/>",
        num(shadow.blur.max(0.0) / 2.0)
    ));
    chain.push_str(&format!(
        "<feComposite in=\"SourceAlpha\" in2=\"{result}-blur\" operator=\"out\" result=\"{result}-edge\"/>"
    ));
    chain.push_str(&flood_in(shadow, &format!("{result}-edge"), result));
    chain
}

/// Paint the shadow color through a mask.
fn flood_in(shadow: &Shadow, mask: &str, result: &str) -> String {
    format!(
        "<feFlood flood-color=\"{}\" flood-opacity=\"{}\" result=\"{result}-color\"/>\
         <feComposite in=\"{result}-color\" in2=\"{mask}\" operator=\"in\" result=\"{result}\"/>",
        escape_xml(&shadow.color),
        num(shadow.opacity.clamp(0.0, 1.0)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::InstanceKey;
    use crate::renderer::{FontAttributes, TextAlign};
    use glyphfx_core::model::{
        BlendMode, EffectOverrides, Glow, TextEffectModel, create_default_text_effect,
    };
    use glyphfx_core::{ShadowBuilderConfig, ShadowParams, build_shadow_effect};
    use kurbo::Size;

    fn render(model: &TextEffectModel, text: &str, key: &str) -> String {
        let key = InstanceKey::new(key);
        let ctx = RenderContext::new(model, text, &key, Size::new(400.0, 120.0));
        SvgRenderer::new().render(&ctx)
    }

    fn gradient_model(angle: f64) -> TextEffectModel {
        create_default_text_effect(EffectOverrides {
            fill: Some(
                Fill::linear_gradient(angle, vec![ColorStop::new("#ff0"), ColorStop::new("#f0f")])
                    .unwrap(),
            ),
            ..Default::default()
        })
    }

    fn assert_point(p: Point, x: f64, y: f64) {
        assert!((p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9, "{p:?} != ({x}, {y})");
    }

    #[test]
    fn test_gradient_line_cardinal_directions() {
        let right = gradient_line(0.0);
        assert_point(right.start, 0.0, 0.5);
        assert_point(right.end, 1.0, 0.5);

        let down = gradient_line(90.0);
        assert_point(down.start, 0.5, 0.0);
        assert_point(down.end, 0.5, 1.0);

        let left = gradient_line(180.0);
        assert_point(left.start, 1.0, 0.5);
        assert_point(left.end, 0.0, 0.5);

        let up = gradient_line(270.0);
        assert_point(up.start, 0.5, 1.0);
        assert_point(up.end, 0.5, 0.0);
    }

    #[test]
    fn test_gradient_line_is_continuous() {
        let diagonal = gradient_line(45.0);
        let h = std::f64::consts::FRAC_1_SQRT_2 / 2.0;
        assert_point(diagonal.start, 0.5 - h, 0.5 - h);
        assert_point(diagonal.end, 0.5 + h, 0.5 + h);

        let wrapped = gradient_line(-90.0);
        assert_point(wrapped.end, 0.5, 0.0);
    }

    #[test]
    fn test_default_model_markup() {
        let svg = render(&TextEffectModel::default(), "Spin", "w1");
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" x=\"0\" y=\"0\" width=\"400\" height=\"120\" viewBox=\"0 0 400 120\""));
        assert!(svg.contains("<g style=\"mix-blend-mode:normal\" opacity=\"1\">"));
        assert!(svg.contains("x=\"200\" y=\"60\" fill=\"#000000\">Spin</text>"));
        assert!(svg.contains("text-anchor=\"middle\" dominant-baseline=\"middle\""));
        assert!(!svg.contains("<defs>"));
        assert!(!svg.contains("stroke"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_gradient_fill_references_scoped_def() {
        let svg = render(&gradient_model(90.0), "Win", "card");
        assert!(svg.contains("<linearGradient id=\"te-card-l0-fill\" gradientUnits=\"objectBoundingBox\" x1=\"0.5\" y1=\"0\" x2=\"0.5\" y2=\"1\">"));
        assert!(svg.contains("<stop offset=\"0\" stop-color=\"#ff0\"/><stop offset=\"1\" stop-color=\"#f0f\"/>"));
        assert!(svg.contains("fill=\"url(#te-card-l0-fill)\""));
    }

    #[test]
    fn test_shadow_filter_keeps_order() {
        let model = create_default_text_effect(EffectOverrides {
            shadows: Some(vec![
                Shadow::new(1.0, 1.0, 2.0, "#111"),
                Shadow::new(4.0, 4.0, 8.0, "#222").with_opacity(0.5),
            ]),
            glow: Some(Glow::new("#0ff", 10.0)),
            inner_shadows: Some(vec![Shadow::new(0.0, 2.0, 2.0, "#333")]),
            ..Default::default()
        });
        let svg = render(&model, "Quiz", "q");
        assert!(svg.contains("<filter id=\"te-q-l0-fx\""));
        assert!(svg.contains("filter=\"url(#te-q-l0-fx)\""));
        assert!(svg.contains(
            "<feMerge><feMergeNode in=\"shadow0\"/><feMergeNode in=\"shadow1\"/><feMergeNode in=\"glow\"/><feMergeNode in=\"SourceGraphic\"/><feMergeNode in=\"inner0\"/></feMerge>"
        ));
        let first = svg.find("flood-color=\"#111\"").unwrap();
        let second = svg.find("flood-color=\"#222\"").unwrap();
        assert!(first < second);
        assert!(svg.contains("stdDeviation=\"4\" result=\"shadow1-blur\""));
        assert!(svg.contains("flood-opacity=\"0.5\""));
        assert!(svg.contains("operator=\"out\""));
    }

    #[test]
    fn test_disabled_shadows_emit_no_filter() {
        let mut shadow = Shadow::new(2.0, 2.0, 2.0, "#000");
        shadow.enabled = false;
        let model = create_default_text_effect(EffectOverrides {
            shadows: Some(vec![shadow]),
            ..Default::default()
        });
        let svg = render(&model, "x", "k");
        assert!(!svg.contains("<filter"));
        assert!(!svg.contains("filter="));
    }

    #[test]
    fn test_spread_uses_morphology() {
        let model = create_default_text_effect(EffectOverrides {
            shadows: Some(vec![
                Shadow::new(0.0, 0.0, 4.0, "#000").with_spread(2.0),
                Shadow::new(0.0, 0.0, 4.0, "#000").with_spread(-1.0),
            ]),
            ..Default::default()
        });
        let svg = render(&model, "x", "k");
        assert!(svg.contains("operator=\"dilate\" radius=\"2\" result=\"shadow0-spread\""));
        assert!(svg.contains("operator=\"erode\" radius=\"1\" result=\"shadow1-spread\""));
        assert!(svg.contains("<feGaussianBlur in=\"shadow0-spread\""));
    }

    #[test]
    fn test_invisible_stroke_is_omitted() {
        let zero_width = create_default_text_effect(EffectOverrides {
            stroke: Some(Stroke::new("#fff", 0.0)),
            ..Default::default()
        });
        let disabled = create_default_text_effect(EffectOverrides {
            stroke: Some(Stroke {
                enabled: false,
                ..Stroke::new("#fff", 3.0)
            }),
            ..Default::default()
        });
        for model in [zero_width, disabled] {
            let svg = render(&model, "x", "k");
            assert!(!svg.contains("stroke"), "{svg}");
        }
    }

    #[test]
    fn test_stroke_alignment() {
        let stroke = |align: StrokeAlign| {
            create_default_text_effect(EffectOverrides {
                stroke: Some(Stroke::new("#fff", 3.0).with_align(align)),
                ..Default::default()
            })
        };

        let center = render(&stroke(StrokeAlign::Center), "x", "k");
        assert!(center.contains("stroke=\"#fff\" stroke-width=\"3\" stroke-opacity=\"1\" stroke-linejoin=\"round\""));
        assert!(!center.contains("paint-order"));

        let outside = render(&stroke(StrokeAlign::Outside), "x", "k");
        assert!(outside.contains("stroke-width=\"6\""));
        assert!(outside.contains("paint-order=\"stroke\""));

        let inside = render(&stroke(StrokeAlign::Inside), "x", "k");
        assert!(inside.contains("<clipPath id=\"te-k-l0-clip\"><text "));
        assert!(inside.contains("clip-path=\"url(#te-k-l0-clip)\""));
    }

    #[test]
    fn test_inside_stroke_keeps_shadows_outside_clip() {
        let model = create_default_text_effect(EffectOverrides {
            stroke: Some(Stroke::new("#fff", 2.0).with_align(StrokeAlign::Inside)),
            shadows: Some(vec![Shadow::new(3.0, 3.0, 4.0, "#000")]),
            ..Default::default()
        });
        let svg = render(&model, "x", "k");
        assert!(svg.contains(
            "<g style=\"mix-blend-mode:normal\" opacity=\"1\" filter=\"url(#te-k-l0-fx)\"><text "
        ));

        let body = &svg[svg.find("</defs>").unwrap()..];
        let text = &body[body.find("<text ").unwrap()..body.find("</text>").unwrap()];
        assert!(text.contains("clip-path=\"url(#te-k-l0-clip)\""));
        assert!(!text.contains("filter="));
    }

    #[test]
    fn test_fill_opacity_is_clamped() {
        let fill = |opacity: f64| {
            create_default_text_effect(EffectOverrides {
                fill: Some(Fill::Solid {
                    color: "#f00".to_string(),
                    opacity,
                }),
                ..Default::default()
            })
        };
        assert!(!render(&fill(1.5), "x", "k").contains("fill-opacity"));
        assert!(render(&fill(-0.5), "x", "k").contains("fill-opacity=\"0\""));
        assert!(render(&fill(0.25), "x", "k").contains("fill-opacity=\"0.25\""));
    }

    #[test]
    fn test_layers_render_bottom_to_top() {
        let model = TextEffectModel::from_layers(
            None,
            vec![
                EffectLayer {
                    fill: Some(Fill::solid("#bottom")),
                    ..Default::default()
                },
                EffectLayer {
                    fill: Some(Fill::solid("#top")),
                    blend_mode: BlendMode::Multiply,
                    opacity: 0.25,
                    ..Default::default()
                },
            ],
        );
        let svg = render(&model, "x", "k");
        let bottom = svg.find("#bottom").unwrap();
        let top = svg.find("#top").unwrap();
        assert!(bottom < top);
        assert!(svg.contains("<g style=\"mix-blend-mode:multiply\" opacity=\"0.25\">"));
    }

    #[test]
    fn test_multi_line_and_escaping() {
        let key = InstanceKey::new("k");
        let model = TextEffectModel::default();
        let ctx = RenderContext::new(&model, "Win\n<big> & more", &key, Size::new(200.0, 100.0))
            .with_font(FontAttributes::new("Bebas \"Neue\"", 20.0).with_weight(700).with_italic(true))
            .with_align(TextAlign::Start);
        let svg = SvgRenderer::new().render(&ctx);
        assert!(svg.contains("font-family=\"Bebas &quot;Neue&quot;\" font-size=\"20\" font-weight=\"700\" font-style=\"italic\""));
        assert!(svg.contains("text-anchor=\"start\""));
        assert!(svg.contains("<tspan x=\"0\" y=\"38\">Win</tspan><tspan x=\"0\" y=\"62\">&lt;big&gt; &amp; more</tspan>"));
    }

    #[test]
    fn test_position_is_emitted() {
        let key = InstanceKey::new("k");
        let model = TextEffectModel::default();
        let ctx = RenderContext::new(&model, "x", &key, Size::new(10.0, 10.0))
            .with_position(Point::new(12.5, -4.0));
        let svg = SvgRenderer::new().render(&ctx);
        assert!(svg.contains("x=\"12.5\" y=\"-4\" width=\"10\""));
    }

    #[test]
    fn test_render_is_deterministic() {
        let model = build_shadow_effect(
            &ShadowParams {
                distance: 50.0,
                angle: -45.0,
                blur: 30.0,
                transparency: 40.0,
                color: "#000000".to_string(),
            },
            &ShadowBuilderConfig::default(),
        );
        let a = render(&model, "Scratch & win", "scratch-1");
        let b = render(&model, "Scratch & win", "scratch-1");
        assert_eq!(a, b);
        assert!(a.contains("dx=\"3.536\" dy=\"-3.536\""));
    }

    #[test]
    fn test_distinct_keys_never_share_ids() {
        let model = TextEffectModel::from_layers(
            None,
            vec![
                EffectLayer {
                    fill: gradient_model(30.0).layers[0].fill.clone(),
                    shadows: vec![Shadow::new(1.0, 1.0, 1.0, "#000")],
                    stroke: Some(Stroke::new("#fff", 2.0).with_align(StrokeAlign::Inside)),
                    ..Default::default()
                },
                EffectLayer::default(),
            ],
        );
        let a = render(&model, "x", "card-1");
        let b = render(&model, "x", "card-11");

        let ids = |svg: &str| -> Vec<String> {
            svg.split("id=\"")
                .skip(1)
                .filter_map(|rest| rest.split('"').next())
                .map(str::to_string)
                .collect()
        };
        let ids_a = ids(&a);
        let ids_b = ids(&b);
        assert_eq!(ids_a.len(), 3);
        for id in &ids_a {
            assert!(!b.contains(id.as_str()), "{id} leaked into second render");
        }
        for id in &ids_b {
            assert!(!a.contains(id.as_str()), "{id} leaked into first render");
        }
    }
}
