//! Renderer trait abstraction.

use crate::instance::InstanceKey;
use glyphfx_core::model::TextEffectModel;
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Horizontal text alignment inside the layout box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlign {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAlign {
    /// SVG `text-anchor` keyword.
    pub fn anchor(self) -> &'static str {
        match self {
            TextAlign::Start => "start",
            TextAlign::Middle => "middle",
            TextAlign::End => "end",
        }
    }
}

/// Vertical text alignment inside the layout box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerticalAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// Font attributes of the text run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontAttributes {
    pub family: String,
    /// Font size in pixels.
    pub size: f64,
    /// CSS numeric weight (100..900).
    pub weight: u16,
    pub italic: bool,
    /// Extra spacing between glyphs in pixels.
    pub letter_spacing: f64,
}

impl Default for FontAttributes {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: Self::DEFAULT_SIZE,
            weight: 400,
            italic: false,
            letter_spacing: 0.0,
        }
    }
}

impl FontAttributes {
    pub const DEFAULT_SIZE: f64 = 32.0;

    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
            ..Default::default()
        }
    }

    pub fn with_weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }
}

/// Where and how the text run is laid out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextLayout {
    /// Top-left corner of the box in the host document.
    pub position: Point,
    /// Box size; also the viewport of the rendered fragment.
    pub size: Size,
    pub font: FontAttributes,
    pub align: TextAlign,
    pub vertical_align: VerticalAlign,
    /// Line height as a multiple of the font size.
    pub line_height: f64,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            size: Size::new(300.0, 100.0),
            font: FontAttributes::default(),
            align: TextAlign::default(),
            vertical_align: VerticalAlign::default(),
            line_height: Self::DEFAULT_LINE_HEIGHT,
        }
    }
}

impl TextLayout {
    pub const DEFAULT_LINE_HEIGHT: f64 = 1.2;

    /// Distance between consecutive baselines in pixels.
    pub fn line_advance(&self) -> f64 {
        self.font.size * self.line_height
    }

    /// Anchor x coordinate for the current alignment.
    pub fn anchor_x(&self) -> f64 {
        match self.align {
            TextAlign::Start => 0.0,
            TextAlign::Middle => self.size.width / 2.0,
            TextAlign::End => self.size.width,
        }
    }

    /// Midline y coordinate of each of `line_count` lines.
    pub fn line_midlines(&self, line_count: usize) -> Vec<f64> {
        let count = line_count.max(1);
        let advance = self.line_advance();
        let block = advance * (count - 1) as f64;
        let first = match self.vertical_align {
            VerticalAlign::Top => advance / 2.0,
            VerticalAlign::Middle => self.size.height / 2.0 - block / 2.0,
            VerticalAlign::Bottom => self.size.height - advance / 2.0 - block,
        };
        (0..count).map(|i| first + advance * i as f64).collect()
    }
}

/// Everything a backend needs for one render.
pub struct RenderContext<'a> {
    /// The effect to draw.
    pub model: &'a TextEffectModel,
    /// Text content; newlines start new lines.
    pub text: &'a str,
    /// Scope for generated identifiers.
    pub instance_key: &'a InstanceKey,
    pub layout: TextLayout,
}

impl<'a> RenderContext<'a> {
    /// Create a render context with a centered default layout of the given size.
    pub fn new(
        model: &'a TextEffectModel,
        text: &'a str,
        instance_key: &'a InstanceKey,
        size: Size,
    ) -> Self {
        Self {
            model,
            text,
            instance_key,
            layout: TextLayout {
                size,
                ..Default::default()
            },
        }
    }

    /// Replace the whole layout.
    pub fn with_layout(mut self, layout: TextLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the box position in the host document.
    pub fn with_position(mut self, position: Point) -> Self {
        self.layout.position = position;
        self
    }

    pub fn with_font(mut self, font: FontAttributes) -> Self {
        self.layout.font = font;
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.layout.align = align;
        self
    }

    pub fn with_vertical_align(mut self, vertical_align: VerticalAlign) -> Self {
        self.layout.vertical_align = vertical_align;
        self
    }

    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.layout.line_height = line_height;
        self
    }

    /// Text split into lines (at least one).
    pub fn lines(&self) -> Vec<&'a str> {
        self.text.split('\n').map(|l| l.trim_end_matches('\r')).collect()
    }
}

/// Trait for rendering backends.
///
/// Every backend consumes the same [`TextEffectModel`]; adding a backend
/// never touches the model or the builders. Rendering is pure: identical
/// contexts produce identical output.
pub trait EffectRenderer {
    type Output;

    /// Short backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// Render the context's model.
    fn render(&self, ctx: &RenderContext) -> Self::Output;
}
