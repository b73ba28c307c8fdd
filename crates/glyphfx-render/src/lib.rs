//! glyphfx Render Library
//!
//! Renderer abstraction and backends for glyphfx text effects.
//! The SVG backend is the reference vector renderer; the CSS backend maps
//! the same model onto inline styles.

mod css;
mod instance;
mod markup;
mod renderer;
mod svg;

pub use css::{CssLayer, CssOutput, CssRenderer, css_angle};
pub use instance::InstanceKey;
pub use renderer::{EffectRenderer, FontAttributes, RenderContext, TextAlign, TextLayout, VerticalAlign};
pub use svg::{GradientLine, SvgRenderer, gradient_line};
