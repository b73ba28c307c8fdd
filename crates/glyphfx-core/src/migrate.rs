//! Migration from the legacy flat style bag.
//!
//! Older presets stored text styling as an untyped map of CSS-like
//! properties (`color`, `backgroundImage`, `WebkitTextStroke`,
//! `textShadow`, ...). [`migrate_css_to_text_effect`] salvages whatever it
//! can from such a map into a [`TextEffectModel`]. It never fails: each
//! property that does not parse is dropped on its own and the result always
//! holds exactly one layer with a fill.

use crate::model::{BlendMode, ColorStop, EffectLayer, Fill, Shadow, Stroke, TextEffectModel};
use log::debug;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// Model gradient angle used when the shorthand does not start with one.
///
/// Matches the CSS default direction, `to bottom`.
pub const DEFAULT_GRADIENT_ANGLE: f64 = 90.0;

const FILL_COLOR_KEYS: &[&str] = &["color"];
const GRADIENT_KEYS: &[&str] = &["backgroundImage", "background"];
const STROKE_KEYS: &[&str] = &["WebkitTextStroke", "webkitTextStroke", "textStroke"];
const SHADOW_KEYS: &[&str] = &["textShadow"];
const OPACITY_KEYS: &[&str] = &["opacity"];
const BLEND_KEYS: &[&str] = &["mixBlendMode"];

static GRADIENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)^\s*linear-gradient\(\s*(.*)\)\s*$").expect("gradient pattern is valid")
});

static STOP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)(?:\s+(-?\d*\.?\d+)%)?$").expect("stop pattern is valid")
});

static STROKE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d*\.?\d+)px\s+(.+?)\s*$").expect("stroke pattern is valid")
});

static SHADOW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(-?\d*\.?\d+)px\s+(-?\d*\.?\d+)px\s+(\d*\.?\d+)px\s+(.+?)\s*$")
        .expect("shadow pattern is valid")
});

/// Convert a legacy style bag into a single-layer text effect.
pub fn migrate_css_to_text_effect(style: &Value) -> TextEffectModel {
    let Some(props) = style.as_object() else {
        debug!("Legacy style is not an object, using default effect");
        return TextEffectModel::default();
    };

    let fill = string_prop(props, GRADIENT_KEYS)
        .and_then(parse_linear_gradient)
        .or_else(|| string_prop(props, FILL_COLOR_KEYS).map(Fill::solid))
        .unwrap_or_else(Fill::black);

    let stroke = string_prop(props, STROKE_KEYS).and_then(parse_stroke);

    let shadows = string_prop(props, SHADOW_KEYS)
        .map(parse_shadow_list)
        .unwrap_or_default();

    let opacity = OPACITY_KEYS
        .iter()
        .find_map(|key| props.get(*key).and_then(number_value))
        .map(|o| o.clamp(0.0, 1.0))
        .unwrap_or(1.0);

    let blend_mode = string_prop(props, BLEND_KEYS)
        .and_then(|name| {
            let mode = BlendMode::from_css_name(name);
            if mode.is_none() {
                debug!("Unknown blend mode {name:?}, using normal");
            }
            mode
        })
        .unwrap_or_default();

    let layer = EffectLayer {
        fill: Some(fill),
        stroke,
        shadows,
        inner_shadows: Vec::new(),
        glow: None,
        blend_mode,
        opacity,
    };

    TextEffectModel::from_layers(None, vec![layer])
}

/// First non-empty string value among `keys`.
fn string_prop<'a>(props: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| props.get(*key).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|s| !s.is_empty())
}

/// A finite number, from a JSON number or a numeric string.
fn number_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Parse `linear-gradient(<angle>, <stop>, <stop>, ...)`.
///
/// The CSS direction is converted to the model's angle convention. Returns
/// `None` unless at least two stops parse.
fn parse_linear_gradient(input: &str) -> Option<Fill> {
    let inner = GRADIENT_RE.captures(input)?.get(1)?.as_str();
    let parts = split_top_level(inner);
    let Some(first) = parts.first() else {
        debug!("Empty gradient shorthand: {input:?}");
        return None;
    };

    let direction = first.trim().to_ascii_lowercase();
    let (angle, stop_parts) = if let Some(css_deg) = parse_css_angle(&direction) {
        (css_to_model_angle(css_deg), &parts[1..])
    } else if let Some(side) = direction.strip_prefix("to ") {
        let angle = direction_keyword(side).map(css_to_model_angle).unwrap_or_else(|| {
            debug!("Unknown gradient direction {first:?}, using default");
            DEFAULT_GRADIENT_ANGLE
        });
        (angle, &parts[1..])
    } else {
        (DEFAULT_GRADIENT_ANGLE, &parts[..])
    };

    let stops: Vec<ColorStop> = stop_parts.iter().filter_map(|part| parse_color_stop(part)).collect();

    match Fill::linear_gradient(angle, stops) {
        Ok(fill) => Some(fill),
        Err(e) => {
            debug!("Discarding gradient {input:?}: {e}");
            None
        }
    }
}

/// Parse `<color> [<percent>%]`.
fn parse_color_stop(part: &str) -> Option<ColorStop> {
    let caps = STOP_RE.captures(part.trim())?;
    let color = caps.get(1)?.as_str().trim();
    if color.is_empty() {
        return None;
    }
    let offset = caps
        .get(2)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .map(|pct| pct / 100.0);
    Some(ColorStop {
        color: color.to_string(),
        offset,
    })
}

/// Split on commas outside parentheses.
fn split_top_level(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;

    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = (depth - 1).max(0),
            ',' if depth == 0 => {
                parts.push(input[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(input[start..].trim());
    parts.retain(|p| !p.is_empty());
    parts
}

/// Parse `<width>px <color>`. A non-matching value means no stroke.
fn parse_stroke(input: &str) -> Option<Stroke> {
    let Some(caps) = STROKE_RE.captures(input) else {
        debug!("Stroke shorthand {input:?} not recognised, omitting stroke");
        return None;
    };
    let width: f64 = caps[1].parse().ok()?;
    let mut stroke = Stroke::new(&caps[2], width);
    stroke.enabled = width > 0.0;
    Some(stroke)
}

/// Parse a comma-separated `textShadow` list, dropping bad segments.
fn parse_shadow_list(input: &str) -> Vec<Shadow> {
    split_shadow_segments(input)
        .into_iter()
        .filter_map(|segment| {
            let shadow = parse_shadow_segment(segment);
            if shadow.is_none() {
                debug!("Dropping shadow segment {segment:?}");
            }
            shadow
        })
        .collect()
}

/// Split a shadow list using the legacy rule: a comma separates segments
/// unless a `)` follows it before any `(`.
///
/// Color functions whose own arguments contain a nested `(` after a comma,
/// such as `rgb(0, calc(10), 0)`, are split in the wrong place.
fn split_shadow_segments(input: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;

    for (i, c) in input.char_indices() {
        if c == ',' && !closes_before_opening(&input[i + 1..]) {
            segments.push(&input[start..i]);
            start = i + 1;
        }
    }
    segments.push(&input[start..]);
    segments
}

fn closes_before_opening(rest: &str) -> bool {
    rest.chars().find(|c| matches!(c, '(' | ')')) == Some(')')
}

/// CSS angles run clockwise from "up"; model angles from "right".
fn css_to_model_angle(css_deg: f64) -> f64 {
    (css_deg - 90.0).rem_euclid(360.0)
}

/// Parse a CSS `<angle>` (`deg`, `turn`, `grad`, `rad`) into CSS degrees.
fn parse_css_angle(input: &str) -> Option<f64> {
    let parse = |value: &str| value.trim().parse::<f64>().ok().filter(|v| v.is_finite());

    if let Some(deg) = input.strip_suffix("deg") {
        return parse(deg);
    }
    if let Some(turn) = input.strip_suffix("turn") {
        return parse(turn).map(|t| t * 360.0);
    }
    // Before `rad`, which is also a suffix of `grad`.
    if let Some(grad) = input.strip_suffix("grad") {
        return parse(grad).map(|g| g * 0.9);
    }
    if let Some(rad) = input.strip_suffix("rad") {
        return parse(rad).map(f64::to_degrees);
    }
    None
}

/// CSS degrees for a `to <side-or-corner>` keyword.
fn direction_keyword(side: &str) -> Option<f64> {
    let angle = match side.split_whitespace().collect::<Vec<_>>().as_slice() {
        ["top"] => 0.0,
        ["right"] => 90.0,
        ["bottom"] => 180.0,
        ["left"] => 270.0,
        ["top", "right"] | ["right", "top"] => 45.0,
        ["bottom", "right"] | ["right", "bottom"] => 135.0,
        ["bottom", "left"] | ["left", "bottom"] => 225.0,
        ["top", "left"] | ["left", "top"] => 315.0,
        _ => return None,
    };
    Some(angle)
}

/// Parse `<x>px <y>px <blur>px <color>`.
fn parse_shadow_segment(segment: &str) -> Option<Shadow> {
    let caps = SHADOW_RE.captures(segment)?;
    let x = caps[1].parse().ok()?;
    let y = caps[2].parse().ok()?;
    let blur = caps[3].parse().ok()?;
    Some(Shadow::new(x, y, blur, &caps[4]))
}
