//! Color parsing, interpolation and formatting
//!
//! Hex and rgba text parse into a [`Color`]; colors format back out as hex, rgba
//! or a placeholder oklch. Palettes are sampled evenly along the straight line
//! between two colors in rgba space.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use wordhue_types::{Color, ColorFormat, ColorString};

use crate::random::RandomSource;

pub type ColorResult<T> = Result<T, ColorError>;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ColorError {
    #[error("Invalid hex color '{0}', expected '#' followed by 6 hex digits")]
    InvalidHex(String),

    #[error("Invalid rgba color '{0}', expected rgba(<r>,<g>,<b>,<a>) without spaces")]
    InvalidRgba(String),

    #[error("Color '{0}' is out of range, r/g/b must be 0-255 and alpha 0-1")]
    OutOfRange(String),

    #[error("Unsupported input color '{0}', only hex and rgba colors can be parsed")]
    UnsupportedInput(String),

    #[error("A palette needs at least one point")]
    EmptyPalette,
}

static RGBA_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba\((\d+),(\d+),(\d+),(\d+(?:\.\d*)?|\.\d+)\)$").unwrap()
});

// fixed by the placeholder oklch conversion
const PLACEHOLDER_CHROMA: f64 = 0.2;
const PLACEHOLDER_HUE: u32 = 200;

/// Parses hex or rgba text, picking the format from the prefix
pub fn parse_color(text: &str) -> ColorResult<Color> {
    if text.starts_with('#') {
        parse_hex(text)
    } else if text.starts_with("rgba") {
        parse_rgba(text)
    } else {
        Err(ColorError::UnsupportedInput(text.to_string()))
    }
}

/// Parses text that must be in the given format
pub fn parse_color_as(text: &str, format: ColorFormat) -> ColorResult<Color> {
    match format {
        ColorFormat::Hex => parse_hex(text),
        ColorFormat::Rgba => parse_rgba(text),
        ColorFormat::Oklch => Err(ColorError::UnsupportedInput(text.to_string())),
    }
}

fn parse_hex(text: &str) -> ColorResult<Color> {
    let invalid = || ColorError::InvalidHex(text.to_string());

    let digits = text.strip_prefix('#').ok_or_else(invalid)?;
    // checked up front: from_str_radix would also accept a leading '+'
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

    Ok(Color::opaque(channel(0)?, channel(2)?, channel(4)?))
}

fn parse_rgba(text: &str) -> ColorResult<Color> {
    let captures = RGBA_REGEX
        .captures(text)
        .ok_or_else(|| ColorError::InvalidRgba(text.to_string()))?;

    let out_of_range = || ColorError::OutOfRange(text.to_string());
    let channel = |i: usize| captures[i].parse::<u8>().map_err(|_| out_of_range());

    let (r, g, b) = (channel(1)?, channel(2)?, channel(3)?);
    let a = captures[4]
        .parse::<f64>()
        .map_err(|_| ColorError::InvalidRgba(text.to_string()))?;

    if !(0.0..=1.0).contains(&a) {
        return Err(out_of_range());
    }

    Ok(Color::new(r, g, b, a))
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    lerp(a as f64, b as f64, t).round().clamp(0.0, 255.0) as u8
}

/// The color at `t` along the line from `from` to `to`, `t` is clamped into `[0, 1]`
///
/// Channels round to the nearest integer and alpha to two decimals.
pub fn interpolate(from: Color, to: Color, t: f64) -> Color {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    Color {
        r: lerp_channel(from.r, to.r, t),
        g: lerp_channel(from.g, to.g, t),
        b: lerp_channel(from.b, to.b, t),
        a: round_to(lerp(from.a, to.a, t), 2).clamp(0.0, 1.0),
    }
}

/// `count` evenly spaced colors from `from` to `to`, both ends included verbatim
///
/// A single point palette is just `[from]`.
pub fn generate_palette(from: Color, to: Color, count: usize) -> ColorResult<Vec<Color>> {
    if count == 0 {
        return Err(ColorError::EmptyPalette);
    }

    let last = count - 1;

    Ok((0..count)
        .map(|i| match i {
            0 => from,
            i if i == last => to,
            i => interpolate(from, to, i as f64 / last as f64),
        })
        .collect())
}

pub fn format_color(color: &Color, format: ColorFormat) -> ColorString {
    let [r, g, b] = color.channels();

    let s = match format {
        ColorFormat::Hex => format!("#{:02x}{:02x}{:02x}", r, g, b),
        ColorFormat::Rgba => format!("rgba({},{},{},{})", r, g, b, color.a),
        ColorFormat::Oklch => {
            // not a real conversion: lightness is a scaled channel sum, chroma and hue are fixed
            let lightness = ((r as u32 + g as u32 + b as u32) as f64 / 7.65).round();
            format!(
                "oklch({}% {} {})",
                lightness, PLACEHOLDER_CHROMA, PLACEHOLDER_HUE
            )
        }
    };

    ColorString::new(s)
}

pub fn random_format(rng: &dyn RandomSource) -> ColorFormat {
    ColorFormat::ALL[rng.random_index(ColorFormat::ALL.len())]
}

/// A random color usable as a palette endpoint
///
/// Hex colors are a random 24-bit value with full alpha, everything else gets
/// random rgba channels and a two decimal alpha.
pub fn random_endpoint(format: ColorFormat, rng: &dyn RandomSource) -> Color {
    match format {
        ColorFormat::Hex => {
            let value = rng.random_int(0, 0xffffff);
            Color::opaque((value >> 16) as u8, (value >> 8) as u8, value as u8)
        }
        ColorFormat::Rgba | ColorFormat::Oklch => {
            let r = rng.random_int(0, 255) as u8;
            let g = rng.random_int(0, 255) as u8;
            let b = rng.random_int(0, 255) as u8;
            let a = round_to(rng.next_f64(), 2);
            Color::new(r, g, b, a)
        }
    }
}

/// A random color, generated directly in the requested representation
///
/// Random oklch values are drawn in oklch space (lightness 0-100%, chroma 0-0.4,
/// hue 0-360) and have nothing to do with the placeholder conversion in
/// [`format_color`].
pub fn random_color(format: ColorFormat, rng: &dyn RandomSource) -> ColorString {
    match format {
        ColorFormat::Hex | ColorFormat::Rgba => format_color(&random_endpoint(format, rng), format),
        ColorFormat::Oklch => {
            let l = round_to(rng.next_f64() * 100.0, 1);
            let c = round_to(rng.next_f64() * 0.4, 3);
            let h = round_to(rng.next_f64() * 360.0, 1);
            ColorString::new(format!("oklch({}% {} {})", l, c, h))
        }
    }
}
