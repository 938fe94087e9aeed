use std::{fmt, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A color with 8-bit red, green and blue channels and a fractional alpha in `[0, 1]`
///
/// This is the canonical representation: every textual form is parsed into it
/// and serialized out of it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, ToSchema)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Alpha is clamped into `[0, 1]`, NaN becomes fully opaque
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        let a = if a.is_nan() { 1.0 } else { a.clamp(0.0, 1.0) };
        Self { r, g, b, a }
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ColorFormatError {
    #[error("Unknown color format '{0}', expected one of: hex, rgba, oklch")]
    Unknown(String),
}

/// Selects the textual serialization of a [`Color`]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    #[default]
    Rgba,
    Oklch,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 3] = [ColorFormat::Hex, ColorFormat::Rgba, ColorFormat::Oklch];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgba => "rgba",
            ColorFormat::Oklch => "oklch",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(ColorFormat::Hex),
            "rgba" => Ok(ColorFormat::Rgba),
            "oklch" => Ok(ColorFormat::Oklch),
            _ => Err(ColorFormatError::Unknown(s.to_string())),
        }
    }
}

/// A color serialized as text, e.g. `#aabbcc`, `rgba(10,20,30,0.5)` or `oklch(50% 0.2 200)`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, example = "rgba(10,20,30,1)")]
pub struct ColorString(String);

impl ColorString {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for ColorString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for ColorString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ColorString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ColorString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
