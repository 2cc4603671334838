//! Translucent color type for the drift-field renderer.
//!
//! The particle palette is built from translucent colors, so `Rgba` carries
//! an alpha channel as a first-class component. Components are `f64` in
//! [0, 1]; serde uses hex strings (`"#rrggbb"` opaque, `"#rrggbbaa"`
//! otherwise) for human-readable config files.

use crate::error::FieldError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// sRGB color with straight (non-premultiplied) alpha, components in [0, 1].
///
/// Hex round-trips have 8-bit quantization (1/255 precision loss), which is
/// acceptable since hex colors are inherently 8-bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Fully opaque color from 8-bit channel values.
    pub fn opaque(r: u8, g: u8, b: u8) -> Rgba {
        Rgba::translucent(r, g, b, 255)
    }

    /// Color from 8-bit channel values including alpha.
    ///
    /// Components built this way are 8-bit exact, so the hex serde
    /// representation round-trips without loss.
    pub fn translucent(r: u8, g: u8, b: u8, a: u8) -> Rgba {
        Rgba {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Returns the same color with `alpha` clamped to [0, 1].
    pub fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Parses `"#rrggbb"` or `"#rrggbbaa"` (leading `#` optional, case
    /// insensitive). A 6-digit color is opaque.
    ///
    /// Returns `FieldError::InvalidColor` for any other shape.
    pub fn from_hex(hex: &str) -> Result<Rgba, FieldError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        // Guard before slicing: byte-index slices below would panic on a
        // char boundary inside multi-byte input.
        if !hex.is_ascii() {
            return Err(FieldError::InvalidColor(
                "non-ASCII characters in hex color".to_string(),
            ));
        }
        if hex.len() != 6 && hex.len() != 8 {
            return Err(FieldError::InvalidColor(format!(
                "expected 6 or 8 hex digits, got {}",
                hex.len()
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| FieldError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        let r = channel(0..2, "red")?;
        let g = channel(2..4, "green")?;
        let b = channel(4..6, "blue")?;
        let a = if hex.len() == 8 {
            channel(6..8, "alpha")?
        } else {
            255
        };
        Ok(Rgba {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        })
    }

    /// Formats as `"#rrggbb"` when fully opaque, `"#rrggbbaa"` otherwise.
    ///
    /// Components are quantized to 8-bit with rounding.
    pub fn to_hex(self) -> String {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (q(self.r), q(self.g), q(self.b), q(self.a));
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgba::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
