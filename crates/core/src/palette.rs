//! Discrete palette of translucent particle colors.
//!
//! Unlike a gradient palette, particles sample colors uniformly at random at
//! creation time and keep them for life, so the palette is a plain list of
//! stops with no interpolation.

use crate::color::Rgba;
use crate::error::FieldError;
use crate::prng::SplitMix64;
use serde::{Deserialize, Serialize};

/// An ordered list of color stops sampled uniformly at random.
///
/// Serializes as a list of hex strings. A valid palette always has at
/// least one stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rgba>", into = "Vec<Rgba>")]
pub struct Palette {
    stops: Vec<Rgba>,
}

impl Palette {
    /// Creates a palette from a vector of colors.
    ///
    /// Requires at least one color.
    pub fn new(stops: Vec<Rgba>) -> Result<Self, FieldError> {
        if stops.is_empty() {
            return Err(FieldError::InvalidPalette(
                "palette requires at least 1 color".to_string(),
            ));
        }
        Ok(Self { stops })
    }

    /// Creates a palette by parsing hex color strings.
    ///
    /// Each string can be `"#rrggbb"` or `"#rrggbbaa"` (case insensitive,
    /// leading `#` optional). Requires at least one color.
    pub fn from_hex(hexes: &[&str]) -> Result<Self, FieldError> {
        let stops: Result<Vec<Rgba>, FieldError> =
            hexes.iter().map(|h| Rgba::from_hex(h)).collect();
        Self::new(stops?)
    }

    /// The stock 5-stop ambient palette: two sage greens, two deep teals,
    /// and a faint white, all translucent.
    ///
    /// Alphas are quantized to 8-bit (0.4 -> 102, 0.35 -> 89, 0.2 -> 51,
    /// 0.1 -> 26) so the hex serde form round-trips exactly.
    pub fn ambient() -> Self {
        Self {
            stops: vec![
                Rgba::translucent(150, 191, 138, 102),
                Rgba::translucent(3, 90, 82, 89),
                Rgba::translucent(150, 191, 138, 51),
                Rgba::translucent(255, 255, 255, 26),
                Rgba::translucent(3, 90, 82, 51),
            ],
        }
    }

    /// Returns the number of color stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns true if the palette has no stops. (Always false for palettes
    /// built through the validating constructors.)
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Read-only access to the stops.
    pub fn stops(&self) -> &[Rgba] {
        &self.stops
    }

    /// Picks a stop uniformly at random.
    pub fn pick(&self, rng: &mut SplitMix64) -> Rgba {
        self.stops[rng.next_index(self.stops.len())]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::ambient()
    }
}

impl TryFrom<Vec<Rgba>> for Palette {
    type Error = FieldError;

    fn try_from(stops: Vec<Rgba>) -> Result<Self, FieldError> {
        Palette::new(stops)
    }
}

impl From<Palette> for Vec<Rgba> {
    fn from(palette: Palette) -> Vec<Rgba> {
        palette.stops
    }
}
