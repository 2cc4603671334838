//! Field configuration and device-class tiering.
//!
//! Everything the original effect kept as inline literals lives here as an
//! immutable value object, so a field can be built and tested with injected
//! viewport dimensions instead of ambient globals. Every knob has a serde
//! default, so JSON overrides only need to name the values they change.

use crate::color::Rgba;
use crate::error::FieldError;
use crate::palette::Palette;
use serde::{Deserialize, Serialize};

/// Binary device classification derived once from viewport width.
///
/// Governs both particle count and whether the proximity-link pass runs.
/// The tier is fixed for the lifetime of a field: resizing across the
/// breakpoint never re-evaluates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceTier {
    /// Narrow viewport: fewer particles, no link pass.
    Constrained,
    /// Wide viewport: full particle count with proximity links.
    Full,
}

impl DeviceTier {
    /// Classifies a viewport width against the breakpoint.
    ///
    /// Widths at or above the breakpoint are `Full`.
    pub fn from_viewport_width(width: f64, breakpoint: f64) -> DeviceTier {
        if width >= breakpoint {
            DeviceTier::Full
        } else {
            DeviceTier::Constrained
        }
    }

    /// Whether the proximity-link pass runs at this tier.
    pub fn draws_links(self) -> bool {
        matches!(self, DeviceTier::Full)
    }
}

/// Immutable configuration for a particle field.
///
/// Defaults reproduce the original effect: breakpoint 768, counts 50/120,
/// 10-unit wrap margin, 120-unit link radius with 0.04 base alpha, sway
/// amplitudes (0.15, 0.10), and the stock ambient palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Viewport width (logical pixels) at which the tier becomes `Full`.
    pub breakpoint: f64,
    /// Particle count at the `Constrained` tier.
    pub constrained_count: usize,
    /// Particle count at the `Full` tier.
    pub full_count: usize,
    /// Overscan margin: particles wrap at `[-margin, dim + margin]`.
    pub wrap_margin: f64,
    /// Pairs closer than this draw a link; pairs at or beyond it draw nothing.
    pub link_distance: f64,
    /// Link alpha at distance 0; falls off linearly to 0 at `link_distance`.
    pub link_base_alpha: f64,
    /// Stroke width of link segments.
    pub link_width: f64,
    /// Link stroke color (alpha component is replaced per pair).
    pub link_color: Rgba,
    /// Velocity components are drawn uniformly from `[-max_speed, max_speed)`.
    pub max_speed: f64,
    /// Particle radii are drawn uniformly from `[min_radius, max_radius)`.
    pub min_radius: f64,
    pub max_radius: f64,
    /// Phase speeds are drawn uniformly from `[min_phase_speed, max_phase_speed)`.
    pub min_phase_speed: f64,
    pub max_phase_speed: f64,
    /// Amplitude of the sinusoidal perturbation per axis.
    pub sway_x: f64,
    pub sway_y: f64,
    /// Colors assigned to particles at creation.
    pub palette: Palette,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            breakpoint: 768.0,
            constrained_count: 50,
            full_count: 120,
            wrap_margin: 10.0,
            link_distance: 120.0,
            link_base_alpha: 0.04,
            link_width: 0.5,
            link_color: Rgba::opaque(150, 191, 138),
            max_speed: 0.15,
            min_radius: 0.5,
            max_radius: 2.5,
            min_phase_speed: 0.005,
            max_phase_speed: 0.015,
            sway_x: 0.15,
            sway_y: 0.10,
            palette: Palette::ambient(),
        }
    }
}

impl FieldConfig {
    /// Particle count for the given tier.
    pub fn count_for(&self, tier: DeviceTier) -> usize {
        match tier {
            DeviceTier::Constrained => self.constrained_count,
            DeviceTier::Full => self.full_count,
        }
    }

    /// Validates range relationships that serde defaults cannot enforce.
    ///
    /// Returns `FieldError::InvalidConfig` naming the first offending knob.
    pub fn validate(&self) -> Result<(), FieldError> {
        if !(self.breakpoint.is_finite() && self.breakpoint > 0.0) {
            return Err(FieldError::InvalidConfig(
                "breakpoint must be finite and positive".into(),
            ));
        }
        if self.constrained_count == 0 || self.full_count == 0 {
            return Err(FieldError::InvalidConfig(
                "particle counts must be non-zero".into(),
            ));
        }
        if !(self.link_distance.is_finite() && self.link_distance > 0.0) {
            return Err(FieldError::InvalidConfig(
                "link_distance must be finite and positive".into(),
            ));
        }
        if self.min_radius <= 0.0 || self.min_radius >= self.max_radius {
            return Err(FieldError::InvalidConfig(
                "radius range must satisfy 0 < min_radius < max_radius".into(),
            ));
        }
        if self.min_phase_speed >= self.max_phase_speed {
            return Err(FieldError::InvalidConfig(
                "phase speed range must satisfy min < max".into(),
            ));
        }
        if self.wrap_margin < 0.0 {
            return Err(FieldError::InvalidConfig(
                "wrap_margin must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_below_breakpoint_is_constrained() {
        assert_eq!(
            DeviceTier::from_viewport_width(767.9, 768.0),
            DeviceTier::Constrained
        );
    }

    #[test]
    fn tier_at_breakpoint_is_full() {
        assert_eq!(
            DeviceTier::from_viewport_width(768.0, 768.0),
            DeviceTier::Full
        );
    }

    #[test]
    fn only_full_tier_draws_links() {
        assert!(DeviceTier::Full.draws_links());
        assert!(!DeviceTier::Constrained.draws_links());
    }

    #[test]
    fn default_config_matches_original_effect() {
        let config = FieldConfig::default();
        assert_eq!(config.breakpoint, 768.0);
        assert_eq!(config.constrained_count, 50);
        assert_eq!(config.full_count, 120);
        assert_eq!(config.wrap_margin, 10.0);
        assert_eq!(config.link_distance, 120.0);
        assert_eq!(config.link_base_alpha, 0.04);
        assert_eq!(config.link_width, 0.5);
        assert_eq!(config.palette.len(), 5);
    }

    #[test]
    fn default_config_validates() {
        FieldConfig::default().validate().unwrap();
    }

    #[test]
    fn count_for_maps_tiers_to_counts() {
        let config = FieldConfig::default();
        assert_eq!(config.count_for(DeviceTier::Constrained), 50);
        assert_eq!(config.count_for(DeviceTier::Full), 120);
    }

    #[test]
    fn partial_json_overrides_keep_other_defaults() {
        let config: FieldConfig =
            serde_json::from_str(r#"{"full_count": 200, "link_distance": 90.0}"#).unwrap();
        assert_eq!(config.full_count, 200);
        assert_eq!(config.link_distance, 90.0);
        assert_eq!(config.constrained_count, 50);
        assert_eq!(config.breakpoint, 768.0);
        assert_eq!(config.palette.len(), 5);
    }

    #[test]
    fn empty_json_object_yields_defaults() {
        let config: FieldConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FieldConfig::default());
    }

    #[test]
    fn serde_round_trip() {
        let config = FieldConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: FieldConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn validate_rejects_zero_counts() {
        let config = FieldConfig {
            full_count: 0,
            ..FieldConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FieldError::InvalidConfig(_))
        ));
    }

    #[test]
    fn validate_rejects_inverted_radius_range() {
        let config = FieldConfig {
            min_radius: 3.0,
            max_radius: 1.0,
            ..FieldConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FieldError::InvalidConfig(_))
        ));
    }

    #[test]
    fn validate_rejects_negative_link_distance() {
        let config = FieldConfig {
            link_distance: -1.0,
            ..FieldConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FieldError::InvalidConfig(_))
        ));
    }

    #[test]
    fn validate_rejects_negative_wrap_margin() {
        let config = FieldConfig {
            wrap_margin: -5.0,
            ..FieldConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FieldError::InvalidConfig(_))
        ));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn tiering_is_deterministic_in_width(width in 0.0_f64..4096.0) {
                let tier = DeviceTier::from_viewport_width(width, 768.0);
                if width >= 768.0 {
                    prop_assert_eq!(tier, DeviceTier::Full);
                } else {
                    prop_assert_eq!(tier, DeviceTier::Constrained);
                }
            }
        }
    }
}
