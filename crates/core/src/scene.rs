//! Reproducible recipe for a rendered field.
//!
//! A [`Scene`] captures everything needed to recreate a frame sequence:
//! viewport dimensions, PRNG seed, frame count, and the full field
//! configuration. Two identical scenes fed to the same binary produce
//! bit-identical output.

use crate::config::FieldConfig;
use crate::error::FieldError;
use serde::{Deserialize, Serialize};

/// Reproducible specification for a particle-field render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub seed: u64,
    pub frames: usize,
    #[serde(default)]
    pub config: FieldConfig,
}

impl Scene {
    /// Creates a scene with the default config and zero frames.
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        Self {
            width,
            height,
            seed,
            frames: 0,
            config: FieldConfig::default(),
        }
    }

    /// Validates viewport dimensions and the embedded config.
    pub fn validate(&self) -> Result<(), FieldError> {
        if !(self.width.is_finite() && self.width > 0.0)
            || !(self.height.is_finite() && self.height > 0.0)
        {
            return Err(FieldError::InvalidViewport);
        }
        self.config.validate()
    }
}
