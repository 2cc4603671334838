#![deny(unsafe_code)]
//! Core types for the drift-field ambient particle renderer.
//!
//! Provides the `Particle` entity, `Rgba` color and translucent `Palette`,
//! the `FieldConfig`/`DeviceTier` configuration model, the object-safe
//! `Surface` drawing trait, the `SplitMix64` PRNG, and the `Scene`
//! reproducible render recipe.

pub mod color;
pub mod config;
pub mod error;
pub mod palette;
pub mod particle;
pub mod prng;
pub mod scene;
pub mod surface;

pub use color::Rgba;
pub use config::{DeviceTier, FieldConfig};
pub use error::FieldError;
pub use palette::Palette;
pub use particle::Particle;
pub use prng::SplitMix64;
pub use scene::Scene;
pub use surface::Surface;
