#![deny(unsafe_code)]
//! CPU rasterizer for the drift-field [`Surface`] trait.
//!
//! [`RasterSurface`] draws into an RGBA8 pixel buffer with src-over alpha
//! blending, which is enough to exercise and snapshot the decorative effect
//! headless. The [`snapshot`] module (feature `png`, default on) writes a
//! surface out as a PNG via the `image` crate.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use pixel::RasterSurface;
