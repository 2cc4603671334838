//! The drawing surface abstraction.
//!
//! A field never talks to a concrete canvas; it draws through this
//! object-safe trait, which any immediate-mode 2D target can implement
//! (the CPU rasterizer in `drift-field-raster`, a browser canvas binding,
//! or a recording stub in tests).

use crate::color::Rgba;
use glam::DVec2;

/// An immediate-mode 2D drawing target.
///
/// Implementations must honor the alpha channel of every color. Fractional
/// coordinates are valid; how they are resolved (anti-aliasing, rounding)
/// is up to the backend.
pub trait Surface {
    /// Current surface width in pixels.
    fn width(&self) -> f64;

    /// Current surface height in pixels.
    fn height(&self) -> f64;

    /// Resizes the surface. Existing content is discarded.
    fn set_size(&mut self, width: f64, height: f64);

    /// Clears the whole surface to fully transparent.
    fn clear(&mut self);

    /// Fills a disc at `center` with the given radius and color.
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba);

    /// Strokes a line segment from `from` to `to` with the given width
    /// and color.
    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal implementation used to verify the trait stays object-safe.
    struct NullSurface {
        width: f64,
        height: f64,
        clears: usize,
    }

    impl Surface for NullSurface {
        fn width(&self) -> f64 {
            self.width
        }

        fn height(&self) -> f64 {
            self.height
        }

        fn set_size(&mut self, width: f64, height: f64) {
            self.width = width;
            self.height = height;
        }

        fn clear(&mut self) {
            self.clears += 1;
        }

        fn fill_circle(&mut self, _center: DVec2, _radius: f64, _color: Rgba) {}

        fn stroke_line(&mut self, _from: DVec2, _to: DVec2, _width: f64, _color: Rgba) {}
    }

    #[test]
    fn surface_trait_is_object_safe() {
        let mut s = NullSurface {
            width: 640.0,
            height: 480.0,
            clears: 0,
        };
        let surface: &mut dyn Surface = &mut s;
        assert_eq!(surface.width(), 640.0);
        surface.clear();
        surface.set_size(800.0, 600.0);
        assert_eq!(surface.height(), 600.0);
        assert_eq!(s.clears, 1);
    }
}
