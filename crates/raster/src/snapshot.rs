//! PNG snapshots of a rasterized surface.
//!
//! Feature-gated behind `png` (default on) so embedders that only need the
//! in-memory buffer can drop the `image` dependency.

use crate::pixel::RasterSurface;
use drift_field_core::FieldError;
use std::path::Path;

/// Writes the surface's RGBA buffer as a PNG file.
///
/// Returns `FieldError::InvalidViewport` for a zero-pixel surface and
/// `FieldError::Io` on write failure.
pub fn write_png(surface: &RasterSurface, path: &Path) -> Result<(), FieldError> {
    let w = u32::try_from(surface.pixel_width()).map_err(|_| FieldError::InvalidViewport)?;
    let h = u32::try_from(surface.pixel_height()).map_err(|_| FieldError::InvalidViewport)?;
    if w == 0 || h == 0 {
        return Err(FieldError::InvalidViewport);
    }
    let img = image::RgbaImage::from_raw(w, h, surface.pixels().to_vec())
        .ok_or_else(|| FieldError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| FieldError::Io(e.to_string()))
}
