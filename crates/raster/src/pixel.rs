//! RGBA8 pixel-buffer implementation of the [`Surface`] trait.
//!
//! Geometry is resolved at pixel centers with no anti-aliasing: a pixel is
//! inside a disc if its center is within the radius, and line strokes are
//! sampled at sub-pixel steps along the segment. Colors composite with
//! straight-alpha src-over blending, so the translucent palette layers the
//! way it does on a browser canvas.

use drift_field_core::{Rgba, Surface};
use glam::DVec2;

/// A CPU drawing target backed by a row-major RGBA8 buffer.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl RasterSurface {
    /// Creates a fully transparent surface. Fractional or negative
    /// dimensions are floored at zero pixels.
    pub fn new(width: f64, height: f64) -> Self {
        let (w, h) = (clamp_dim(width), clamp_dim(height));
        Self {
            width: w,
            height: h,
            pixels: vec![0; w * h * 4],
        }
    }

    /// Width in whole pixels.
    pub fn pixel_width(&self) -> usize {
        self.width
    }

    /// Height in whole pixels.
    pub fn pixel_height(&self) -> usize {
        self.height
    }

    /// Read-only access to the RGBA8 buffer, row-major, 4 bytes per pixel.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The RGBA bytes of the pixel at `(x, y)`, or `None` outside the
    /// surface.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// Src-over blends `color` onto the pixel at `(x, y)`, clipping
    /// out-of-bounds coordinates.
    fn blend(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let a = color.a.clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let i = (y as usize * self.width + x as usize) * 4;
        let blend_channel = |dst: u8, src: f64| {
            let dst = dst as f64 / 255.0;
            let out = src * a + dst * (1.0 - a);
            (out.clamp(0.0, 1.0) * 255.0).round() as u8
        };
        self.pixels[i] = blend_channel(self.pixels[i], color.r);
        self.pixels[i + 1] = blend_channel(self.pixels[i + 1], color.g);
        self.pixels[i + 2] = blend_channel(self.pixels[i + 2], color.b);
        let dst_a = self.pixels[i + 3] as f64 / 255.0;
        let out_a = a + dst_a * (1.0 - a);
        self.pixels[i + 3] = (out_a.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
}

/// Floors a surface dimension to whole pixels, clamping negatives to zero.
fn clamp_dim(dim: f64) -> usize {
    if dim.is_finite() && dim > 0.0 {
        dim.floor() as usize
    } else {
        0
    }
}

impl Surface for RasterSurface {
    fn width(&self) -> f64 {
        self.width as f64
    }

    fn height(&self) -> f64 {
        self.height as f64
    }

    fn set_size(&mut self, width: f64, height: f64) {
        let (w, h) = (clamp_dim(width), clamp_dim(height));
        self.width = w;
        self.height = h;
        self.pixels.clear();
        self.pixels.resize(w * h * 4, 0);
    }

    fn clear(&mut self) {
        self.pixels.fill(0);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        if !(radius.is_finite() && radius > 0.0) || !center.is_finite() {
            return;
        }
        let min_x = (center.x - radius).floor() as i64;
        let max_x = (center.x + radius).ceil() as i64;
        let min_y = (center.y - radius).floor() as i64;
        let max_y = (center.y + radius).ceil() as i64;
        let r2 = radius * radius;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f64 + 0.5;
                let py = y as f64 + 0.5;
                let dx = px - center.x;
                let dy = py - center.y;
                if dx * dx + dy * dy <= r2 {
                    self.blend(x, y, color);
                }
            }
        }
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba) {
        if !from.is_finite() || !to.is_finite() || !(width.is_finite() && width > 0.0) {
            return;
        }
        // Hairline strokes (width <= 1) plot one pixel per sample with the
        // alpha scaled by the width, approximating partial coverage the way
        // a canvas backend would.
        let color = if width < 1.0 {
            color.with_alpha(color.a * width)
        } else {
            color
        };
        let length = from.distance(to);
        let steps = (length * 2.0).ceil().max(1.0) as usize;
        let mut last: Option<(i64, i64)> = None;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let p = from.lerp(to, t);
            let site = (p.x.floor() as i64, p.y.floor() as i64);
            // Half-pixel sampling revisits pixels; blend each only once.
            if last == Some(site) {
                continue;
            }
            last = Some(site);
            self.blend(site.0, site.1, color);
        }
    }
}
