//! Raster surface backed by an RGBA image buffer
//!
//! Circles and lines are rasterized pixel by pixel. Text labels are not
//! rasterized since no font is bundled; use the SVG surface for labeled
//! output.

use image::{Rgba, RgbaImage};

use crate::io::configuration::STROKE_COLOR;
use crate::io::error::{Result, surface_unavailable};
use crate::layout::geometry::Point;
use crate::surface::{Color, GlyphStyle, Surface, TextAlignment};

/// Width of glyph outlines in pixels
const OUTLINE_WIDTH: f64 = 1.0;

/// Surface that draws into an [`RgbaImage`]
#[derive(Debug, Clone, Default)]
pub struct RasterSurface {
    image: Option<RgbaImage>,
    finished: bool,
}

impl RasterSurface {
    /// Create a surface; the buffer is allocated by the first `clear`
    pub const fn new() -> Self {
        Self {
            image: None,
            finished: false,
        }
    }

    /// Take the finished image
    ///
    /// # Errors
    ///
    /// Returns `SurfaceUnavailable` if the image was already taken or the
    /// surface was never cleared
    pub fn finish(&mut self) -> Result<RgbaImage> {
        self.check_available()?;
        self.finished = true;
        self.image
            .take()
            .ok_or_else(|| surface_unavailable(&"raster surface was never cleared"))
    }

    /// Canvas size as floats, `None` before `clear` or for an empty canvas
    fn canvas(&self) -> Option<(f64, f64)> {
        self.image
            .as_ref()
            .filter(|image| image.width() > 0 && image.height() > 0)
            .map(|image| (f64::from(image.width()), f64::from(image.height())))
    }

    fn put(&mut self, x: i64, y: i64, color: Color) {
        let Some(image) = self.image.as_mut() else {
            return;
        };
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if x < image.width() && y < image.height() {
            image.put_pixel(x, y, Rgba(color));
        }
    }
}

impl Surface for RasterSurface {
    fn check_available(&self) -> Result<()> {
        if self.finished {
            Err(surface_unavailable(&"raster image already taken"))
        } else {
            Ok(())
        }
    }

    fn clear(&mut self, width: u32, height: u32, background: Color) {
        self.image = Some(RgbaImage::from_pixel(width, height, Rgba(background)));
    }

    fn draw_filled_circle(&mut self, center: Point, radius: f64, style: GlyphStyle) {
        let Some((width, height)) = self.canvas() else {
            return;
        };
        // Scan only the part of the bounding box that lies on the canvas
        let min_x = (center.x - radius).floor().max(0.0).min(width - 1.0) as i64;
        let max_x = (center.x + radius).ceil().max(0.0).min(width - 1.0) as i64;
        let min_y = (center.y - radius).floor().max(0.0).min(height - 1.0) as i64;
        let max_y = (center.y + radius).ceil().max(0.0).min(height - 1.0) as i64;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let distance = (x as f64 - center.x).hypot(y as f64 - center.y);
                if distance <= radius - OUTLINE_WIDTH {
                    self.put(x, y, style.fill);
                } else if distance <= radius {
                    self.put(x, y, style.stroke);
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, _at: Point, _alignment: TextAlignment) {
        tracing::trace!(text, "raster surface skips text label");
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        let Some((width, height)) = self.canvas() else {
            return;
        };
        let Some((from, to)) = clip_segment(from, to, width, height) else {
            return;
        };

        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as i64;

        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            let x = dx.mul_add(t, from.x).round() as i64;
            let y = dy.mul_add(t, from.y).round() as i64;
            self.put(x, y, STROKE_COLOR);
        }
    }
}

/// Clip a segment to the pixel area of a `width` x `height` canvas
///
/// Liang-Barsky against the rectangle covering pixel centers `0..width` and
/// `0..height` widened by half a pixel. Returns `None` when the segment
/// misses the canvas.
fn clip_segment(from: Point, to: Point, width: f64, height: f64) -> Option<(Point, Point)> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let (mut enter, mut exit) = (0.0_f64, 1.0_f64);

    for (p, q) in [
        (-dx, from.x + 0.5),
        (dx, width - 0.5 - from.x),
        (-dy, from.y + 0.5),
        (dy, height - 0.5 - from.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                enter = enter.max(r);
            } else {
                exit = exit.min(r);
            }
        }
    }

    (enter <= exit).then(|| {
        (
            Point::new(dx.mul_add(enter, from.x), dy.mul_add(enter, from.y)),
            Point::new(dx.mul_add(exit, from.x), dy.mul_add(exit, from.y)),
        )
    })
}
