//! Drawing surface capability and its implementations
//!
//! The renderer only ever talks to a [`Surface`]. Recording, SVG and raster
//! implementations live in the submodules.

use crate::io::error::Result;
use crate::layout::geometry::Point;

/// Raster image output
pub mod raster;
/// In-memory draw call log
pub mod recording;
/// SVG document output
pub mod svg;

pub use raster::RasterSurface;
pub use recording::{DrawCall, RecordingSurface};
pub use svg::SvgSurface;

/// RGBA color
pub type Color = [u8; 4];

/// Fill and outline of a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphStyle {
    /// Interior color
    pub fill: Color,
    /// Outline color
    pub stroke: Color,
}

/// Horizontal anchoring of a text label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    /// Text starts at the anchor
    Left,
    /// Text is centered on the anchor
    #[default]
    Center,
    /// Text ends at the anchor
    Right,
}

/// Minimal 2-D drawing capability consumed by the renderer
pub trait Surface {
    /// Check the surface can be drawn on
    ///
    /// # Errors
    ///
    /// Returns `SurfaceUnavailable` when the surface is closed or invalid
    fn check_available(&self) -> Result<()>;

    /// Reset to a blank canvas of the given size
    fn clear(&mut self, width: u32, height: u32, background: Color);

    /// Draw a filled, outlined circle
    fn draw_filled_circle(&mut self, center: Point, radius: f64, style: GlyphStyle);

    /// Draw a text label anchored at `at`, vertically centered
    fn draw_text(&mut self, text: &str, at: Point, alignment: TextAlignment);

    /// Draw a straight line segment
    fn draw_line(&mut self, from: Point, to: Point);
}
