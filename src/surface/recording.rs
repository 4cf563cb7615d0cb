use crate::io::error::{Result, surface_unavailable};
use crate::layout::geometry::Point;
use crate::surface::{Color, GlyphStyle, Surface, TextAlignment};

/// One primitive issued to a surface
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    /// Canvas reset
    Clear {
        /// Canvas width
        width: u32,
        /// Canvas height
        height: u32,
        /// Background color
        background: Color,
    },
    /// Filled circle
    Circle {
        /// Circle center
        center: Point,
        /// Circle radius
        radius: f64,
        /// Fill and outline
        style: GlyphStyle,
    },
    /// Text label
    Text {
        /// Label contents
        text: String,
        /// Anchor point
        at: Point,
        /// Anchoring
        alignment: TextAlignment,
    },
    /// Line segment
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
    },
}

/// Surface that records draw calls instead of producing pixels
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    available: bool,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    /// Create an empty, available recorder
    pub const fn new() -> Self {
        Self {
            calls: Vec::new(),
            available: true,
        }
    }

    /// Create a recorder that refuses to be drawn on
    pub const fn detached() -> Self {
        Self {
            calls: Vec::new(),
            available: false,
        }
    }

    /// All recorded calls in issue order
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Centers of all recorded circles in issue order
    pub fn circles(&self) -> Vec<Point> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }

    /// All recorded line segments in issue order
    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Line { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// All recorded labels in issue order
    pub fn texts(&self) -> Vec<(&str, Point)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, at, .. } => Some((text.as_str(), *at)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn check_available(&self) -> Result<()> {
        if self.available {
            Ok(())
        } else {
            Err(surface_unavailable(&"recording surface is detached"))
        }
    }

    fn clear(&mut self, width: u32, height: u32, background: Color) {
        self.calls.push(DrawCall::Clear {
            width,
            height,
            background,
        });
    }

    fn draw_filled_circle(&mut self, center: Point, radius: f64, style: GlyphStyle) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            style,
        });
    }

    fn draw_text(&mut self, text: &str, at: Point, alignment: TextAlignment) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            at,
            alignment,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.calls.push(DrawCall::Line { from, to });
    }
}
