//! Canvas coordinates and the offset decay rule

use crate::io::configuration::OFFSET_DECAY;
use crate::tree::node::Branch;

/// Position on the canvas, y growing downwards
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point shifted by `(dx, dy)`
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Position of a child glyph relative to its parent
///
/// Left children move `x_offset` to the left, right children to the right;
/// both move `y_offset` down.
pub fn child_position(parent: Point, branch: Branch, x_offset: f64, y_offset: f64) -> Point {
    match branch {
        Branch::Left => parent.offset(-x_offset, y_offset),
        Branch::Right => parent.offset(x_offset, y_offset),
    }
}

/// Horizontal offset handed to the children of the next level
pub fn decayed(x_offset: f64) -> f64 {
    x_offset * OFFSET_DECAY
}

/// Horizontal offset used for the children of a node at `depth`
pub fn offset_at_depth(initial: f64, depth: usize) -> f64 {
    (0..depth).fold(initial, |offset, _| decayed(offset))
}

/// Axis-aligned bounds of laid out glyphs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutBounds {
    /// Top-left corner (inclusive)
    pub min: Point,
    /// Bottom-right corner (inclusive)
    pub max: Point,
}

impl LayoutBounds {
    /// Bounds of a single glyph
    pub fn around(center: Point, radius: f64) -> Self {
        Self {
            min: center.offset(-radius, -radius),
            max: center.offset(radius, radius),
        }
    }

    /// Grow to include another glyph
    pub fn include(&mut self, center: Point, radius: f64) {
        self.min.x = self.min.x.min(center.x - radius);
        self.min.y = self.min.y.min(center.y - radius);
        self.max.x = self.max.x.max(center.x + radius);
        self.max.y = self.max.y.max(center.y + radius);
    }

    /// Horizontal extent
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}
