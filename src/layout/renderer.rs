//! Recursive tree layout and drawing
//!
//! Each node is drawn as a circular glyph. Children sit one vertical step
//! below their parent, shifted left or right by a horizontal offset that
//! halves at every level, so the horizontal span of a subtree shrinks
//! geometrically with depth.

use crate::io::configuration::{
    BACKGROUND_COLOR, CANVAS_MARGIN, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH,
    DEFAULT_X_OFFSET, DEFAULT_Y_OFFSET, INTERNAL_FILL, LEAF_FILL, LEAF_LABEL_SPACING,
    MAX_CANVAS_DIMENSION, NODE_RADIUS, ROOT_Y, STROKE_COLOR,
};
use crate::io::error::{Result, invalid_parameter};
use crate::layout::geometry::{Point, child_position, decayed};
use crate::layout::placement::{bounds, layout};
use crate::surface::{Color, GlyphStyle, Surface, TextAlignment};
use crate::tree::node::{Branch, CodeTreeNode};

/// Geometry and palette of a rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// Center of the root glyph
    pub origin: Point,
    /// Horizontal distance from the root to its children
    pub x_offset: f64,
    /// Vertical distance between depth levels
    pub y_offset: f64,
    /// Glyph radius
    pub node_radius: f64,
    /// Canvas background
    pub background: Color,
    /// Style of internal node glyphs
    pub internal_style: GlyphStyle,
    /// Style of leaf glyphs
    pub leaf_style: GlyphStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            origin: Point::new(f64::from(DEFAULT_CANVAS_WIDTH) / 2.0, ROOT_Y),
            x_offset: DEFAULT_X_OFFSET,
            y_offset: DEFAULT_Y_OFFSET,
            node_radius: NODE_RADIUS,
            background: BACKGROUND_COLOR,
            internal_style: GlyphStyle {
                fill: INTERNAL_FILL,
                stroke: STROKE_COLOR,
            },
            leaf_style: GlyphStyle {
                fill: LEAF_FILL,
                stroke: STROKE_COLOR,
            },
        }
    }
}

impl RenderOptions {
    /// Options with the given offsets and a canvas sized to fit `root`
    ///
    /// The origin is moved so the whole layout sits inside the canvas with
    /// a small margin.
    pub fn fitted(root: &CodeTreeNode, x_offset: f64, y_offset: f64) -> Self {
        let defaults = Self::default();
        let radius = defaults.node_radius;
        let placed = layout(root, Point::default(), x_offset, y_offset);
        let Some(extent) = bounds(&placed, radius) else {
            return defaults;
        };

        Self {
            canvas_width: (extent.width() + 2.0 * CANVAS_MARGIN).ceil() as u32,
            canvas_height: (extent.height() + 2.0 * CANVAS_MARGIN).ceil() as u32,
            origin: Point::new(CANVAS_MARGIN - extent.min.x, CANVAS_MARGIN - extent.min.y),
            x_offset,
            y_offset,
            ..defaults
        }
    }

    /// Check the options describe a drawable canvas
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a canvas dimension is zero or above the
    /// limit, or an offset or the radius is negative or not finite
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
        ] {
            if value == 0 || value > MAX_CANVAS_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_CANVAS_DIMENSION}"),
                ));
            }
        }

        for (parameter, value) in [
            ("x_offset", self.x_offset),
            ("y_offset", self.y_offset),
            ("node_radius", self.node_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"must be finite and non-negative",
                ));
            }
        }

        Ok(())
    }
}

/// Draws prefix-code trees onto a [`Surface`]
#[derive(Debug, Clone, Default)]
pub struct TreeRenderer {
    options: RenderOptions,
}

impl TreeRenderer {
    /// Create a renderer with the given options
    pub const fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Options in use
    pub const fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Clear the surface and draw the whole tree from the configured origin
    ///
    /// # Errors
    ///
    /// Returns `SurfaceUnavailable` if the surface cannot be drawn on and
    /// `InvalidParameter` if the options are invalid. Nothing is drawn in
    /// either case.
    pub fn draw_tree<S: Surface + ?Sized>(
        &self,
        root: &CodeTreeNode,
        surface: &mut S,
    ) -> Result<()> {
        surface.check_available()?;
        self.options.validate()?;

        let RenderOptions {
            canvas_width,
            canvas_height,
            origin,
            x_offset,
            y_offset,
            background,
            ..
        } = self.options;

        tracing::debug!(
            nodes = root.node_count(),
            width = canvas_width,
            height = canvas_height,
            "drawing tree"
        );

        surface.clear(canvas_width, canvas_height, background);
        self.render(surface, Some(root), origin, x_offset, y_offset);
        Ok(())
    }

    /// Draw `node` at `at` and recurse into its children
    ///
    /// Children are placed `x_offset` to the left or right and `y_offset`
    /// below, connected by an edge, and drawn with half the horizontal
    /// offset. An absent node draws nothing.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        node: Option<&CodeTreeNode>,
        at: Point,
        x_offset: f64,
        y_offset: f64,
    ) {
        let Some(node) = node else {
            return;
        };

        self.draw_glyph(surface, node, at);

        let radius = self.options.node_radius;
        for branch in [Branch::Left, Branch::Right] {
            let Some(child) = node.child(branch) else {
                continue;
            };
            let child_at = child_position(at, branch, x_offset, y_offset);
            surface.draw_line(at.offset(0.0, radius), child_at.offset(0.0, -radius));
            self.render(surface, Some(child), child_at, decayed(x_offset), y_offset);
        }
    }

    fn draw_glyph<S: Surface + ?Sized>(&self, surface: &mut S, node: &CodeTreeNode, at: Point) {
        tracing::trace!(code = node.prefix(), x = at.x, y = at.y, "glyph");

        if let Some(symbol) = node.symbol() {
            surface.draw_filled_circle(at, self.options.node_radius, self.options.leaf_style);
            surface.draw_text(
                &symbol.to_string(),
                at.offset(0.0, -LEAF_LABEL_SPACING),
                TextAlignment::Center,
            );
            surface.draw_text(
                node.prefix(),
                at.offset(0.0, LEAF_LABEL_SPACING),
                TextAlignment::Center,
            );
        } else {
            surface.draw_filled_circle(at, self.options.node_radius, self.options.internal_style);
            if !node.prefix().is_empty() {
                surface.draw_text(node.prefix(), at, TextAlignment::Center);
            }
        }
    }
}
