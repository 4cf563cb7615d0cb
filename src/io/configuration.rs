//! Rendering constants and runtime configuration defaults

use crate::surface::Color;

// Canvas defaults match the proportions of the bundled alphabet's layout
/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 1100;
/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 800;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: u32 = 10_000;

/// Horizontal distance between the root and each of its children
pub const DEFAULT_X_OFFSET: f64 = 250.0;
/// Vertical distance between consecutive depth levels
pub const DEFAULT_Y_OFFSET: f64 = 70.0;
/// Factor applied to the horizontal offset at every depth level
pub const OFFSET_DECAY: f64 = 0.5;
/// Vertical position of the root glyph
pub const ROOT_Y: f64 = 50.0;
/// Space kept around the laid out tree when fitting the canvas
pub const CANVAS_MARGIN: f64 = 10.0;

/// Radius of a node glyph
pub const NODE_RADIUS: f64 = 20.0;
/// Distance of the symbol and code lines from a leaf glyph's center
pub const LEAF_LABEL_SPACING: f64 = 6.0;
/// Label font size in pixels
pub const FONT_SIZE: f64 = 12.0;
/// Label font family
pub const FONT_FAMILY: &str = "Arial";

// Palette
/// Canvas background
pub const BACKGROUND_COLOR: Color = [255, 255, 255, 255];
/// Fill of internal node glyphs
pub const INTERNAL_FILL: Color = [33, 150, 243, 255];
/// Fill of leaf node glyphs
pub const LEAF_FILL: Color = [76, 175, 80, 255];
/// Glyph outlines and edges
pub const STROKE_COLOR: Color = [0, 0, 0, 255];
/// Label text
pub const TEXT_COLOR: Color = [255, 255, 255, 255];

// Corpus builds
/// Default number of most frequent symbols kept when building from a corpus
pub const DEFAULT_TOP_K: usize = 26;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_tree";
/// Stem of the output written when rendering the bundled alphabet
pub const BUNDLED_OUTPUT_STEM: &str = "english_tree";
