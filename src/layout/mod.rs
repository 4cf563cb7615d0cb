/// Canvas coordinates, offset decay and bounds
pub mod geometry;
/// Node positions without drawing
pub mod placement;
/// Recursive drawing onto a surface
pub mod renderer;

pub use geometry::Point;
pub use renderer::{RenderOptions, TreeRenderer};
