//! Layout and rendering of prefix-code (Huffman) trees
//!
//! Trees are loaded from nested definitions or built from symbol weights,
//! then drawn depth-first onto a drawing surface with a horizontal offset
//! that halves at every level. Surfaces record draw calls, write SVG, or
//! rasterize into an image buffer.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Node placement and recursive rendering
pub mod layout;
/// Drawing surface capability and implementations
pub mod surface;
/// Prefix-code tree model, loading and construction
pub mod tree;

pub use io::error::{Result, TreeRenderError};
