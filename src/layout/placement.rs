//! Node positions computed without drawing
//!
//! Uses an explicit stack so deep trees cannot exhaust the call stack.
//! Visit order matches the renderer: depth-first, left before right.

use crate::layout::geometry::{LayoutBounds, Point, child_position, decayed};
use crate::tree::node::{Branch, CodeTreeNode};

/// A node together with where it is drawn
#[derive(Debug, Clone, Copy)]
pub struct PlacedNode<'a> {
    /// The placed node
    pub node: &'a CodeTreeNode,
    /// Glyph center
    pub position: Point,
    /// Distance from the root
    pub depth: usize,
    /// Horizontal offset used to place this node's children
    pub child_offset: f64,
}

/// Place every node of the tree
pub fn layout(
    root: &CodeTreeNode,
    origin: Point,
    x_offset: f64,
    y_offset: f64,
) -> Vec<PlacedNode<'_>> {
    let mut placed = Vec::with_capacity(root.node_count());
    let mut stack = vec![(root, origin, 0, x_offset)];

    while let Some((node, position, depth, child_offset)) = stack.pop() {
        placed.push(PlacedNode {
            node,
            position,
            depth,
            child_offset,
        });

        for branch in [Branch::Right, Branch::Left] {
            if let Some(child) = node.child(branch) {
                stack.push((
                    child,
                    child_position(position, branch, child_offset, y_offset),
                    depth + 1,
                    decayed(child_offset),
                ));
            }
        }
    }

    placed
}

/// Bounds covering every placed glyph of the given radius
pub fn bounds(placed: &[PlacedNode<'_>], radius: f64) -> Option<LayoutBounds> {
    let (first, rest) = placed.split_first()?;
    let mut bounds = LayoutBounds::around(first.position, radius);
    for node in rest {
        bounds.include(node.position, radius);
    }
    Some(bounds)
}
