//! Immutable prefix-code tree nodes
//!
//! Nodes own their children. Every node knows its full code prefix, so the
//! code of a leaf is available in O(1) without walking back to the root.

use crate::io::error::{Result, malformed};

/// Which child of an internal node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Reached by appending `0`
    Left,
    /// Reached by appending `1`
    Right,
}

impl Branch {
    /// Code digit appended to the parent prefix
    pub const fn digit(self) -> char {
        match self {
            Self::Left => '0',
            Self::Right => '1',
        }
    }
}

/// A node of a prefix-code tree
///
/// Either a leaf carrying a symbol (and optionally its weight), or an
/// internal node with exactly two children whose prefixes extend this
/// node's prefix by `0` and `1`.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeTreeNode {
    prefix: String,
    symbol: Option<char>,
    weight: Option<f64>,
    left: Option<Box<CodeTreeNode>>,
    right: Option<Box<CodeTreeNode>>,
}

impl CodeTreeNode {
    /// Create a leaf
    pub fn leaf(prefix: impl Into<String>, symbol: char, weight: Option<f64>) -> Self {
        Self {
            prefix: prefix.into(),
            symbol: Some(symbol),
            weight,
            left: None,
            right: None,
        }
    }

    /// Create an internal node from its two children
    ///
    /// # Errors
    ///
    /// Returns `MalformedTree` if a child's prefix is not this prefix
    /// extended by its branch digit
    pub fn branch(prefix: impl Into<String>, left: Self, right: Self) -> Result<Self> {
        let prefix = prefix.into();
        for (child, branch) in [(&left, Branch::Left), (&right, Branch::Right)] {
            if !is_child_prefix(&prefix, &child.prefix, branch) {
                return Err(malformed(
                    &child.prefix,
                    &format!(
                        "expected code '{prefix}{}' for {branch:?} child",
                        branch.digit()
                    ),
                ));
            }
        }

        Ok(Self {
            prefix,
            symbol: None,
            weight: None,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        })
    }

    /// Binary code prefix of this node
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Decoded symbol, present only on leaves
    pub const fn symbol(&self) -> Option<char> {
        self.symbol
    }

    /// Relative frequency of the symbol, present only on leaves
    pub const fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// Subtree under code digit `0`
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Subtree under code digit `1`
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Child on the given branch
    pub fn child(&self, branch: Branch) -> Option<&Self> {
        match branch {
            Branch::Left => self.left(),
            Branch::Right => self.right(),
        }
    }

    /// True when the node has no children
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of code digits in the prefix, which is also the node's depth
    pub fn depth(&self) -> usize {
        self.prefix.len()
    }

    /// Total number of nodes in this subtree
    pub fn node_count(&self) -> usize {
        1 + self.left().map_or(0, Self::node_count) + self.right().map_or(0, Self::node_count)
    }

    /// Number of levels below this node (0 for a leaf)
    pub fn height(&self) -> usize {
        let left = self.left().map_or(0, |n| n.height() + 1);
        let right = self.right().map_or(0, |n| n.height() + 1);
        left.max(right)
    }

    /// Leaves in depth-first, left-before-right order
    pub fn leaves(&self) -> Vec<&Self> {
        let mut leaves = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                leaves.push(node);
            }
            // Right pushed first so left is visited first
            stack.extend(node.right());
            stack.extend(node.left());
        }
        leaves
    }
}

/// Code of a node, which is its prefix
pub fn code_of(node: &CodeTreeNode) -> &str {
    node.prefix()
}

fn is_child_prefix(parent: &str, child: &str, branch: Branch) -> bool {
    child.len() == parent.len() + 1
        && child.starts_with(parent)
        && child.ends_with(branch.digit())
}
