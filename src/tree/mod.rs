//! Prefix-code tree model
//!
//! This module contains:
//! - The immutable node type and its accessors
//! - The validating loader for nested JSON definitions
//! - Huffman construction from symbol weights
//! - Code word tables for encoding and decoding text

/// Huffman construction from symbol frequencies
pub mod builder;
/// Code word tables, encoding and decoding
pub mod codebook;
/// Nested definitions, the validating loader and the bundled alphabet
pub mod definition;
/// Tree node type
pub mod node;

pub use definition::{NodeDefinition, TreeDocument, english_tree, load, load_path, load_str};
pub use node::{Branch, CodeTreeNode, code_of};
