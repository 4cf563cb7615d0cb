//! Nested tree definitions and the validating loader
//!
//! Definitions use the JSON layout written by the code generation tooling:
//! internal records hold `code`, `left` and `right`, leaf records hold
//! `char`, `freq` and `code`. A document wraps the tree together with an
//! alphabetically sorted symbol to code table.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::io::error::{Result, TreeRenderError, file_system, malformed};
use crate::tree::node::{Branch, CodeTreeNode};

/// Bundled English letter-frequency tree (26 letters, space and `>`)
pub const ENGLISH_TREE_JSON: &str = include_str!("../../assets/english.json");

/// One node of a nested tree definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeDefinition {
    /// Code prefix; derived from the node's position when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Leaf symbol
    #[serde(default, rename = "char", skip_serializing_if = "Option::is_none")]
    pub symbol: Option<char>,
    /// Leaf weight
    #[serde(default, rename = "freq", skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Child under code digit `0`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<NodeDefinition>>,
    /// Child under code digit `1`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<NodeDefinition>>,
}

impl NodeDefinition {
    /// Leaf record
    pub fn leaf(symbol: char, weight: Option<f64>) -> Self {
        Self {
            symbol: Some(symbol),
            weight,
            ..Self::default()
        }
    }

    /// Internal record
    pub fn internal(left: Self, right: Self) -> Self {
        Self {
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
            ..Self::default()
        }
    }
}

/// A tree definition together with its code table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeDocument {
    /// Symbol to code table, keyed by the symbol as a one-character string
    #[serde(default)]
    pub codes: BTreeMap<String, String>,
    /// Root of the tree
    pub tree: NodeDefinition,
}

impl TreeDocument {
    /// Serialize a loaded tree into a document
    pub fn from_tree(root: &CodeTreeNode) -> Self {
        let codes = root
            .leaves()
            .into_iter()
            .filter_map(|leaf| {
                leaf.symbol()
                    .map(|symbol| (symbol.to_string(), leaf.prefix().to_string()))
            })
            .collect();

        Self {
            codes,
            tree: to_definition(root),
        }
    }

    /// Load the tree and check it against the code table
    ///
    /// # Errors
    ///
    /// Returns `MalformedTree` if the tree is malformed or a table entry
    /// disagrees with the tree
    pub fn load(&self) -> Result<CodeTreeNode> {
        let root = load(&self.tree)?;
        if self.codes.is_empty() {
            return Ok(root);
        }

        let tree_codes: BTreeMap<String, &str> = root
            .leaves()
            .into_iter()
            .filter_map(|leaf| leaf.symbol().map(|s| (s.to_string(), leaf.prefix())))
            .collect();

        for (symbol, code) in &self.codes {
            match tree_codes.get(symbol) {
                Some(&tree_code) if tree_code == code.as_str() => {}
                Some(&tree_code) => {
                    return Err(malformed(
                        tree_code,
                        &format!("code table assigns '{code}' to {symbol:?}"),
                    ));
                }
                None => {
                    return Err(malformed(
                        code,
                        &format!("code table symbol {symbol:?} is not a leaf of the tree"),
                    ));
                }
            }
        }

        if let Some((symbol, code)) = tree_codes
            .iter()
            .find(|(symbol, _)| !self.codes.contains_key(*symbol))
        {
            return Err(malformed(
                code,
                &format!("leaf {symbol:?} is missing from the code table"),
            ));
        }

        Ok(root)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DefinitionSource {
    Document(TreeDocument),
    Node(NodeDefinition),
}

/// Build a validated tree from a nested definition
///
/// # Errors
///
/// Returns `MalformedTree` when a node has exactly one child, a leaf lacks a
/// symbol, an internal node carries a symbol or weight, a code disagrees with
/// the node's position, or a symbol appears on more than one leaf
pub fn load(definition: &NodeDefinition) -> Result<CodeTreeNode> {
    let root = load_node(definition, String::new())?;

    let mut seen = BTreeMap::new();
    for leaf in root.leaves() {
        if let Some(symbol) = leaf.symbol() {
            if let Some(first) = seen.insert(symbol, leaf.prefix()) {
                return Err(malformed(
                    leaf.prefix(),
                    &format!("symbol {symbol:?} already assigned to '{first}'"),
                ));
            }
        }
    }

    tracing::debug!(
        nodes = root.node_count(),
        leaves = seen.len(),
        height = root.height(),
        "loaded code tree"
    );
    Ok(root)
}

fn load_node(definition: &NodeDefinition, prefix: String) -> Result<CodeTreeNode> {
    if let Some(code) = &definition.code {
        if *code != prefix {
            return Err(malformed(
                &prefix,
                &format!("declared code '{code}' does not match its position"),
            ));
        }
    }

    match (&definition.left, &definition.right) {
        (Some(left), Some(right)) => {
            if let Some(symbol) = definition.symbol {
                return Err(malformed(
                    &prefix,
                    &format!("internal node carries symbol {symbol:?}"),
                ));
            }
            if definition.weight.is_some() {
                return Err(malformed(&prefix, &"internal node carries a weight"));
            }
            let left = load_node(left, child_prefix(&prefix, Branch::Left))?;
            let right = load_node(right, child_prefix(&prefix, Branch::Right))?;
            CodeTreeNode::branch(prefix, left, right)
        }
        (None, None) => {
            let symbol = definition
                .symbol
                .ok_or_else(|| malformed(&prefix, &"leaf has no symbol"))?;
            Ok(CodeTreeNode::leaf(prefix, symbol, definition.weight))
        }
        (Some(_), None) => Err(malformed(&prefix, &"node has a left child but no right child")),
        (None, Some(_)) => Err(malformed(&prefix, &"node has a right child but no left child")),
    }
}

fn child_prefix(parent: &str, branch: Branch) -> String {
    let mut prefix = String::with_capacity(parent.len() + 1);
    prefix.push_str(parent);
    prefix.push(branch.digit());
    prefix
}

/// Serialize a tree back into the nested definition layout
pub fn to_definition(node: &CodeTreeNode) -> NodeDefinition {
    match (node.left(), node.right()) {
        (Some(left), Some(right)) => NodeDefinition {
            code: Some(node.prefix().to_string()),
            ..NodeDefinition::internal(to_definition(left), to_definition(right))
        },
        _ => NodeDefinition {
            code: Some(node.prefix().to_string()),
            symbol: node.symbol(),
            weight: node.weight(),
            left: None,
            right: None,
        },
    }
}

/// Parse and load a tree from JSON text
///
/// Accepts either a document (`codes` plus `tree`) or a bare node record.
///
/// # Errors
///
/// Returns `DefinitionParse` for invalid JSON and `MalformedTree` for a
/// structurally invalid tree
pub fn load_str(json: &str) -> Result<CodeTreeNode> {
    match serde_json::from_str(json)? {
        DefinitionSource::Document(document) => document.load(),
        DefinitionSource::Node(definition) => load(&definition),
    }
}

/// Read, parse and load a tree definition file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, `DefinitionParse` if it
/// is not a valid definition, and `MalformedTree` for an invalid tree
pub fn load_path(path: &Path) -> Result<CodeTreeNode> {
    let json =
        std::fs::read_to_string(path).map_err(file_system(path, "read tree definition"))?;

    load_str(&json).map_err(|err| match err {
        TreeRenderError::DefinitionParse { source, .. } => TreeRenderError::DefinitionParse {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Load the bundled English alphabet tree
///
/// # Errors
///
/// Returns an error only if the bundled definition is corrupt
pub fn english_tree() -> Result<CodeTreeNode> {
    load_str(ENGLISH_TREE_JSON)
}
