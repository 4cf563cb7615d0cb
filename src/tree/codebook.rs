//! Code word tables, encoding and tree-walking decode

use std::collections::BTreeMap;

use bitvec::prelude::*;

use crate::io::error::{Result, TreeRenderError};
use crate::tree::node::{Branch, CodeTreeNode};

/// Symbol to code word table derived from a tree
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Codebook {
    codes: BTreeMap<char, BitVec>,
}

impl Codebook {
    /// Collect the code word of every leaf
    pub fn from_tree(root: &CodeTreeNode) -> Self {
        let codes: BTreeMap<char, BitVec> = root
            .leaves()
            .into_iter()
            .filter_map(|leaf| {
                let bits = leaf.prefix().chars().map(|c| c == '1').collect::<BitVec>();
                leaf.symbol().map(|symbol| (symbol, bits))
            })
            .collect();
        Self { codes }
    }

    /// Code word of a symbol
    pub fn code(&self, symbol: char) -> Option<&BitSlice> {
        self.codes.get(&symbol).map(BitVec::as_bitslice)
    }

    /// Code word of a symbol as a `0`/`1` string
    pub fn code_string(&self, symbol: char) -> Option<String> {
        self.code(symbol).map(bits_to_string)
    }

    /// Number of symbols
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Test if the table has no symbols
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Length of the longest code word
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(|code| code.len()).max().unwrap_or(0)
    }

    /// Symbols in ascending order
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.codes.keys().copied()
    }

    /// Concatenate the code words of every character of `text`
    ///
    /// # Errors
    ///
    /// Returns `UnknownSymbol` for a character that is not in the table
    pub fn encode(&self, text: &str) -> Result<BitVec> {
        let mut bits = BitVec::new();
        for symbol in text.chars() {
            let code = self
                .code(symbol)
                .ok_or(TreeRenderError::UnknownSymbol { symbol })?;
            bits.extend_from_bitslice(code);
        }
        Ok(bits)
    }

    /// Encoded text paired with the text spaced out under each code word
    ///
    /// Each character is right-aligned to the width of its code word and
    /// spaces are shown as `_`, so the two lines read in columns.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSymbol` for a character that is not in the table
    pub fn aligned(&self, text: &str) -> Result<(String, String)> {
        let mut code_line = String::new();
        let mut text_line = String::new();
        for symbol in text.chars() {
            let code = self
                .code(symbol)
                .ok_or(TreeRenderError::UnknownSymbol { symbol })?;
            code_line.push_str(&bits_to_string(code));
            let shown = if symbol == ' ' { '_' } else { symbol };
            text_line.push_str(&format!("{shown:>width$}", width = code.len()));
        }
        Ok((code_line, text_line))
    }
}

/// Walk the tree bit by bit, emitting a symbol at every leaf
///
/// # Errors
///
/// Returns `IncompleteCode` if the stream ends inside a code word
pub fn decode(root: &CodeTreeNode, bits: &BitSlice) -> Result<String> {
    let mut text = String::new();
    let mut node = root;
    let mut word_start = 0;

    for (position, bit) in bits.iter().by_vals().enumerate() {
        let branch = if bit { Branch::Right } else { Branch::Left };
        node = node
            .child(branch)
            .ok_or(TreeRenderError::IncompleteCode {
                position: word_start,
            })?;
        if let Some(symbol) = node.symbol() {
            text.push(symbol);
            node = root;
            word_start = position + 1;
        }
    }

    if word_start == bits.len() {
        Ok(text)
    } else {
        Err(TreeRenderError::IncompleteCode {
            position: word_start,
        })
    }
}

/// Average code length weighted by leaf weights
///
/// Returns `None` when no leaf has a positive weight.
pub fn weighted_code_length(root: &CodeTreeNode) -> Option<f64> {
    let (total_weight, weighted_bits) = root
        .leaves()
        .into_iter()
        .filter_map(|leaf| leaf.weight().map(|w| (w, w * leaf.depth() as f64)))
        .fold((0.0, 0.0), |(tw, wb), (w, b)| (tw + w, wb + b));

    (total_weight > 0.0).then(|| weighted_bits / total_weight)
}

/// Render bits as a `0`/`1` string
pub fn bits_to_string(bits: &BitSlice) -> String {
    bits.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}
