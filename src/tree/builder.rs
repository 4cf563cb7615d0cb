//! Huffman tree construction from symbol weights
//!
//! Greedy merge over a min-priority queue: the two lightest subtrees are
//! popped, the first becomes the left child, and their union is pushed back.
//! Ties are broken by insertion order, which makes builds reproducible for a
//! given input order.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap, HashSet};

use crate::io::error::{Result, invalid_parameter};
use crate::tree::node::{Branch, CodeTreeNode};

/// Subtree awaiting prefix assignment
enum Pending {
    Leaf { symbol: char, weight: f64 },
    Merged(Box<Self>, Box<Self>),
}

struct QueueEntry {
    weight: f64,
    sequence: usize,
    subtree: Pending,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then(self.sequence.cmp(&other.sequence))
    }
}

/// Count alphabetic characters in a text corpus
pub fn count_frequencies(text: &str) -> BTreeMap<char, u64> {
    let mut frequencies = BTreeMap::new();
    for c in text.chars().filter(|c| c.is_alphabetic()) {
        *frequencies.entry(c).or_insert(0) += 1;
    }
    frequencies
}

/// Keep the `k` most frequent symbols, most frequent first
///
/// Equal counts are ordered by symbol so the selection is stable.
pub fn select_top_k(frequencies: &BTreeMap<char, u64>, k: usize) -> Vec<(char, u64)> {
    let mut ranked: Vec<(char, u64)> = frequencies.iter().map(|(&c, &n)| (c, n)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.truncate(k);
    ranked
}

/// Prepend a space symbol weighted one above the most frequent symbol
///
/// Corpus counts only see letters; the word separator is added on top so it
/// always receives a shortest code. Counts that already hold a space are
/// returned unchanged.
pub fn with_space_symbol(counts: &[(char, u64)]) -> Vec<(char, u64)> {
    if counts.iter().any(|&(c, _)| c == ' ') {
        return counts.to_vec();
    }
    let Some(max) = counts.iter().map(|&(_, n)| n).max() else {
        return Vec::new();
    };

    let mut with_space = Vec::with_capacity(counts.len() + 1);
    with_space.push((' ', max.saturating_add(1)));
    with_space.extend_from_slice(counts);
    with_space
}

/// Build a Huffman tree from `(symbol, weight)` pairs
///
/// # Errors
///
/// Returns `InvalidParameter` if fewer than two symbols are given, a weight
/// is negative or not finite, or a symbol is repeated
pub fn build_from_weights(weights: &[(char, f64)]) -> Result<CodeTreeNode> {
    if weights.len() < 2 {
        return Err(invalid_parameter(
            "weights",
            &weights.len(),
            &"at least two symbols are needed to form a code",
        ));
    }

    let mut seen = HashSet::with_capacity(weights.len());
    let mut queue = BinaryHeap::with_capacity(weights.len());
    for (sequence, &(symbol, weight)) in weights.iter().enumerate() {
        if !weight.is_finite() || weight < 0.0 {
            return Err(invalid_parameter(
                "weight",
                &weight,
                &format!("weight of {symbol:?} must be finite and non-negative"),
            ));
        }
        if !seen.insert(symbol) {
            return Err(invalid_parameter(
                "symbol",
                &symbol.escape_debug(),
                &"symbols must be unique",
            ));
        }
        queue.push(Reverse(QueueEntry {
            weight,
            sequence,
            subtree: Pending::Leaf { symbol, weight },
        }));
    }

    let mut sequence = weights.len();
    loop {
        match (queue.pop(), queue.pop()) {
            (Some(Reverse(left)), Some(Reverse(right))) => {
                queue.push(Reverse(QueueEntry {
                    weight: left.weight + right.weight,
                    sequence,
                    subtree: Pending::Merged(Box::new(left.subtree), Box::new(right.subtree)),
                }));
                sequence += 1;
            }
            (Some(Reverse(root)), None) => {
                let tree = assign_prefixes(root.subtree, String::new())?;
                tracing::debug!(
                    symbols = weights.len(),
                    height = tree.height(),
                    "built huffman tree"
                );
                return Ok(tree);
            }
            _ => {
                return Err(invalid_parameter(
                    "weights",
                    &weights.len(),
                    &"priority queue emptied before a root was formed",
                ));
            }
        }
    }
}

/// Build a Huffman tree from symbol counts
///
/// # Errors
///
/// Same conditions as [`build_from_weights`]
pub fn build_from_counts(counts: &[(char, u64)]) -> Result<CodeTreeNode> {
    let weights: Vec<(char, f64)> = counts.iter().map(|&(c, n)| (c, n as f64)).collect();
    build_from_weights(&weights)
}

fn assign_prefixes(subtree: Pending, prefix: String) -> Result<CodeTreeNode> {
    match subtree {
        Pending::Leaf { symbol, weight } => Ok(CodeTreeNode::leaf(prefix, symbol, Some(weight))),
        Pending::Merged(left, right) => {
            let left = assign_prefixes(*left, format!("{prefix}{}", Branch::Left.digit()))?;
            let right = assign_prefixes(*right, format!("{prefix}{}", Branch::Right.digit()))?;
            CodeTreeNode::branch(prefix, left, right)
        }
    }
}
