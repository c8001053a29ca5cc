//! Code generation: symbol -> bit sequence, read off the tree.
//!
//! A symbol's code is the path from the root to its leaf, "0" for each left
//! edge and "1" for each right edge. Distinct leaves of a tree have distinct
//! paths and no leaf lies on another's path, so the table is prefix-free.

use crate::tree::{Edge, HuffmanTree, Node};
use std::collections::BTreeMap;
use std::fmt;

/// A single code word.
///
/// Codes have no fixed width bound (a skewed tree over a large alphabet can
/// run past 64 bits), so bits are stored individually.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Length of the code in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// True if `self` is a (non-strict) prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl From<Vec<bool>> for Code {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Mapping from each symbol to its code word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, Code>,
}

impl CodeTable {
    /// Read the codes off `tree`; an absent tree yields an empty table.
    pub fn from_tree(tree: Option<&HuffmanTree>) -> Self {
        let mut codes = BTreeMap::new();

        let Some(tree) = tree else {
            return Self { codes };
        };

        // (node, path so far); depth is bounded by the alphabet size
        let mut stack = vec![(tree.root(), Code::new())];

        while let Some((id, prefix)) = stack.pop() {
            let node = tree.node(id);
            match node {
                Node::Leaf { symbol, .. } => {
                    codes.insert(*symbol, prefix);
                }
                Node::Internal { .. } => {
                    for edge in [Edge::Right, Edge::Left] {
                        if let Some(child) = node.child(edge) {
                            let mut code = prefix.clone();
                            code.push(edge.bit());
                            stack.push((child, code));
                        }
                    }
                }
            }
        }

        Self { codes }
    }

    /// Code of `symbol`, if it has one.
    pub fn get(&self, symbol: char) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.codes.contains_key(&symbol)
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate `(symbol, code)` pairs in code-point order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Code)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// Longest code length, 0 for an empty table.
    pub fn max_len(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }
}

impl FromIterator<(char, Code)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (char, Code)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

/// Generate the code table for a tree; an absent tree yields an empty table.
pub fn generate_codes(root: Option<&HuffmanTree>) -> CodeTable {
    CodeTable::from_tree(root)
}
