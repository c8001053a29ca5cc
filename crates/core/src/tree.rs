//! Huffman tree construction.
//!
//! Nodes live in an arena (`Vec<Node>`) and refer to their children by
//! `NodeId`. The tree is built bottom-up and never mutated afterwards, so the
//! arena gives single ownership with no boxing and no cycles.
//!
//! # Algorithm
//!
//! Classic greedy Huffman construction over a min-heap:
//! 1. Seed the heap with one leaf per distinct symbol, weighted by its count
//! 2. Pop the two lightest entries A then B, push `Internal { left: A, right: B }`
//! 3. Repeat until one entry remains: the root
//!
//! # Tie-break
//!
//! Entries of equal weight pop in order of their key: an internal node's key
//! is empty and sorts before every symbol, leaves sort by symbol. Two internal
//! nodes of equal weight pop in creation order. The resulting codes are
//! therefore fully determined by the input text.
//!
//! # Single-symbol alphabets
//!
//! A lone leaf as root would get an empty code. Instead the leaf is wrapped
//! in an internal node with only a left child, so the symbol's code is "0".

use crate::frequency::FrequencyTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Index of a node within its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The branch taken from a parent to a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Left child, bit 0
    Left,
    /// Right child, bit 1
    Right,
}

impl Edge {
    /// The code bit this edge contributes.
    pub fn bit(self) -> bool {
        matches!(self, Edge::Right)
    }

    /// The edge label as rendered in codes: '0' or '1'.
    pub fn label(self) -> char {
        if self.bit() {
            '1'
        } else {
            '0'
        }
    }
}

/// A node of the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// One symbol and its frequency.
    Leaf { symbol: char, weight: u64 },

    /// Merge of two subtrees; `weight` is the sum of the children's weights.
    ///
    /// `right` is `None` only for the synthetic root of a single-symbol tree.
    Internal {
        weight: u64,
        left: NodeId,
        right: Option<NodeId>,
    },
}

impl Node {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    /// The symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Child reached through `edge`, if present.
    pub fn child(&self, edge: Edge) -> Option<NodeId> {
        match (self, edge) {
            (Node::Leaf { .. }, _) => None,
            (Node::Internal { left, .. }, Edge::Left) => Some(*left),
            (Node::Internal { right, .. }, Edge::Right) => *right,
        }
    }
}

/// A Huffman tree: a node arena plus its root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build the tree for `freqs`, or `None` if the table is empty.
    pub fn build(freqs: &FrequencyTable) -> Option<Self> {
        let mut nodes: Vec<Node> = Vec::with_capacity(freqs.len() * 2);
        let mut heap = BinaryHeap::with_capacity(freqs.len());

        for (symbol, weight) in freqs.iter() {
            let id = NodeId(nodes.len());
            nodes.push(Node::Leaf { symbol, weight });
            heap.push(HeapEntry::new(id, &nodes[id.0]));
        }

        if heap.len() == 1 {
            if let Some(only) = heap.pop() {
                let id = NodeId(nodes.len());
                nodes.push(Node::Internal {
                    weight: only.weight,
                    left: only.id,
                    right: None,
                });
                heap.push(HeapEntry::new(id, &nodes[id.0]));
            }
        }

        while heap.len() > 1 {
            let (Some(a), Some(b)) = (heap.pop(), heap.pop()) else {
                break;
            };

            let id = NodeId(nodes.len());
            nodes.push(Node::Internal {
                weight: a.weight + b.weight,
                left: a.id,
                right: Some(b.id),
            });
            heap.push(HeapEntry::new(id, &nodes[id.0]));
        }

        heap.pop().map(|root| HuffmanTree { nodes, root: root.id })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn root_node(&self) -> &Node {
        &self.nodes[self.root.0]
    }

    /// Look up a node by id.
    ///
    /// Ids are only minted by this tree, so lookups of its own ids never fail.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Total weight: the number of symbols in the text the tree was built from.
    pub fn weight(&self) -> u64 {
        self.root_node().weight()
    }

    /// Number of nodes, leaves and internal nodes together.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaves, i.e. distinct symbols.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// Length of the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.walk()
            .filter(|visit| visit.node.is_leaf())
            .map(|visit| visit.depth)
            .max()
            .unwrap_or(0)
    }

    /// Pre-order traversal, left before right, starting at the root.
    pub fn walk(&self) -> TreeWalk<'_> {
        TreeWalk {
            tree: self,
            stack: vec![(self.root, 0, None)],
        }
    }
}

/// Build a Huffman tree from a frequency table; `None` for an empty table.
pub fn build_tree(freqs: &FrequencyTable) -> Option<HuffmanTree> {
    HuffmanTree::build(freqs)
}

/// One step of a `TreeWalk`.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    pub id: NodeId,
    pub node: &'a Node,
    /// Distance from the root (root = 0).
    pub depth: usize,
    /// Edge from the parent, `None` for the root.
    pub edge: Option<Edge>,
}

/// Read-only pre-order traversal over a `HuffmanTree`.
///
/// Uses an explicit stack, so deep (skewed) trees don't recurse.
pub struct TreeWalk<'a> {
    tree: &'a HuffmanTree,
    stack: Vec<(NodeId, usize, Option<Edge>)>,
}

impl<'a> Iterator for TreeWalk<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Visit<'a>> {
        let (id, depth, edge) = self.stack.pop()?;
        let node = self.tree.node(id);

        // Right pushed first so left is visited first
        for edge in [Edge::Right, Edge::Left] {
            if let Some(child) = node.child(edge) {
                self.stack.push((child, depth + 1, Some(edge)));
            }
        }

        Some(Visit {
            id,
            node,
            depth,
            edge,
        })
    }
}

/// Heap entry for tree construction.
///
/// Ordering is reversed so `BinaryHeap` (a max-heap) pops the lightest entry.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    weight: u64,
    /// Tie-break key: `None` (internal, the empty key) sorts before any symbol
    key: Option<char>,
    id: NodeId,
}

impl HeapEntry {
    fn new(id: NodeId, node: &Node) -> Self {
        Self {
            weight: node.weight(),
            key: node.symbol(),
            id,
        }
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (lighter, then smaller key, then older = higher priority)
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.key.cmp(&self.key))
            .then_with(|| other.id.cmp(&self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::count_frequencies;

    fn tree_for(text: &str) -> HuffmanTree {
        build_tree(&count_frequencies(text)).unwrap()
    }

    /// Render the tree shape as nested tuples, e.g. "(a b)".
    fn shape(tree: &HuffmanTree, id: NodeId) -> String {
        match tree.node(id) {
            Node::Leaf { symbol, .. } => symbol.to_string(),
            Node::Internal { left, right, .. } => match right {
                Some(right) => format!("({} {})", shape(tree, *left), shape(tree, *right)),
                None => format!("({})", shape(tree, *left)),
            },
        }
    }

    #[test]
    fn test_empty_table() {
        assert!(build_tree(&count_frequencies("")).is_none());
    }

    #[test]
    fn test_single_symbol_gets_synthetic_root() {
        let tree = tree_for("aaaa");

        assert_eq!(shape(&tree, tree.root()), "(a)");
        assert_eq!(tree.weight(), 4);
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(
            tree.root_node(),
            &Node::Internal {
                weight: 4,
                left: NodeId(0),
                right: None
            }
        );
    }

    #[test]
    fn test_two_symbols_smaller_symbol_pops_first() {
        let tree = tree_for("ba");
        assert_eq!(shape(&tree, tree.root()), "(a b)");
    }

    #[test]
    fn test_internal_node_wins_weight_tie_against_leaf() {
        // a=1 b=1 merge into weight 2, which ties with c=2 and pops first
        let tree = tree_for("abcc");
        assert_eq!(shape(&tree, tree.root()), "((a b) c)");
    }

    #[test]
    fn test_equal_internal_nodes_pop_in_creation_order() {
        let tree = tree_for("ddccbbaa");
        assert_eq!(shape(&tree, tree.root()), "((a b) (c d))");
    }

    #[test]
    fn test_lighter_subtree_goes_left() {
        let tree = tree_for("aaaaabbc");
        // c=1, b=2 merge into 3, then 3 < a=5
        assert_eq!(shape(&tree, tree.root()), "((c b) a)");
    }

    #[test]
    fn test_weight_invariant() {
        let text = "the quick brown fox jumps over the lazy dog";
        let tree = tree_for(text);

        for visit in tree.walk() {
            if let Node::Internal {
                weight,
                left,
                right: Some(right),
            } = visit.node
            {
                assert_eq!(
                    *weight,
                    tree.node(*left).weight() + tree.node(*right).weight()
                );
            }
        }
        assert_eq!(tree.weight(), text.chars().count() as u64);
    }

    #[test]
    fn test_leaves_are_distinct_symbols() {
        let text = "mississippi river";
        let freqs = count_frequencies(text);
        let tree = build_tree(&freqs).unwrap();

        let mut leaves: Vec<(char, u64)> = tree
            .walk()
            .filter_map(|visit| match visit.node {
                Node::Leaf { symbol, weight } => Some((*symbol, *weight)),
                Node::Internal { .. } => None,
            })
            .collect();
        leaves.sort();

        assert_eq!(leaves, freqs.iter().collect::<Vec<_>>());
        // Strict binary tree: n leaves, n - 1 internal nodes
        assert_eq!(tree.node_count(), 2 * freqs.len() - 1);
    }

    #[test]
    fn test_walk_order_and_edges() {
        let tree = tree_for("abcc");
        let visits: Vec<(usize, Option<char>, Option<char>)> = tree
            .walk()
            .map(|v| (v.depth, v.edge.map(Edge::label), v.node.symbol()))
            .collect();

        assert_eq!(
            visits,
            vec![
                (0, None, None),
                (1, Some('0'), None),
                (2, Some('0'), Some('a')),
                (2, Some('1'), Some('b')),
                (1, Some('1'), Some('c')),
            ]
        );
    }
}
