//! Builds a Huffman tree from a set of (symbol, probability) leaves by greedily merging
//! the two lowest-probability nodes until a single root remains.

use log::trace;

use super::CodingError;

#[derive(Debug, Clone, PartialEq)]
pub enum NodeData<S> {
    Kids(Box<Node<S>>, Box<Node<S>>),
    Leaf(S),
}

/// One node of a Huffman tree. Leaves carry a symbol; internal nodes carry only the
/// merged probability and own their two children exclusively. A node with exactly one
/// child is unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<S> {
    pub probability: f64,
    pub node_data: NodeData<S>,
}

impl<S> Node<S> {
    /// Create a new leaf node
    pub fn leaf(symbol: S, probability: f64) -> Node<S> {
        Node {
            probability,
            node_data: NodeData::Leaf(symbol),
        }
    }
}

/// Build a Huffman tree from a non-empty leaf set. Every leaf probability must be strictly
/// positive - zero-probability entries break the entropy computation (log2(0)) and must be
/// filtered out by the caller before this point.
///
/// Each iteration re-sorts the whole working set by ascending probability, pulls the two
/// lowest nodes off the front and pushes their merged parent onto the back. The sort is
/// stable so that equal probabilities keep insertion order, which keeps the resulting code
/// assignment deterministic when symbol frequencies tie. Repeated full sorting is
/// O(n^2 log n); chosen for simplicity, since the working set never exceeds the 1024-pair
/// alphabet.
///
/// A single-leaf input is returned unchanged as a degenerate root.
pub fn build_tree<S>(leaves: Vec<(S, f64)>) -> Result<Node<S>, CodingError> {
    if leaves.is_empty() {
        return Err(CodingError::EmptyLeafSet);
    }
    trace!("Building huffman tree from {} leaves", leaves.len());

    let mut nodes: Vec<Node<S>> = leaves
        .into_iter()
        .map(|(symbol, probability)| Node::leaf(symbol, probability))
        .collect();

    while nodes.len() > 1 {
        nodes.sort_by(|a, b| a.probability.total_cmp(&b.probability));
        // Two lowest-probability nodes become children of a new internal node.
        let first = nodes.remove(0);
        let second = nodes.remove(0);
        nodes.push(Node {
            probability: first.probability + second.probability,
            node_data: NodeData::Kids(Box::new(first), Box::new(second)),
        });
    }
    // The loop strictly reduces the set by one node per merge, so exactly one remains.
    Ok(nodes.remove(0))
}

#[cfg(test)]
mod test {
    use super::*;

    /// Sum of all leaf probabilities below this node.
    fn leaf_prob_sum<S>(node: &Node<S>) -> f64 {
        match &node.node_data {
            NodeData::Leaf(_) => node.probability,
            NodeData::Kids(left, right) => leaf_prob_sum(left) + leaf_prob_sum(right),
        }
    }

    #[test]
    fn root_probability_is_leaf_sum() {
        let leaves = vec![('a', 0.1), ('b', 0.2), ('c', 0.3), ('d', 0.4)];
        let root = build_tree(leaves).unwrap();
        assert!((root.probability - 1.0).abs() < 1e-9);
        assert!((leaf_prob_sum(&root) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn single_leaf_is_degenerate_root() {
        let root = build_tree(vec![('q', 1.0)]).unwrap();
        assert_eq!(root, Node::leaf('q', 1.0));
    }

    #[test]
    fn two_equal_leaves_merge_into_one_root() {
        let root = build_tree(vec![('a', 0.5), ('b', 0.5)]).unwrap();
        assert!((root.probability - 1.0).abs() < 1e-9);
        match root.node_data {
            NodeData::Kids(left, right) => {
                // Stable sort keeps insertion order on the tie.
                assert_eq!(left.node_data, NodeData::Leaf('a'));
                assert_eq!(right.node_data, NodeData::Leaf('b'));
            }
            NodeData::Leaf(_) => panic!("root of a two-leaf tree must be internal"),
        }
    }

    #[test]
    fn empty_leaf_set_is_rejected() {
        let result = build_tree(Vec::<(char, f64)>::new());
        assert_eq!(result, Err(CodingError::EmptyLeafSet));
    }

    #[test]
    fn tied_probabilities_build_deterministically() {
        let leaves: Vec<(u8, f64)> = (0..8).map(|i| (i, 0.125)).collect();
        let first = build_tree(leaves.clone()).unwrap();
        let second = build_tree(leaves).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn pair_symbols_build_too() {
        let leaves = vec![(('а', 'б'), 0.5), (('б', 'а'), 0.25), (('а', 'а'), 0.25)];
        let root = build_tree(leaves).unwrap();
        assert!((root.probability - 1.0).abs() < 1e-9);
    }
}
