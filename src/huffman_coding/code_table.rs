//! Derives a coding table from a built Huffman tree: a depth-first walk assigns each leaf
//! its prefix code and accumulates the entropy and average word length statistics, then the
//! accumulated leaf probability is validated against drift.

use std::hash::Hash;

use log::debug;
use rustc_hash::FxHashMap;

use super::huffman::{Node, NodeData};
use super::CodingError;

/// The statistics a Huffman code would achieve over one probability source.
///
/// `entropy` is a property of the distribution the tree was built from (each leaf's own
/// probability). `avg_word_len` is the expected code length under the true symbol
/// distribution supplied to [`CodeTable::from_tree`], which may differ from the build
/// distribution - that is what makes a table built from theoretical frequencies comparable
/// against one built from the text itself.
#[derive(Debug, Clone)]
pub struct CodeTable<S> {
    /// Symbol to binary code string ('0' left, '1' right). Prefix-free by construction,
    /// since every code is a root-to-leaf path.
    pub codes: FxHashMap<S, String>,
    /// -sum(p * log2 p) over the build-time leaf probabilities, in bits.
    pub entropy: f64,
    /// Expected code length under the true symbol distribution, in bits.
    pub avg_word_len: f64,
}

impl<S: Copy + Eq + Hash> CodeTable<S> {
    /// Walk `root` and produce the coding table. `true_probs` maps each symbol to its
    /// observed frequency in the text; symbols missing from the map count as 0.
    ///
    /// The build-time leaf probabilities are summed during the walk and must land in
    /// [0.99, 1.01], or the table is rejected with [`CodingError::ProbabilityDrift`] -
    /// drift here means the upstream frequency table was constructed wrong.
    pub fn from_tree(root: &Node<S>, true_probs: &FxHashMap<S, f64>) -> Result<Self, CodingError> {
        let mut table = CodeTable {
            codes: FxHashMap::default(),
            entropy: 0.0,
            avg_word_len: 0.0,
        };
        let mut prob_sum = 0.0;
        dfs(root, String::new(), true_probs, &mut table, &mut prob_sum);

        if !(0.99..=1.01).contains(&prob_sum) {
            return Err(CodingError::ProbabilityDrift(prob_sum));
        }
        debug!(
            "Coding table: {} codes, entropy {:.3}, avg word length {:.3}",
            table.codes.len(),
            table.entropy,
            table.avg_word_len
        );
        Ok(table)
    }
}

/// Recursive walk appending '0' descending left and '1' descending right. A degenerate
/// single-leaf root receives the empty code.
fn dfs<S: Copy + Eq + Hash>(
    node: &Node<S>,
    code: String,
    true_probs: &FxHashMap<S, f64>,
    table: &mut CodeTable<S>,
    prob_sum: &mut f64,
) {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            dfs(left, code.clone() + "0", true_probs, table, prob_sum);
            dfs(right, code + "1", true_probs, table, prob_sum);
        }
        NodeData::Leaf(symbol) => {
            let true_prob = true_probs.get(symbol).copied().unwrap_or(0.0);
            table.avg_word_len += code.len() as f64 * true_prob;
            table.entropy -= node.probability * node.probability.log2();
            *prob_sum += node.probability;
            table.codes.insert(*symbol, code);
        }
    }
}

/// Which of two coding tables achieves the shorter average word length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    LeftBetter,
    RightBetter,
    Tie,
}

/// Compare two average word lengths over the same symbol distribution. Shorter is better.
pub fn compare_avg_len(left: f64, right: f64) -> Verdict {
    if left < right {
        Verdict::LeftBetter
    } else if right < left {
        Verdict::RightBetter
    } else {
        Verdict::Tie
    }
}

/// Compare a single-symbol table against a pair table. Every pair code covers two symbols,
/// so the pair average is halved to get a per-symbol figure before comparing.
pub fn compare_pair_avg_len(single: f64, pair: f64) -> Verdict {
    compare_avg_len(single, pair / 2.0)
}
