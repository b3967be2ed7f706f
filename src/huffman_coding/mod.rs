//! The huffman_coding module holds the algorithmic core of hufstat: building Huffman trees
//! from symbol probabilities and deriving coding tables (codes, entropy, average word length)
//! from those trees.
//!
//! Hufstat never produces an encoded bitstream. It only computes the statistical properties
//! a Huffman code would achieve, so the tables can be compared across probability sources
//! (theoretical letter frequencies, frequencies measured from the text, and pair frequencies
//! measured from the text).
//!
//! The module is generic over the symbol type. The single-letter and letter-pair analyses
//! run through the same builder and traversal, instantiated at `char` and `(char, char)`.
//!
use std::fmt::{Display, Formatter};

pub mod code_table;
pub mod huffman;

/// Errors the coding core can produce. All of these indicate a defect in the
/// supplied data or an upstream frequency-table bug, not a transient condition.
#[derive(Debug, Clone, PartialEq)]
pub enum CodingError {
    /// The normalized input contained no recognized alphabet symbols.
    EmptyText,
    /// The tree builder was handed an empty leaf set.
    EmptyLeafSet,
    /// The leaf probabilities accumulated during a traversal fell outside [0.99, 1.01].
    ProbabilityDrift(f64),
}

impl Display for CodingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CodingError::EmptyText => {
                write!(f, "input text contains no recognized alphabet symbols")
            }
            CodingError::EmptyLeafSet => write!(f, "cannot build a huffman tree from no leaves"),
            CodingError::ProbabilityDrift(sum) => {
                write!(f, "leaf probabilities sum to {}, outside [0.99, 1.01]", sum)
            }
        }
    }
}

impl std::error::Error for CodingError {}
