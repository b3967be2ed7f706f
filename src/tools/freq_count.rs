//! Measures symbol and symbol-pair probabilities from normalized text, and turns
//! probability tables into the positive-probability leaf sets the tree builder accepts.

use log::info;
use rustc_hash::FxHashMap;

use super::alphabet::{index_of, ALPHABET};
use crate::huffman_coding::CodingError;

/// Returns the probability of each alphabet symbol in `text`, index-aligned with
/// [`ALPHABET`]. `text` must already be normalized; anything unrecognized is skipped.
/// Errors when no symbols are recognized at all - there is nothing to normalize by.
pub fn symbol_probs(text: &[char]) -> Result<[f64; 32], CodingError> {
    let mut probs = [0.0_f64; 32];
    let mut total = 0u64;
    for &symbol in text {
        if let Some(index) = index_of(symbol) {
            probs[index] += 1.0;
            total += 1;
        }
    }
    if total == 0 {
        return Err(CodingError::EmptyText);
    }
    for p in probs.iter_mut() {
        *p /= total as f64;
    }
    info!("Counted {} symbols", total);
    Ok(probs)
}

/// Returns the probability of every ordered alphabet pair in `text`, counting
/// non-overlapping pairs at even-aligned positions (0-1, 2-3, ...). A trailing odd symbol
/// is discarded. All 1024 pairs are seeded at probability 0 so unobserved pairs are
/// present in the table; counts are normalized by the exact number of pair positions
/// taken, so the table sums to 1.0 regardless of text length parity.
pub fn pair_probs(text: &[char]) -> Result<FxHashMap<(char, char), f64>, CodingError> {
    let mut pairs: FxHashMap<(char, char), f64> = FxHashMap::default();
    for &first in ALPHABET.iter() {
        for &second in ALPHABET.iter() {
            pairs.insert((first, second), 0.0);
        }
    }

    let total = text.len() / 2;
    if total == 0 {
        return Err(CodingError::EmptyText);
    }
    for chunk in text.chunks_exact(2) {
        // Normalized text only holds alphabet members, so the pair is pre-seeded.
        *pairs.entry((chunk[0], chunk[1])).or_insert(0.0) += 1.0;
    }
    for p in pairs.values_mut() {
        *p /= total as f64;
    }
    info!("Counted {} symbol pairs", total);
    Ok(pairs)
}

/// Leaf set for a single-symbol tree: alphabet symbols zipped with `probs`, minus
/// zero-probability entries, which cannot participate in a Huffman merge and would poison
/// the entropy sum.
pub fn symbol_leaves(probs: &[f64; 32]) -> Vec<(char, f64)> {
    ALPHABET
        .iter()
        .zip(probs.iter())
        .filter(|(_, &p)| p > 0.0)
        .map(|(&symbol, &p)| (symbol, p))
        .collect()
}

/// Leaf set for a pair tree: every pair observed in the text, sorted by symbol so the
/// builder sees a deterministic insertion order (hash map iteration order is not a
/// contract to rely on for tie-breaking).
pub fn pair_leaves(pairs: &FxHashMap<(char, char), f64>) -> Vec<((char, char), f64)> {
    let mut leaves: Vec<((char, char), f64)> = pairs
        .iter()
        .filter(|(_, &p)| p > 0.0)
        .map(|(&pair, &p)| (pair, p))
        .collect();
    leaves.sort_by_key(|&(pair, _)| pair);
    leaves
}
