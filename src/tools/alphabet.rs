//! The fixed coding alphabet: 31 Cyrillic letters plus the space character, each with a
//! published theoretical frequency for Russian prose. Probability vectors throughout the
//! crate are index-aligned with [`ALPHABET`].

/// The 32 alphabet symbols in index order. `ё` and `ъ` are not members - normalization
/// folds them onto `е` and `ь`.
pub const ALPHABET: [char; 32] = [
    'а', 'б', 'в', 'г', 'д', 'е', 'ж', 'з', 'и', 'й', 'к', 'л', 'м', 'н', 'о', 'п', 'р', 'с',
    'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ь', 'ы', 'э', 'ю', 'я', ' ',
];

/// Theoretical symbol frequencies for Russian prose, index-aligned with [`ALPHABET`].
/// The published figures sum to 1.001, inside the 0.01 tolerance used everywhere else.
pub const THEORY_PROBS: [f64; 32] = [
    0.062, 0.014, 0.038, 0.013, 0.025, 0.072, 0.007, 0.016, 0.062, 0.010, 0.028, 0.035, 0.026,
    0.053, 0.090, 0.023, 0.040, 0.045, 0.053, 0.021, 0.002, 0.009, 0.004, 0.012, 0.006, 0.003,
    0.014, 0.016, 0.003, 0.006, 0.018, 0.175,
];

/// Index of `symbol` in the alphabet, or None for a non-member. Linear scan; the alphabet
/// has 32 entries.
pub fn index_of(symbol: char) -> Option<usize> {
    ALPHABET.iter().position(|&member| member == symbol)
}

/// Reduce raw input text to a sequence over the alphabet: lowercase everything, fold the
/// orthographic variants `ё` -> `е` and `ъ` -> `ь`, and drop every other character that is
/// not an alphabet member (digits, punctuation, Latin letters, newlines).
pub fn normalize(text: &str) -> Vec<char> {
    let mut polished = Vec::with_capacity(text.len());
    for symbol in text.chars().flat_map(char::to_lowercase) {
        let folded = match symbol {
            'ё' => 'е',
            'ъ' => 'ь',
            other => other,
        };
        if index_of(folded).is_some() {
            polished.push(folded);
        }
    }
    polished
}
