//! Formats the three computed coding tables into the human-readable report.

use std::io::{self, Write};

use crate::huffman_coding::code_table::{
    compare_avg_len, compare_pair_avg_len, CodeTable, Verdict,
};

/// Write the full comparison report. `theoretical` and `empirical` are the single-letter
/// tables (both evaluated against the text's real letter mix), `pairs` is the two-letter
/// table.
pub fn write_report<W: Write>(
    w: &mut W,
    theoretical: &CodeTable<char>,
    empirical: &CodeTable<char>,
    pairs: &CodeTable<(char, char)>,
) -> io::Result<()> {
    writeln!(w, "Result:\n")?;

    write_stats(w, "Theoretical letter frequencies", theoretical.entropy, theoretical.avg_word_len)?;
    write_stats(w, "Letter frequencies measured from the text", empirical.entropy, empirical.avg_word_len)?;

    let line = match compare_avg_len(theoretical.avg_word_len, empirical.avg_word_len) {
        Verdict::LeftBetter => "Using the theoretical frequencies turned out better.",
        Verdict::RightBetter => "Measuring frequencies from the text turned out better.",
        Verdict::Tie => "Both methods gave the same result.",
    };
    writeln!(w, "{}\n", line)?;

    write_stats(w, "Two-dimensional Huffman code", pairs.entropy, pairs.avg_word_len)?;
    writeln!(
        w,
        "When comparing against the one-dimensional code, note that every word of the two-dimensional code covers 2 symbols."
    )?;
    let line = match compare_pair_avg_len(empirical.avg_word_len, pairs.avg_word_len) {
        Verdict::LeftBetter => "Using the one-dimensional code turned out better.",
        Verdict::RightBetter => "Using the two-dimensional code turned out better.",
        Verdict::Tie => "Both methods gave the same result.",
    };
    writeln!(w, "{}\n", line)?;
    Ok(())
}

fn write_stats<W: Write>(w: &mut W, title: &str, entropy: f64, avg_word_len: f64) -> io::Result<()> {
    writeln!(
        w,
        "{}:\nEntropy: {:.3}.\nAverage word length: {:.3}.\n",
        title, entropy, avg_word_len
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use rustc_hash::FxHashMap;

    fn table<S: Copy + Eq + std::hash::Hash>(entropy: f64, avg: f64) -> CodeTable<S> {
        CodeTable {
            codes: FxHashMap::default(),
            entropy,
            avg_word_len: avg,
        }
    }

    #[test]
    fn report_names_the_winning_methods() {
        let theoretical = table(4.3, 4.6);
        let empirical = table(4.3, 4.4);
        // 7.4 / 2 = 3.7 per symbol beats 4.4.
        let pairs = table(7.9, 7.4);

        let mut out = Vec::new();
        write_report(&mut out, &theoretical, &empirical, &pairs).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Entropy: 4.300."));
        assert!(text.contains("Average word length: 4.400."));
        assert!(text.contains("Measuring frequencies from the text turned out better."));
        assert!(text.contains("Using the two-dimensional code turned out better."));
    }

    #[test]
    fn report_states_ties() {
        let theoretical = table::<char>(4.3, 4.5);
        let empirical = table::<char>(4.3, 4.5);
        let pairs = table::<(char, char)>(8.6, 9.0);

        let mut out = Vec::new();
        write_report(&mut out, &theoretical, &empirical, &pairs).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Both methods gave the same result."));
    }
}
