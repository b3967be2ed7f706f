//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::error::Error;
use std::fs::{self, File};
use std::io::{self, BufWriter};

use log::info;
use rustc_hash::FxHashMap;
use simplelog::{Config, TermLogger, TerminalMode};

use hufstat::huffman_coding::code_table::CodeTable;
use hufstat::huffman_coding::huffman::build_tree;
use hufstat::tools::alphabet::{normalize, ALPHABET, THEORY_PROBS};
use hufstat::tools::cli::{opts_init, Output};
use hufstat::tools::freq_count::{pair_leaves, pair_probs, symbol_leaves, symbol_probs};
use hufstat::tools::report::write_report;

fn main() -> Result<(), Box<dyn Error>> {
    let opts = opts_init();

    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        opts.level,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    let raw = fs::read_to_string(&opts.input)?;
    let text = normalize(&raw);
    info!(
        "Normalized {} of {} input characters from {}",
        text.len(),
        raw.chars().count(),
        opts.input
    );

    // The text's real letter mix. Both single-letter tables report their average word
    // length against this same distribution, so the two figures are comparable.
    let real_probs = symbol_probs(&text)?;
    let true_freqs: FxHashMap<char, f64> = ALPHABET.iter().copied().zip(real_probs).collect();

    let root = build_tree(symbol_leaves(&THEORY_PROBS))?;
    let theoretical = CodeTable::from_tree(&root, &true_freqs)?;

    let root = build_tree(symbol_leaves(&real_probs))?;
    let empirical = CodeTable::from_tree(&root, &true_freqs)?;

    // For the pair table the build distribution is the true distribution.
    let pair_freqs = pair_probs(&text)?;
    let root = build_tree(pair_leaves(&pair_freqs))?;
    let pairs = CodeTable::from_tree(&root, &pair_freqs)?;

    match &opts.output {
        Output::Stdout => write_report(&mut io::stdout().lock(), &theoretical, &empirical, &pairs)?,
        Output::File(name) => {
            let mut out = BufWriter::new(File::create(name)?);
            write_report(&mut out, &theoretical, &empirical, &pairs)?;
            info!("Report written to {}", opts.output);
        }
    }

    info!("Done.\n");
    Ok(())
}
