//! Command Line Interpretation - uses the external CLAP crate.

use std::fmt::{Display, Formatter};

use clap::Parser;

/// Where the report is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    File(String),
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::File(name) => write!(f, "{}", name),
            Output::Stdout => write!(f, "stdout"),
        }
    }
}

/// All user settable options controlling a run.
#[derive(Debug)]
pub struct Opts {
    /// Name of the text file to analyze
    pub input: String,
    /// Where the report goes
    pub output: Output,
    /// Log level threshold
    pub level: log::LevelFilter,
}

const DEFAULT_REPORT: &str = "out.txt";

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Computes and compares Huffman coding statistics for Russian text",
    long_about = None)]
struct Args {
    /// Text file to analyze
    #[clap()]
    filename: String,

    /// Write the report to this file instead of out.txt
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Print the report to the terminal instead of a file
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Sets verbosity. -v shows progress, -vv debug detail, -vvv everything
    #[clap(short = 'v', parse(from_occurrences))]
    verbose: usize,
}

/// Copy command line stuff from clap's structure into our internal structure.
pub fn opts_init() -> Opts {
    let args = Args::parse();

    let output = if args.stdout {
        Output::Stdout
    } else {
        Output::File(args.output.unwrap_or_else(|| DEFAULT_REPORT.to_string()))
    };
    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    Opts {
        input: args.filename,
        output,
        level,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn output_displays_its_destination() {
        assert_eq!(Output::File("report.txt".to_string()).to_string(), "report.txt");
        assert_eq!(Output::Stdout.to_string(), "stdout");
    }
}
