//! The tools module provides the supporting layers around the hufstat coding core.
//!
//! The tools are:
//! - alphabet: The fixed 32-symbol Russian coding alphabet, its theoretical letter
//!   frequencies, and input text normalization.
//! - cli: Command line interface for hufstat.
//! - freq_count: Letter and letter-pair probability tables measured from the text.
//! - report: Formats the computed coding tables into the human-readable report.
//!
pub mod alphabet;
pub mod cli;
pub mod freq_count;
pub mod report;
