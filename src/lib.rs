//! Hufstat computes and compares entropy-coding statistics for Russian-language text.
//!
//! Three Huffman coding tables are built per run: one from a fixed table of theoretical
//! letter frequencies, one from letter frequencies measured from the input text, and one
//! from frequencies of adjacent letter pairs measured from the text. For each, the report
//! shows the entropy of the distribution and the average code word length the code would
//! achieve on the real text, then states which method performs best.
//!
//! Hufstat computes statistics only. It never encodes or decodes an actual bitstream.
//!
pub mod huffman_coding;
pub mod tools;
