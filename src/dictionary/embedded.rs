//! Embedded dictionary
//!
//! Common five-letter words with corpus frequencies, compiled into the binary.

use super::loader::{Dictionary, parse};

/// Raw text of the embedded dictionary, in the regular file format
pub const EMBEDDED: &str = include_str!("../../data/dictionary.txt");

/// Parse the embedded dictionary
#[must_use]
pub fn embedded() -> Dictionary {
    parse(EMBEDDED)
}
