//! Frequency listing command

use crate::dictionary::{Dictionary, sort_by_frequency};

/// Dictionary entries by ascending frequency, keeping only the `top` most
/// frequent when given
#[must_use]
pub fn sorted_entries(dictionary: &Dictionary, top: Option<usize>) -> Vec<(String, i64)> {
    let sorted = sort_by_frequency(dictionary);
    match top {
        Some(n) if n < sorted.len() => sorted[sorted.len() - n..].to_vec(),
        _ => sorted,
    }
}
