//! Word frequency dictionaries
//!
//! Load `<word> <frequency>` files, order them, and turn them into the ranked word
//! lists strategies consume. A default dictionary is embedded in the binary.

mod embedded;
pub mod loader;

pub use embedded::{EMBEDDED, embedded};
pub use loader::{Dictionary, DictionaryError, load, parse, ranked_words, sort_by_frequency};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_parses_completely() {
        let pairs = EMBEDDED.split_whitespace().count() / 2;
        assert_eq!(embedded().len(), pairs);
    }

    #[test]
    fn embedded_words_are_valid() {
        let dict = embedded();
        assert_eq!(ranked_words(&dict).len(), dict.len());
    }

    #[test]
    fn embedded_ranking_starts_with_most_frequent() {
        let ranked = ranked_words(&embedded());
        assert_eq!(ranked[0].text(), "about");
    }

    #[test]
    fn embedded_sorted_ascending() {
        let sorted = sort_by_frequency(&embedded());
        assert!(sorted.windows(2).all(|pair| pair[0].1 <= pair[1].1));
        assert_eq!(sorted.last().map(|(w, _)| w.as_str()), Some("about"));
    }
}
