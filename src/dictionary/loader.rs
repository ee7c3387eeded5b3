//! Dictionary loading and ordering
//!
//! A dictionary file is plain text holding whitespace-separated
//! `<word> <frequency>` pairs, for example:
//!
//! ```text
//! about 1226734006
//! other 978481319
//! which 810514085
//! ```

use std::cmp::Reverse;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::core::Word;

/// Word to frequency mapping
pub type Dictionary = FxHashMap<String, i64>;

/// Error type for dictionary loading
#[derive(Debug)]
pub enum DictionaryError {
    /// The file could not be opened or read
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Could not read dictionary {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Parse dictionary text
///
/// Pairs are read greedily. Parsing stops at the end of input, at a trailing
/// word with no frequency, or at the first frequency that is not an integer;
/// everything read up to that point is kept. When a word appears more than
/// once, its first frequency wins.
///
/// # Examples
/// ```
/// use wordle_sim::dictionary::loader::parse;
///
/// let dict = parse("crane 10 slate 20\nbogus x grate 5");
/// assert_eq!(dict.len(), 2);
/// assert_eq!(dict["slate"], 20);
/// assert!(!dict.contains_key("grate"));
/// ```
#[must_use]
pub fn parse(text: &str) -> Dictionary {
    let mut dictionary = Dictionary::default();
    let mut tokens = text.split_whitespace();

    while let Some(word) = tokens.next() {
        let Some(token) = tokens.next() else {
            log::warn!("dictionary ends with '{word}' and no frequency");
            break;
        };
        let Ok(frequency) = token.parse::<i64>() else {
            log::warn!("stopping at malformed frequency '{token}' for '{word}'");
            break;
        };
        dictionary.entry(word.to_string()).or_insert(frequency);
    }

    dictionary
}

/// Load a dictionary file
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_sim::dictionary::loader::load;
///
/// let dict = load("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionary = parse(&content);
    log::info!("loaded {} words from {}", dictionary.len(), path.display());
    Ok(dictionary)
}

/// Order dictionary entries by ascending frequency
///
/// The sort is stable, but entries with equal frequency come out in map
/// iteration order, which is unspecified.
#[must_use]
pub fn sort_by_frequency(dictionary: &Dictionary) -> Vec<(String, i64)> {
    let mut entries: Vec<(String, i64)> = dictionary
        .iter()
        .map(|(word, &frequency)| (word.clone(), frequency))
        .collect();
    entries.sort_by_key(|&(_, frequency)| frequency);
    entries
}

/// Valid 5-letter words, most frequent first
///
/// Entries that are not valid words are skipped. Ties are broken alphabetically
/// so the ranking is deterministic.
#[must_use]
pub fn ranked_words(dictionary: &Dictionary) -> Vec<Word> {
    let mut ranked: Vec<(i64, Word)> = dictionary
        .iter()
        .filter_map(|(text, &frequency)| Word::new(text.as_str()).ok().map(|w| (frequency, w)))
        .collect();
    ranked.sort_by(|(fa, wa), (fb, wb)| (Reverse(fa), wa).cmp(&(Reverse(fb), wb)));
    ranked.into_iter().map(|(_, word)| word).collect()
}
