use std::fs;

use anyhow::{Context, Result};
use fnv::FnvHashMap;
use log::debug;
use regex::Regex;

/// Lowercase word -> number of occurrences. Enumeration order is not part of
/// the contract.
pub type WordFrequencyMap = FnvHashMap<String, u64>;

/// Count word frequencies in the text file at `file_path`.
///
/// The file is read eagerly as UTF-8 and the handle released before any
/// tokenization happens. A missing or unreadable file, or one that is not
/// valid UTF-8, fails the call with the path in the error.
pub fn count_word_frequencies(file_path: &str) -> Result<WordFrequencyMap> {
    let text = fs::read_to_string(file_path)
        .with_context(|| format!("failed to read text file {}", file_path))?;
    debug!("read {} byte(s) from {}", text.len(), file_path);
    Ok(count_words(&text))
}

/// Tokenize `text` and count each word.
///
/// The whole text is lowercased first, then every ASCII punctuation character
/// is deleted outright, so `well-known` counts as `wellknown`. What remains
/// is split on runs of whitespace.
pub fn count_words(text: &str) -> WordFrequencyMap {
    let punct = Regex::new(r"[[:punct:]]").unwrap();
    let lowered = text.to_lowercase();
    let cleaned = punct.replace_all(&lowered, "");

    let mut frequencies = WordFrequencyMap::default();
    for word in cleaned.split_whitespace() {
        *frequencies.entry(word.to_owned()).or_insert(0) += 1;
    }
    frequencies
}
