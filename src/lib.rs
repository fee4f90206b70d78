#![forbid(unsafe_code)]
pub mod pricing;
pub mod wordfreq;

pub use pricing::{sum_prices, PricedRecord};
pub use wordfreq::{count_word_frequencies, count_words, WordFrequencyMap};
