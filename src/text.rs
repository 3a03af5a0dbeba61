//! Tokenizing and counting words.

use indexmap::IndexMap;

/// Tokens shorter than this (in characters) are ignored.
pub const MIN_WORD_LEN: usize = 2;

/// Characters that may appear inside a word after lower-casing. Everything
/// else separates words.
pub fn is_word_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | 'а'..='я' | 'ё')
}

/// Word with its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedWord {
    pub text: String,
    pub count: u32,
}

/// Occurrence counts of normalized words. Iteration follows the order in
/// which words first appeared in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: IndexMap<String, u32>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of an already normalized word.
    pub fn record(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// Most frequent first; equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<RankedWord> {
        let mut ranked: Vec<RankedWord> = self
            .iter()
            .map(|(text, count)| RankedWord {
                text: text.to_string(),
                count,
            })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }
}

/// Lower-cases `text`, splits it on non-word characters and counts every
/// token of at least [`MIN_WORD_LEN`] characters.
pub fn tokenize(text: &str) -> FrequencyTable {
    let lowered = text.to_lowercase();
    let mut table = FrequencyTable::new();

    for token in lowered.split(|c: char| !is_word_char(c)) {
        if token.chars().count() >= MIN_WORD_LEN {
            table.record(token);
        }
    }
    table
}
