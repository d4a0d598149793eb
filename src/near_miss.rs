//! Dictionary lookups that tolerate one swapped pair of adjacent letters.

use crate::error::ProbeError;
use crate::map::ProbeHashMap;
use crate::probe::ProbeStats;
use std::io::BufRead;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Table(#[from] ProbeError),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Verdict {
    /// The word is in the set as given.
    Found,
    /// Swapping one adjacent pair gives this word from the set.
    Transposed(String),
    Unknown,
}

/// A set of words, stored as keys of a `ProbeHashMap` with unit values.
pub struct WordSet {
    words: ProbeHashMap<String, ()>,
}

impl WordSet {
    pub fn new() -> Self {
        Self {
            words: ProbeHashMap::new(),
        }
    }

    /// Reads one word per line; surrounding whitespace is trimmed and blank
    /// lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut set = Self::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                set.insert(word)?;
            }
        }
        Ok(set)
    }

    /// Adds `word`; returns false if it was already present.
    pub fn insert(&mut self, word: &str) -> Result<bool, ProbeError> {
        Ok(self.words.insert(word.to_string(), ())?.is_none())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.words.capacity()
    }

    pub fn probe_stats(&self) -> ProbeStats {
        self.words.probe_stats()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    /// Looks up `word`, then each single adjacent transposition of it from
    /// left to right.
    pub fn check(&self, word: &str) -> Verdict {
        if self.contains(word) {
            return Verdict::Found;
        }
        let mut chars: Vec<char> = word.chars().collect();
        for i in 0..chars.len().saturating_sub(1) {
            if chars[i] == chars[i + 1] {
                continue;
            }
            chars.swap(i, i + 1);
            let candidate: String = chars.iter().collect();
            if self.contains(&candidate) {
                return Verdict::Transposed(candidate);
            }
            chars.swap(i, i + 1);
        }
        Verdict::Unknown
    }
}

impl Default for WordSet {
    fn default() -> Self {
        Self::new()
    }
}
