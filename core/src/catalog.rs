use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Words used on the default 5×5 board, one per pair.
pub const DEFAULT_WORDS: [&str; 12] = [
    "apple", "banana", "cherry", "grape", "lemon", "mango", "melon", "olive", "peach", "pear",
    "plum", "kiwi",
];

/// Mapping of entry name to the word displayed on its cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
}

impl Catalog {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    /// Builds a catalog where each word is its own entry name.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = words
            .into_iter()
            .map(|word| {
                let word = word.into();
                (word.clone(), word)
            })
            .collect();
        Self { entries }
    }

    pub fn insert(&mut self, name: impl Into<String>, word: impl Into<String>) {
        self.entries.insert(name.into(), word.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct words, ordered by the name of the first entry holding them.
    pub fn words(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.entries
            .values()
            .filter(|word| seen.insert(word.as_str()))
            .map(ToString::to_string)
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_words(DEFAULT_WORDS)
    }
}
