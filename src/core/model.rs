//! Word index data model
//!
//! `Index` and `Count` are insertion-ordered associations: iteration always
//! follows the order in which each word was first recorded, so anything
//! derived from them (pair sequences, sort tie-breaks, JSON output) is
//! reproducible run to run.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Mapping from normalized word to the ordinal positions where it occurs.
///
/// Positions for each word are strictly increasing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    entries: Vec<(String, Vec<usize>)>,
    slots: HashMap<String, usize>,
}

impl Index {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
        }
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Positions recorded for `word`, if it occurs at all
    #[allow(dead_code)]
    pub fn get(&self, word: &str) -> Option<&[usize]> {
        self.slots
            .get(word)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    /// Iterate `(word, positions)` in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.entries
            .iter()
            .map(|(word, positions)| (word.as_str(), positions.as_slice()))
    }

    /// Words in first-occurrence order
    #[allow(dead_code)]
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(word, _)| word.as_str())
    }

    /// Total number of tokens the index accounts for
    pub fn token_count(&self) -> usize {
        self.entries.iter().map(|(_, positions)| positions.len()).sum()
    }

    /// Append `position` to the list for `word`, creating the list on first
    /// occurrence. Callers must record positions in increasing order.
    pub(crate) fn record(&mut self, word: String, position: usize) {
        match self.slots.get(&word) {
            Some(&slot) => self.entries[slot].1.push(position),
            None => {
                self.slots.insert(word.clone(), self.entries.len());
                self.entries.push((word, vec![position]));
            }
        }
    }

    fn insert_list(&mut self, word: String, positions: Vec<usize>) {
        self.slots.insert(word.clone(), self.entries.len());
        self.entries.push((word, positions));
    }
}

impl Serialize for Index {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, positions) in &self.entries {
            map.serialize_entry(word, positions)?;
        }
        map.end()
    }
}

struct IndexVisitor;

impl<'de> Visitor<'de> for IndexVisitor {
    type Value = Index;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object mapping each word to an array of positions")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Index, A::Error> {
        let mut index = Index::with_capacity(map.size_hint().unwrap_or(0));

        while let Some((word, positions)) = map.next_entry::<String, Vec<usize>>()? {
            if index.slots.contains_key(&word) {
                return Err(de::Error::custom(format!("duplicate word `{}`", word)));
            }
            if positions.is_empty() {
                return Err(de::Error::custom(format!("no positions for `{}`", word)));
            }
            if positions.windows(2).any(|pair| pair[0] >= pair[1]) {
                return Err(de::Error::custom(format!(
                    "positions for `{}` are not strictly increasing",
                    word
                )));
            }
            index.insert_list(word, positions);
        }

        Ok(index)
    }
}

impl<'de> Deserialize<'de> for Index {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(IndexVisitor)
    }
}

/// Mapping from word to its occurrence count, in the order of the index it
/// was derived from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Count {
    entries: Vec<(String, usize)>,
}

impl Count {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, word: String, count: usize) {
        self.entries.push((word, count));
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Linear lookup
    #[allow(dead_code)]
    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == word)
            .map(|(_, count)| *count)
    }

    /// Consume the count into a pair sequence, preserving its order
    pub fn into_pairs(self) -> Vec<WordCount> {
        self.entries
            .into_iter()
            .map(|(word, count)| WordCount { word, count })
            .collect()
    }
}

/// One `(word, count)` element of a pair sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    #[allow(dead_code)]
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.count)
    }
}
