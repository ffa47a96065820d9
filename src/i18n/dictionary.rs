//! Translation dictionaries: nested string trees addressed by dotted keys.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A value stored under a key: either display text or a nested section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// Leaf display text.
    Text(String),
    /// Nested group of keys (e.g. `"nav"` in `"nav.home"`).
    Section(Dictionary),
}

/// Nested mapping from key segment to [`Entry`].
///
/// Deserializes from a JSON object whose values are strings or objects.
/// Any other JSON value is rejected at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: BTreeMap<String, Entry>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dictionary from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Insert leaf text under a single segment.
    pub fn insert_text(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), Entry::Text(text.into()));
    }

    /// Insert a nested section under a single segment.
    pub fn insert_section(&mut self, key: impl Into<String>, section: Dictionary) {
        self.entries.insert(key.into(), Entry::Section(section));
    }

    /// Look up one segment at this level.
    pub fn get(&self, segment: &str) -> Option<&Entry> {
        self.entries.get(segment)
    }

    /// Number of entries at this level.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Walk `segments` from this dictionary down to the addressed entry.
    ///
    /// Returns `None` as soon as a segment is absent, or when a non-final
    /// segment lands on leaf text (text has no children to descend into).
    pub fn walk(&self, segments: &[&str]) -> Option<&Entry> {
        let (last, parents) = segments.split_last()?;
        let mut current = self;
        for segment in parents {
            match current.get(segment)? {
                Entry::Section(section) => current = section,
                Entry::Text(_) => return None,
            }
        }
        current.get(last)
    }

    /// Every leaf key in dotted form, sorted.
    pub fn leaf_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        self.collect_leaf_keys("", &mut keys);
        keys
    }

    fn collect_leaf_keys(&self, prefix: &str, out: &mut Vec<String>) {
        for (segment, entry) in &self.entries {
            let path = if prefix.is_empty() {
                segment.clone()
            } else {
                format!("{}.{}", prefix, segment)
            };
            match entry {
                Entry::Text(_) => out.push(path),
                Entry::Section(section) => section.collect_leaf_keys(&path, out),
            }
        }
    }
}
