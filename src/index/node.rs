//! Node implementation for the city trie.

use std::collections::{BTreeMap, HashMap};

/// A node in the city trie.
///
/// Each node represents one lowercase character of a city name and owns its
/// children outright. Terminal nodes carry the per-region values.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Children keyed by character, kept sorted for stable enumeration
    pub children: BTreeMap<char, TrieNode>,

    /// Region code -> attribute value for the name ending here
    pub values: HashMap<String, String>,

    /// (region code, original-cased name) pairs inserted at this node
    pub inserted: Vec<(String, String)>,
}

impl TrieNode {
    /// Whether any record ends at this node.
    pub fn is_terminal(&self) -> bool {
        !self.values.is_empty()
    }
}
