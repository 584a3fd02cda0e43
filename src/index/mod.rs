//! City Index Module
//!
//! Prefix tree over lowercased city names. Each terminal node maps region
//! codes to the attribute value, so one name can live in many regions.
//! The index is built once and then only read.

mod node;

use node::TrieNode;

/// Trie indexing `(region code, city name) -> value` for exact lookup.
///
/// * Names match case-insensitively; region codes match exactly.
/// * Re-inserting an existing `(region, name)` overwrites its value.
/// * Lookups walk the trie without allocating.
#[derive(Debug, Default)]
pub struct CityTrie {
    root: TrieNode,
    records: usize,
}

impl CityTrie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the value for `(region_code, name)`.
    ///
    /// Intermediate nodes are created on demand; this never fails.
    pub fn insert(&mut self, region_code: &str, name: &str, value: &str) {
        let mut node = &mut self.root;
        for c in name.chars().flat_map(char::to_lowercase) {
            node = node.children.entry(c).or_default();
        }

        let previous = node
            .values
            .insert(region_code.to_string(), value.to_string());
        if previous.is_none() {
            self.records += 1;
        }

        let already_listed = node
            .inserted
            .iter()
            .any(|(r, n)| r == region_code && n == name);
        if !already_listed {
            node.inserted
                .push((region_code.to_string(), name.to_string()));
        }
    }

    /// Finds the value stored for `(region_code, name)`.
    ///
    /// Returns `None` when the name is not in the trie or the name exists but
    /// not for this region.
    pub fn search(&self, region_code: &str, name: &str) -> Option<&str> {
        let mut node = &self.root;
        for c in name.chars().flat_map(char::to_lowercase) {
            node = node.children.get(&c)?;
        }
        node.values.get(region_code).map(String::as_str)
    }

    /// Lists every inserted `(region code, name)` pair in original casing.
    ///
    /// Pre-order walk with children in ascending character order, so the
    /// result is stable for a given set of inserts. Meant for offline query
    /// generation, not the lookup path.
    pub fn enumerate_all(&self) -> Vec<(String, String)> {
        let mut result = Vec::new();
        let mut stack = vec![&self.root];

        while let Some(node) = stack.pop() {
            result.extend(node.inserted.iter().cloned());
            // Reverse so the smallest character is visited next.
            stack.extend(node.children.values().rev());
        }

        result
    }

    /// Number of distinct `(region code, lowercased name)` records.
    pub fn len(&self) -> usize {
        self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records == 0
    }

    /// Number of distinct names that end in at least one record.
    pub fn distinct_names(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if node.is_terminal() {
                count += 1;
            }
            stack.extend(node.children.values());
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CityTrie {
        let mut trie = CityTrie::new();
        trie.insert("US", "Springfield", "167882");
        trie.insert("GB", "London", "8982000");
        trie.insert("CA", "London", "383822");
        trie.insert("US", "Spring", "62559");
        trie
    }

    #[test]
    fn test_search_any_casing() {
        let trie = sample();
        assert_eq!(trie.search("US", "Springfield"), Some("167882"));
        assert_eq!(trie.search("US", "SPRINGFIELD"), Some("167882"));
        assert_eq!(trie.search("US", "springFIELD"), Some("167882"));
    }

    #[test]
    fn test_search_shared_name_across_regions() {
        let trie = sample();
        assert_eq!(trie.search("GB", "london"), Some("8982000"));
        assert_eq!(trie.search("CA", "london"), Some("383822"));
    }

    #[test]
    fn test_search_misses() {
        let trie = sample();
        // Never inserted
        assert_eq!(trie.search("US", "Chicago"), None);
        // Prefix of an inserted name, but no record of its own
        assert_eq!(trie.search("US", "Spr"), None);
        // Longer than any path
        assert_eq!(trie.search("US", "Springfields"), None);
        // Name exists, region does not
        assert_eq!(trie.search("FR", "London"), None);
        // Region codes are case-sensitive
        assert_eq!(trie.search("gb", "London"), None);
    }

    #[test]
    fn test_empty_trie() {
        let trie = CityTrie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.search("US", "anything"), None);
        assert!(trie.enumerate_all().is_empty());
    }

    #[test]
    fn test_insert_overwrites_value() {
        let mut trie = sample();
        trie.insert("GB", "LONDON", "9000000");

        assert_eq!(trie.search("GB", "London"), Some("9000000"));
        assert_eq!(trie.len(), 4);
    }

    #[test]
    fn test_identical_insert_listed_once() {
        let mut trie = CityTrie::new();
        trie.insert("GB", "London", "1");
        trie.insert("GB", "London", "2");

        assert_eq!(trie.enumerate_all().len(), 1);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_enumerate_all_preorder() {
        let trie = sample();
        let all = trie.enumerate_all();

        let expected: Vec<(String, String)> = [
            ("GB", "London"),
            ("CA", "London"),
            ("US", "Spring"),
            ("US", "Springfield"),
        ]
        .iter()
        .map(|(r, n)| (r.to_string(), n.to_string()))
        .collect();

        assert_eq!(all, expected);
    }

    #[test]
    fn test_enumerate_keeps_original_casing() {
        let mut trie = CityTrie::new();
        trie.insert("BR", "São Paulo", "12325000");

        assert_eq!(
            trie.enumerate_all(),
            vec![("BR".to_string(), "São Paulo".to_string())]
        );
        assert_eq!(trie.search("BR", "SÃO PAULO"), Some("12325000"));
    }

    #[test]
    fn test_distinct_names() {
        let trie = sample();
        assert_eq!(trie.len(), 4);
        assert_eq!(trie.distinct_names(), 3);
    }

    #[test]
    fn test_empty_name_lives_at_root() {
        let mut trie = CityTrie::new();
        trie.insert("US", "", "0");
        assert_eq!(trie.search("US", ""), Some("0"));
    }
}
