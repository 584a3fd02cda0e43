//! City Key Module
//!
//! Compound (region code, city name) key shared by every cache strategy.

use std::fmt;

// == City Key ==
/// Identifies one record: a region code plus a city name.
///
/// The name is lowercased on construction so `"Paris"` and `"PARIS"` hash and
/// compare equal. The region code is kept exactly as given, so `"FR"` and
/// `"fr"` are distinct keys, matching how the index stores region codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CityKey {
    region_code: String,
    name: String,
}

impl CityKey {
    // == Constructor ==
    /// Builds a key, normalizing the name to lowercase one character at a
    /// time, the same folding the index applies.
    pub fn new(region_code: impl Into<String>, name: &str) -> Self {
        Self {
            region_code: region_code.into(),
            name: name.chars().flat_map(char::to_lowercase).collect(),
        }
    }

    /// Region code, exactly as supplied.
    pub fn region_code(&self) -> &str {
        &self.region_code
    }

    /// Lowercased city name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for CityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.region_code)
    }
}
