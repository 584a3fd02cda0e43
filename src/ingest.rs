//! CSV Ingestion Module
//!
//! Reads `region,name,value` rows into records and builds the city index.
//! The value column is passed through as text; nothing is parsed numerically.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{info, warn};

use crate::error::{LookupError, Result};
use crate::index::CityTrie;

// == City Record ==
/// One ingested row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityRecord {
    pub region_code: String,
    pub name: String,
    pub value: String,
}

/// Parses records from CSV text.
///
/// The first line is a header and is skipped. Columns past the third are
/// ignored, a missing value column becomes an empty string, and rows without
/// a name column are skipped with a warning. Bytes that are not valid UTF-8
/// are replaced with U+FFFD rather than failing the load.
pub fn parse_records<R: BufRead>(mut reader: R) -> io::Result<Vec<CityRecord>> {
    let mut records = Vec::new();
    let mut skipped = 0usize;
    let mut lossy = 0usize;
    let mut buf = Vec::new();

    for idx in 0usize.. {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if idx == 0 {
            continue;
        }

        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            warn!(line = idx + 1, "Row is not valid UTF-8, replacing bad bytes");
            lossy += 1;
        }
        let line = line.trim_end_matches('\n').trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let mut columns = line.splitn(4, ',');
        let region_code = columns.next().unwrap_or_default();
        let Some(name) = columns.next() else {
            warn!(line = idx + 1, "Skipping row without a name column");
            skipped += 1;
            continue;
        };
        let value = columns.next().unwrap_or_default();

        records.push(CityRecord {
            region_code: region_code.to_string(),
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    if skipped > 0 {
        warn!("Skipped {} malformed rows", skipped);
    }
    if lossy > 0 {
        warn!("Decoded {} rows with invalid UTF-8", lossy);
    }

    Ok(records)
}

/// Inserts every record into a fresh trie.
pub fn build_index(records: &[CityRecord]) -> CityTrie {
    let mut trie = CityTrie::new();
    for record in records {
        trie.insert(&record.region_code, &record.name, &record.value);
    }
    trie
}

/// Loads a CSV file and builds the city index from it.
pub fn load_index(path: impl AsRef<Path>) -> Result<CityTrie> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LookupError::io(path, e))?;
    let records = parse_records(BufReader::new(file)).map_err(|e| LookupError::io(path, e))?;

    let trie = build_index(&records);
    info!(
        "Loaded {} rows from {} into index ({} records, {} distinct names)",
        records.len(),
        path.display(),
        trie.len(),
        trie.distinct_names()
    );

    Ok(trie)
}
