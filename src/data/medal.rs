//! Medal entries and response decoding.
//!
//! Turns a raw `/api/medals` body into validated entries with their
//! derived totals. Individual records that fail validation are skipped;
//! only a body that is not a JSON array fails the whole decode.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::source::FetchError;

/// One country's raw medal counts, as served by the medal store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalEntry {
    pub code: String,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl MedalEntry {
    pub fn new(code: &str, gold: u32, silver: u32, bronze: u32) -> Self {
        Self {
            code: code.to_string(),
            gold,
            silver,
            bronze,
        }
    }
}

/// A medal entry with its total medal count.
///
/// The total is computed once when the entry is built and the counts
/// cannot be changed afterwards, so `total == gold + silver + bronze`
/// always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedalEntryWithTotal {
    code: String,
    gold: u32,
    silver: u32,
    bronze: u32,
    total: u32,
}

impl MedalEntryWithTotal {
    /// Derive the total for an entry.
    ///
    /// Returns `None` if the sum does not fit in a `u32`.
    pub fn derive(entry: MedalEntry) -> Option<Self> {
        let total = entry.gold.checked_add(entry.silver)?.checked_add(entry.bronze)?;
        Some(Self {
            code: entry.code,
            gold: entry.gold,
            silver: entry.silver,
            bronze: entry.bronze,
            total,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn silver(&self) -> u32 {
        self.silver
    }

    pub fn bronze(&self) -> u32 {
        self.bronze
    }

    pub fn total(&self) -> u32 {
        self.total
    }
}

/// Normalize a country code to three uppercase ASCII letters.
fn normalize_code(code: &str) -> Option<String> {
    let code = code.trim().to_ascii_uppercase();
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
        Some(code)
    } else {
        None
    }
}

/// Decode a medal response body.
///
/// Fails with [`FetchError::Format`] if the body is not JSON or not an
/// array. Records with missing or mistyped fields, negative or fractional
/// counts, malformed codes, duplicate codes, or an overflowing total are
/// dropped with a warning.
pub fn decode_medals(body: &[u8]) -> Result<Vec<MedalEntryWithTotal>, FetchError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| FetchError::Format(format!("response is not valid JSON ({})", e)))?;

    let Value::Array(records) = value else {
        return Err(FetchError::Format(
            "expected an array of medal data".to_string(),
        ));
    };

    let total_records = records.len();
    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(total_records);

    for (index, record) in records.into_iter().enumerate() {
        let mut entry: MedalEntry = match serde_json::from_value(record) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(index, error = %e, "skipping malformed medal record");
                continue;
            }
        };

        let Some(code) = normalize_code(&entry.code) else {
            warn!(index, code = %entry.code, "skipping medal record with invalid country code");
            continue;
        };
        entry.code = code;

        if seen.contains(&entry.code) {
            warn!(index, code = %entry.code, "skipping duplicate medal record");
            continue;
        }

        let code = entry.code.clone();
        match MedalEntryWithTotal::derive(entry) {
            // Only kept records claim their code
            Some(with_total) => {
                seen.insert(code);
                entries.push(with_total);
            }
            None => warn!(index, code = %code, "skipping medal record with overflowing total"),
        }
    }

    debug!(
        kept = entries.len(),
        skipped = total_records - entries.len(),
        "decoded medal records"
    );

    Ok(entries)
}
