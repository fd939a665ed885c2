//! Standings order.
//!
//! Every sort key orders descending by its own column and breaks ties on a
//! second column. Entries that still compare equal keep their input order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::medal::MedalEntryWithTotal;

/// Column used to order the standings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Total medals, ties broken by gold.
    Total,
    /// Gold medals, ties broken by silver.
    #[default]
    Gold,
    /// Silver medals, ties broken by gold.
    Silver,
    /// Bronze medals, ties broken by gold.
    Bronze,
}

impl SortKey {
    /// All keys in table column order.
    pub const ALL: [SortKey; 4] = [SortKey::Gold, SortKey::Silver, SortKey::Bronze, SortKey::Total];

    /// Cycle to the next sort key in column order.
    pub fn next(self) -> Self {
        match self {
            SortKey::Gold => SortKey::Silver,
            SortKey::Silver => SortKey::Bronze,
            SortKey::Bronze => SortKey::Total,
            SortKey::Total => SortKey::Gold,
        }
    }

    /// Query parameter value for this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Total => "total",
            SortKey::Gold => "gold",
            SortKey::Silver => "silver",
            SortKey::Bronze => "bronze",
        }
    }

    /// Column header label.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Total => "Total",
            SortKey::Gold => "Gold",
            SortKey::Silver => "Silver",
            SortKey::Bronze => "Bronze",
        }
    }

    /// Parse a query value, falling back to the default key.
    pub fn from_query(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    fn primary(&self, entry: &MedalEntryWithTotal) -> u32 {
        match self {
            SortKey::Total => entry.total(),
            SortKey::Gold => entry.gold(),
            SortKey::Silver => entry.silver(),
            SortKey::Bronze => entry.bronze(),
        }
    }

    fn tie_break(&self, entry: &MedalEntryWithTotal) -> u32 {
        match self {
            SortKey::Gold => entry.silver(),
            SortKey::Total | SortKey::Silver | SortKey::Bronze => entry.gold(),
        }
    }

    /// Compare two entries for this key. `Less` means `a` ranks higher.
    pub fn compare(&self, a: &MedalEntryWithTotal, b: &MedalEntryWithTotal) -> Ordering {
        self.primary(b)
            .cmp(&self.primary(a))
            .then_with(|| self.tie_break(b).cmp(&self.tie_break(a)))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a sort key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "total" => Ok(SortKey::Total),
            "gold" => Ok(SortKey::Gold),
            "silver" => Ok(SortKey::Silver),
            "bronze" => Ok(SortKey::Bronze),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}

/// Return the entries ordered for the given key.
pub fn sort_medals(entries: &[MedalEntryWithTotal], key: SortKey) -> Vec<MedalEntryWithTotal> {
    let mut sorted = entries.to_vec();
    // sort_by is stable, so residual ties keep input order
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}

/// Return the ordered entries paired with their 1-based rank.
pub fn ranked(entries: &[MedalEntryWithTotal], key: SortKey) -> Vec<(usize, MedalEntryWithTotal)> {
    sort_medals(entries, key)
        .into_iter()
        .enumerate()
        .map(|(i, entry)| (i + 1, entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::medal::MedalEntry;

    fn entry(code: &str, gold: u32, silver: u32, bronze: u32) -> MedalEntryWithTotal {
        MedalEntryWithTotal::derive(MedalEntry::new(code, gold, silver, bronze)).unwrap()
    }

    fn sample() -> Vec<MedalEntryWithTotal> {
        vec![
            entry("USA", 9, 7, 12),
            entry("RUS", 13, 11, 9),
            entry("NOR", 11, 5, 10),
        ]
    }

    fn codes(entries: &[MedalEntryWithTotal]) -> Vec<&str> {
        entries.iter().map(|e| e.code()).collect()
    }

    #[test]
    fn test_sort_by_gold() {
        let sorted = sort_medals(&sample(), SortKey::Gold);
        assert_eq!(codes(&sorted), vec!["RUS", "NOR", "USA"]);
    }

    #[test]
    fn test_sort_by_total() {
        let sorted = sort_medals(&sample(), SortKey::Total);
        assert_eq!(codes(&sorted), vec!["RUS", "USA", "NOR"]);
        let totals: Vec<u32> = sorted.iter().map(|e| e.total()).collect();
        assert_eq!(totals, vec![33, 28, 26]);
    }

    #[test]
    fn test_sort_by_silver_and_bronze() {
        assert_eq!(
            codes(&sort_medals(&sample(), SortKey::Silver)),
            vec!["RUS", "USA", "NOR"]
        );
        assert_eq!(
            codes(&sort_medals(&sample(), SortKey::Bronze)),
            vec!["USA", "NOR", "RUS"]
        );
    }

    #[test]
    fn test_gold_ties_broken_by_silver() {
        let entries = vec![entry("AAA", 5, 1, 9), entry("BBB", 5, 3, 0)];
        assert_eq!(codes(&sort_medals(&entries, SortKey::Gold)), vec!["BBB", "AAA"]);
    }

    #[test]
    fn test_total_ties_broken_by_gold() {
        let entries = vec![entry("AAA", 1, 5, 4), entry("BBB", 4, 3, 3)];
        assert_eq!(codes(&sort_medals(&entries, SortKey::Total)), vec!["BBB", "AAA"]);
    }

    #[test]
    fn test_silver_and_bronze_ties_broken_by_gold() {
        let entries = vec![entry("AAA", 1, 4, 4), entry("BBB", 2, 4, 4)];
        assert_eq!(codes(&sort_medals(&entries, SortKey::Silver)), vec!["BBB", "AAA"]);
        assert_eq!(codes(&sort_medals(&entries, SortKey::Bronze)), vec!["BBB", "AAA"]);
    }

    #[test]
    fn test_residual_ties_keep_input_order() {
        // Equal on primary and tie-break for every key
        let entries = vec![
            entry("CCC", 2, 2, 2),
            entry("AAA", 2, 2, 2),
            entry("BBB", 2, 2, 2),
        ];
        for key in SortKey::ALL {
            assert_eq!(codes(&sort_medals(&entries, key)), vec!["CCC", "AAA", "BBB"]);
        }

        // Gold ties with equal silver keep order even when bronze differs
        let entries = vec![entry("XXX", 3, 1, 0), entry("YYY", 3, 1, 9)];
        assert_eq!(codes(&sort_medals(&entries, SortKey::Gold)), vec!["XXX", "YYY"]);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let input = sample();
        let _ = sort_medals(&input, SortKey::Gold);
        assert_eq!(codes(&input), vec!["USA", "RUS", "NOR"]);
    }

    #[test]
    fn test_ranked_is_one_based() {
        let ranks: Vec<(usize, String)> = ranked(&sample(), SortKey::Gold)
            .into_iter()
            .map(|(rank, e)| (rank, e.code().to_string()))
            .collect();
        assert_eq!(
            ranks,
            vec![(1, "RUS".to_string()), (2, "NOR".to_string()), (3, "USA".to_string())]
        );
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("total".parse::<SortKey>(), Ok(SortKey::Total));
        assert_eq!("bronze".parse::<SortKey>(), Ok(SortKey::Bronze));
        assert!("GOLD".parse::<SortKey>().is_err());
        assert!("name".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_from_query_falls_back_to_gold() {
        assert_eq!(SortKey::from_query(None), SortKey::Gold);
        assert_eq!(SortKey::from_query(Some("bogus")), SortKey::Gold);
        assert_eq!(SortKey::from_query(Some("")), SortKey::Gold);
        assert_eq!(SortKey::from_query(Some("silver")), SortKey::Silver);
    }

    #[test]
    fn test_sort_key_cycle() {
        let mut key = SortKey::default();
        let mut seen = vec![key];
        for _ in 0..3 {
            key = key.next();
            seen.push(key);
        }
        assert_eq!(seen, SortKey::ALL.to_vec());
        assert_eq!(key.next(), SortKey::Gold);
    }
}
