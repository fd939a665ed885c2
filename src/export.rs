//! Standings output for export and the non-interactive CLI.

use std::fmt::Write as _;

use serde::Serialize;

use crate::data::country::country_name;
use crate::data::{ranked, MedalEntryWithTotal, SortKey};

/// One ranked row of the standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsRow {
    pub rank: usize,
    pub code: String,
    pub country: String,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: u32,
}

/// Ranked rows for `key`.
pub fn standings_rows(medals: &[MedalEntryWithTotal], key: SortKey) -> Vec<StandingsRow> {
    ranked(medals, key)
        .into_iter()
        .map(|(rank, entry)| StandingsRow {
            rank,
            code: entry.code().to_string(),
            country: country_name(entry.code()).to_string(),
            gold: entry.gold(),
            silver: entry.silver(),
            bronze: entry.bronze(),
            total: entry.total(),
        })
        .collect()
}

/// JSON document with the sort key and ranked rows.
pub fn standings_json(medals: &[MedalEntryWithTotal], key: SortKey) -> serde_json::Value {
    serde_json::json!({
        "sort": key.as_str(),
        "countries": medals.len(),
        "standings": standings_rows(medals, key),
    })
}

/// Plain-text table for terminals and pipes.
pub fn standings_text(medals: &[MedalEntryWithTotal], key: SortKey) -> String {
    let rows = standings_rows(medals, key);
    let name_width = rows
        .iter()
        .map(|r| r.country.chars().count())
        .max()
        .unwrap_or(0)
        .max("Country".len());

    let header = |k: SortKey| {
        if k == key {
            format!("{}*", k.label())
        } else {
            k.label().to_string()
        }
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<3}  {:<name_width$}  {:>7}  {:>7}  {:>7}  {:>7}",
        "Rank",
        "",
        "Country",
        header(SortKey::Gold),
        header(SortKey::Silver),
        header(SortKey::Bronze),
        header(SortKey::Total),
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:>4}  {:<3}  {:<name_width$}  {:>7}  {:>7}  {:>7}  {:>7}",
            row.rank, row.code, row.country, row.gold, row.silver, row.bronze, row.total,
        );
    }
    out
}
