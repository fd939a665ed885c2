//! Medal data models and processing.
//!
//! ## Submodules
//!
//! - [`medal`]: Entry types and lenient decoding of `/api/medals` bodies
//! - [`sort`]: Sort keys and the standings order
//! - [`location`]: URL state for the active sort key
//! - [`country`]: Country names and flag indicators
//!
//! ## Data Flow
//!
//! ```text
//! /api/medals body (raw JSON)
//!        │
//!        ▼
//! decode_medals()  ── skips invalid records, derives totals
//!        │
//!        ▼
//! Vec<MedalEntryWithTotal> (cached by FetchPipeline)
//!        │
//!        ▼
//! sort_medals(entries, SortKey)  ◀── Location::sort_key()
//! ```

pub mod country;
pub mod location;
pub mod medal;
pub mod sort;

pub use location::Location;
pub use medal::{decode_medals, MedalEntry, MedalEntryWithTotal};
pub use sort::{ranked, sort_medals, SortKey};
