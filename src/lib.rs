//! # medal-count
//!
//! Olympic medal standings: a mock medal API and a sortable, themeable
//! terminal table.
//!
//! The crate fetches per-country medal counts, derives totals, ranks the
//! countries by a user-selected column, and renders the result either in
//! a terminal UI or as a server-rendered HTML page.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │ (sorting)│    │(render) │    │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌──────────┐    ┌─────────┐                                │
//! │  │ pipeline │───▶│ source  │◀── HttpSource | FileSource |    │
//! │  │ (cache)  │    │ (input) │    ChannelSource               │
//! │  └──────────┘    └─────────┘                                │
//! └─────────────────────────────────────────────────────────────┘
//!                          │ GET /api/medals
//!                          ▼
//!                  ┌──────────────┐
//!                  │    server    │  axum: JSON API + HTML page
//!                  └──────────────┘
//! ```
//!
//! - **[`app`]**: Application state, sort selection, and user interaction logic
//! - **[`pipeline`]**: One cached fetch with loading and error state
//! - **[`source`]**: Data source abstraction ([`DataSource`] trait) with
//!   implementations for HTTP, local files, and channels
//! - **[`data`]**: Medal records, total derivation, the sort engine, country
//!   names and flags, and the [`Location`] that mirrors the sort into a URL
//! - **[`ui`]**: Terminal rendering using ratatui, with light and dark themes
//! - **[`server`]**: The mock medal API and HTML standings page
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Serve the mock API and HTML page on http://127.0.0.1:3000
//! medal-count serve
//!
//! # Terminal table against the running server
//! medal-count view --endpoint http://127.0.0.1:3000/api/medals
//!
//! # Read the data file directly, starting sorted by total
//! medal-count view --file public/medals.json --location '?sort=total'
//! ```
//!
//! ### As a library with file source
//!
//! ```
//! use medal_count::{App, FileSource, Location, Theme, ThemeStore};
//! use url::Url;
//!
//! let source = Box::new(FileSource::new("public/medals.json"));
//! let location = Location::new(Url::parse("http://localhost:3000/").unwrap());
//! let app = App::new(source, location, Theme::light(), ThemeStore::disabled());
//! ```
//!
//! ### Sorting without a UI
//!
//! ```
//! use medal_count::{sort_medals, MedalEntry, MedalEntryWithTotal, SortKey};
//!
//! let medals: Vec<_> = [("USA", 9, 7, 12), ("RUS", 13, 11, 9), ("NOR", 11, 5, 10)]
//!     .into_iter()
//!     .filter_map(|(code, g, s, b)| MedalEntryWithTotal::derive(MedalEntry::new(code, g, s, b)))
//!     .collect();
//!
//! let by_total = sort_medals(&medals, SortKey::Total);
//! assert_eq!(by_total[0].code(), "RUS");
//! assert_eq!(by_total[1].total(), 28);
//! ```
//!
//! ### With a channel source
//!
//! ```
//! use medal_count::{ChannelSource, FetchPipeline};
//!
//! let (tx, source) = ChannelSource::create("test");
//! let mut pipeline = FetchPipeline::new(Box::new(source));
//! pipeline.fetch();
//! tx.send(Ok(Vec::new())).unwrap();
//! pipeline.poll();
//! assert!(pipeline.is_cached());
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod events;
pub mod export;
pub mod logging;
pub mod pipeline;
pub mod server;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, Screen};
pub use config::Settings;
pub use data::{
    decode_medals, ranked, sort_medals, Location, MedalEntry, MedalEntryWithTotal, SortKey,
};
pub use pipeline::FetchPipeline;
pub use source::{
    ChannelSource, DataSource, FetchError, FetchResult, FileSource, HttpSource, MedalClient,
};
pub use ui::{Theme, ThemeMode, ThemeStore};
