//! Data source abstraction for fetching medal standings.
//!
//! A source starts a fetch on [`DataSource::request`] and hands back the
//! outcome from a later non-blocking [`DataSource::poll`]. The display loop
//! never waits on the network.

mod channel;
mod error;
mod file;
mod http;

pub use channel::ChannelSource;
pub use error::FetchError;
pub use file::FileSource;
pub use http::{HttpSource, MedalClient};

use std::fmt::Debug;

use crate::data::MedalEntryWithTotal;

/// Outcome of one fetch.
pub type FetchResult = Result<Vec<MedalEntryWithTotal>, FetchError>;

/// Trait for fetching medal data from various sources.
///
/// # Example
///
/// ```
/// use medal_count::{DataSource, FileSource};
///
/// let mut source = FileSource::new("public/medals.json");
/// source.request();
/// if let Some(Ok(medals)) = source.poll() {
///     println!("Got {} countries", medals.len());
/// }
/// ```
pub trait DataSource: Send + Debug {
    /// Start a fetch. Overlapping requests are allowed.
    fn request(&mut self);

    /// Take the latest completed fetch, if any.
    ///
    /// When several fetches have completed since the last poll, only the
    /// most recent outcome is returned.
    fn poll(&mut self) -> Option<FetchResult>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;
}
