//! Fetch pipeline: request, cache, and error state for one display session.

use std::time::Instant;

use tracing::{debug, error, info};

use crate::data::MedalEntryWithTotal;
use crate::source::{DataSource, FetchError};

/// Holds the medal collection fetched from a [`DataSource`].
///
/// The collection is cached after the first successful fetch. Further
/// [`fetch`](Self::fetch) calls do nothing until [`refetch`](Self::refetch)
/// invalidates the cache. A failed fetch empties the collection and records
/// the error; a later success clears it.
#[derive(Debug)]
pub struct FetchPipeline {
    source: Box<dyn DataSource>,
    medals: Vec<MedalEntryWithTotal>,
    loading: bool,
    error: Option<FetchError>,
    cached: bool,
    last_updated: Option<Instant>,
}

impl FetchPipeline {
    pub fn new(source: Box<dyn DataSource>) -> Self {
        Self {
            source,
            medals: Vec::new(),
            loading: false,
            error: None,
            cached: false,
            last_updated: None,
        }
    }

    /// Start a fetch unless a cached collection is already held.
    ///
    /// Returns `true` if a request was made.
    pub fn fetch(&mut self) -> bool {
        if self.cached {
            debug!("medal data cached, skipping fetch");
            return false;
        }
        self.loading = true;
        self.error = None;
        self.source.request();
        true
    }

    /// Invalidate the cache and fetch again.
    pub fn refetch(&mut self) {
        self.cached = false;
        self.fetch();
    }

    /// Apply the latest completed fetch, if any.
    ///
    /// Returns `true` if the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(result) = self.source.poll() else {
            return false;
        };

        self.loading = false;
        match result {
            Ok(medals) => {
                info!(countries = medals.len(), "medal data loaded");
                self.medals = medals;
                self.cached = true;
                self.error = None;
                self.last_updated = Some(Instant::now());
            }
            Err(e) => {
                error!(kind = e.kind(), error = %e, "error fetching medal data");
                self.medals.clear();
                self.cached = false;
                self.error = Some(e);
            }
        }
        true
    }

    pub fn medals(&self) -> &[MedalEntryWithTotal] {
        &self.medals
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_cached(&self) -> bool {
        self.cached
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// Message for the error panel, if the last fetch failed.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(FetchError::user_message)
    }

    pub fn last_updated(&self) -> Option<Instant> {
        self.last_updated
    }

    /// Returns a description of the underlying source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }
}
