//! Channel-based data source.
//!
//! Fetch outcomes are pushed by a producer through a tokio channel. This is
//! useful when medal data arrives from somewhere the crate does not fetch
//! itself, such as an embedding application.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;

use super::{DataSource, FetchResult};

/// A data source that receives fetch outcomes via a channel.
///
/// Requests are only counted; answering them is up to the producer.
///
/// # Example
///
/// ```
/// use medal_count::{ChannelSource, DataSource};
///
/// let (tx, mut source) = ChannelSource::create("embedded");
/// tx.send(Ok(Vec::new())).unwrap();
/// assert!(source.poll().is_some());
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: mpsc::UnboundedReceiver<FetchResult>,
    description: String,
    requests: Arc<AtomicUsize>,
}

impl ChannelSource {
    /// Create a new channel source.
    pub fn new(receiver: mpsc::UnboundedReceiver<FetchResult>, source_description: &str) -> Self {
        Self {
            receiver,
            description: format!("channel: {}", source_description),
            requests: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a channel pair for sending outcomes to a ChannelSource.
    pub fn create(source_description: &str) -> (mpsc::UnboundedSender<FetchResult>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self::new(rx, source_description))
    }

    /// Shared counter of requests made so far. Stays valid after the
    /// source is boxed.
    pub fn request_counter(&self) -> Arc<AtomicUsize> {
        self.requests.clone()
    }
}

impl DataSource for ChannelSource {
    fn request(&mut self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }

    fn poll(&mut self) -> Option<FetchResult> {
        let mut latest = None;
        while let Ok(result) = self.receiver.try_recv() {
            latest = Some(result);
        }
        latest
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{MedalEntry, MedalEntryWithTotal};
    use crate::source::FetchError;

    fn medals(code: &str) -> Vec<MedalEntryWithTotal> {
        vec![MedalEntryWithTotal::derive(MedalEntry::new(code, 1, 2, 3)).unwrap()]
    }

    #[test]
    fn test_channel_source_poll() {
        let (tx, mut source) = ChannelSource::create("test");
        assert_eq!(source.description(), "channel: test");
        assert!(source.poll().is_none());

        tx.send(Ok(medals("USA"))).unwrap();
        let result = source.poll().unwrap().unwrap();
        assert_eq!(result[0].code(), "USA");

        assert!(source.poll().is_none());
    }

    #[test]
    fn test_channel_source_last_result_wins() {
        let (tx, mut source) = ChannelSource::create("test");

        tx.send(Ok(medals("USA"))).unwrap();
        tx.send(Err(FetchError::Network("down".to_string()))).unwrap();
        tx.send(Ok(medals("NOR"))).unwrap();

        let result = source.poll().unwrap().unwrap();
        assert_eq!(result[0].code(), "NOR");
    }

    #[test]
    fn test_channel_source_counts_requests() {
        let (_tx, mut source) = ChannelSource::create("test");
        let counter = source.request_counter();

        source.request();
        source.request();
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }
}
