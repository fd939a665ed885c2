//! HTTP data source.
//!
//! Fetches `GET /api/medals` with reqwest. [`MedalClient`] performs a single
//! fetch; [`HttpSource`] runs those fetches on a tokio runtime so the
//! display loop can poll for the outcome.

use std::time::Duration;

use reqwest::header::ACCEPT;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use url::Url;

use super::{DataSource, FetchError, FetchResult};
use crate::data::decode_medals;
use crate::server::ApiError;

/// Client for the medal endpoint.
#[derive(Debug, Clone)]
pub struct MedalClient {
    http: reqwest::Client,
    endpoint: Url,
    delay: Duration,
}

impl MedalClient {
    /// Create a client for `endpoint` with a per-request timeout.
    pub fn new(endpoint: Url, timeout: Duration) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint,
            delay: Duration::ZERO,
        })
    }

    /// Wait this long before every request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch, validate, and derive totals for the full medal collection.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::time::Duration;
    /// use medal_count::MedalClient;
    /// use url::Url;
    ///
    /// # tokio_test::block_on(async {
    /// let endpoint = Url::parse("http://127.0.0.1:3000/api/medals").unwrap();
    /// let client = MedalClient::new(endpoint, Duration::from_secs(10)).unwrap();
    /// match client.fetch().await {
    ///     Ok(medals) => println!("Got {} countries", medals.len()),
    ///     Err(e) => eprintln!("{}", e.user_message()),
    /// }
    /// # });
    /// ```
    pub async fn fetch(&self) -> FetchResult {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        debug!(endpoint = %self.endpoint, "fetching medal data");
        let response = self
            .http
            .get(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(FetchError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let message = serde_json::from_slice::<ApiError>(&body)
                .map(|e| e.error)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Unknown error").to_string());
            return Err(FetchError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        decode_medals(&body)
    }
}

/// A data source that fetches from the medal endpoint in the background.
///
/// Each [`request`](DataSource::request) spawns an independent fetch.
/// Overlapping fetches are neither deduplicated nor cancelled; whichever
/// completes last is what [`poll`](DataSource::poll) returns.
#[derive(Debug)]
pub struct HttpSource {
    client: MedalClient,
    runtime: Handle,
    sender: mpsc::UnboundedSender<FetchResult>,
    receiver: mpsc::UnboundedReceiver<FetchResult>,
    description: String,
    in_flight: usize,
}

impl HttpSource {
    /// Create a source that spawns fetches on `runtime`.
    pub fn new(client: MedalClient, runtime: Handle) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let description = format!("http: {}", client.endpoint());
        Self {
            client,
            runtime,
            sender,
            receiver,
            description,
            in_flight: 0,
        }
    }

    /// Number of fetches started but not yet polled.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

impl DataSource for HttpSource {
    fn request(&mut self) {
        self.in_flight += 1;
        let client = self.client.clone();
        let sender = self.sender.clone();

        self.runtime.spawn(async move {
            let result = client.fetch().await;
            if let Err(ref e) = result {
                warn!(kind = e.kind(), error = %e, "medal fetch failed");
            }
            // Receiver dropped means the display has gone away
            let _ = sender.send(result);
        });
    }

    fn poll(&mut self) -> Option<FetchResult> {
        let mut latest = None;
        while let Ok(result) = self.receiver.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            latest = Some(result);
        }
        latest
    }

    fn description(&self) -> &str {
        &self.description
    }
}
