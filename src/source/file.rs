//! File-based data source.
//!
//! Reads the static medal JSON file directly, skipping the HTTP layer.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{DataSource, FetchError, FetchResult};
use crate::data::decode_medals;

/// A data source that reads medal data from a JSON file.
///
/// The file is read fresh on every request. An unreadable file is reported
/// as a [`FetchError::Network`] since, like an unreachable server, nothing
/// was received.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    pending: Option<FetchResult>,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self {
            path,
            description,
            pending: None,
        }
    }

    /// Returns the path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> FetchResult {
        let content = fs::read(&self.path)
            .map_err(|e| FetchError::Network(format!("{}: {}", self.path.display(), e)))?;
        decode_medals(&content)
    }
}

impl DataSource for FileSource {
    fn request(&mut self) {
        debug!(path = %self.path.display(), "reading medal file");
        self.pending = Some(self.read_file());
    }

    fn poll(&mut self) -> Option<FetchResult> {
        self.pending.take()
    }

    fn description(&self) -> &str {
        &self.description
    }
}
