//! Static medal store backed by a JSON file.

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Errors reading the medal data file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid data format: Expected an array of medal data")]
    NotArray,
}

/// Read-only medal collection loaded fresh from disk on every call.
#[derive(Debug, Clone)]
pub struct MedalStore {
    path: PathBuf,
}

impl MedalStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file contents.
    pub async fn read(&self) -> Result<Vec<u8>, StoreError> {
        tokio::fs::read(&self.path).await.map_err(|source| StoreError::Read {
            path: self.path.display().to_string(),
            source,
        })
    }

    /// The stored records, unvalidated beyond being a JSON array.
    pub async fn load(&self) -> Result<Vec<Value>, StoreError> {
        let content = self.read().await?;
        let value: Value = serde_json::from_slice(&content).map_err(|source| StoreError::Parse {
            path: self.path.display().to_string(),
            source,
        })?;

        match value {
            Value::Array(records) => Ok(records),
            _ => Err(StoreError::NotArray),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_store_loads_array() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"[{{"code":"USA","gold":9,"silver":7,"bronze":12}}]"#).unwrap();

        let records = MedalStore::new(file.path()).load().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["code"], "USA");
    }

    #[tokio::test]
    async fn test_store_rejects_non_array() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"code":"USA"}}"#).unwrap();

        let err = MedalStore::new(file.path()).load().await.unwrap_err();
        assert!(matches!(err, StoreError::NotArray));
    }

    #[tokio::test]
    async fn test_store_missing_file() {
        let err = MedalStore::new("/nonexistent/medals.json").load().await.unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/medals.json"));
    }

    #[tokio::test]
    async fn test_store_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[{{").unwrap();

        let err = MedalStore::new(file.path()).load().await.unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_bundled_data_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("public/medals.json");
        let records = MedalStore::new(path).load().await.unwrap();
        assert_eq!(records.len(), 13);
    }
}
