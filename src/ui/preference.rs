//! Saved theme preference.
//!
//! The chosen theme is written as a single word (`light` or `dark`) to a
//! small file so it survives restarts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::theme::ThemeMode;

/// Reads and writes the theme preference file.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: Option<PathBuf>,
}

impl ThemeStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// Store in `<config dir>/medal-count/theme`. Without a config
    /// directory nothing is saved.
    pub fn default_location() -> Self {
        Self {
            path: dirs::config_dir().map(|dir| dir.join("medal-count").join("theme")),
        }
    }

    /// A store that never saves.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Saved preference, if one exists and is readable.
    pub fn load(&self) -> Option<ThemeMode> {
        let path = self.path.as_ref()?;
        let content = fs::read_to_string(path).ok()?;
        match content.parse() {
            Ok(mode) => Some(mode),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring saved theme");
                None
            }
        }
    }

    pub fn save(&self, mode: ThemeMode) -> io::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, mode.as_str())?;
        debug!(path = %path.display(), theme = %mode, "saved theme preference");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = ThemeStore::new(dir.path().join("nested").join("theme"));

        assert_eq!(store.load(), None);
        store.save(ThemeMode::Dark).unwrap();
        assert_eq!(store.load(), Some(ThemeMode::Dark));
        store.save(ThemeMode::Light).unwrap();
        assert_eq!(store.load(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_garbage_is_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme");
        fs::write(&path, "purple").unwrap();

        assert_eq!(ThemeStore::new(&path).load(), None);
    }

    #[test]
    fn test_disabled_store() {
        let store = ThemeStore::disabled();
        assert!(store.path().is_none());
        store.save(ThemeMode::Dark).unwrap();
        assert_eq!(store.load(), None);
    }
}
