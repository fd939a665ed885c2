//! Application state and interaction logic.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::data::{ranked, Location, MedalEntryWithTotal, SortKey};
use crate::export::standings_json;
use crate::pipeline::FetchPipeline;
use crate::source::DataSource;
use crate::ui::{Theme, ThemeStore};

/// How long a status message stays visible.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// What the content area is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// A fetch is in flight.
    Loading,
    /// The last fetch failed; carries the message for the error panel.
    Failed(String),
    /// The standings table.
    Standings,
}

/// Screen region of a clickable sort header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderHitbox {
    pub row: u16,
    pub x: u16,
    pub width: u16,
    pub key: SortKey,
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    pipeline: FetchPipeline,

    // Sort state, mirrored into the location
    pub sort_key: SortKey,
    pub location: Location,

    // Navigation
    pub selected_index: usize,

    // UI
    pub theme: Theme,
    theme_store: ThemeStore,
    pub header_hitboxes: Vec<HeaderHitbox>,
    pub spinner_frame: usize,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App. The initial sort key is taken from `location`;
    /// an unrecognized value falls back to the default and is dropped from
    /// the location.
    pub fn new(
        source: Box<dyn DataSource>,
        location: Location,
        theme: Theme,
        theme_store: ThemeStore,
    ) -> Self {
        let sort_key = location.sort_key();
        let location = location.with_sort(sort_key);
        Self {
            running: true,
            show_help: false,
            pipeline: FetchPipeline::new(source),
            sort_key,
            location,
            selected_index: 0,
            theme,
            theme_store,
            header_hitboxes: Vec::new(),
            spinner_frame: 0,
            status_message: None,
        }
    }

    /// Request the initial data.
    pub fn start(&mut self) {
        info!(source = self.pipeline.source_description(), "loading medal data");
        self.pipeline.fetch();
    }

    /// Advance animations and apply any completed fetch.
    ///
    /// Returns `true` if new data or an error arrived.
    pub fn tick(&mut self) -> bool {
        if self.pipeline.is_loading() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
        if !self.pipeline.poll() {
            return false;
        }
        let count = self.pipeline.medals().len();
        if self.selected_index >= count {
            self.selected_index = count.saturating_sub(1);
        }
        true
    }

    pub fn pipeline(&self) -> &FetchPipeline {
        &self.pipeline
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.pipeline.source_description()
    }

    pub fn screen(&self) -> Screen {
        if self.pipeline.is_loading() {
            Screen::Loading
        } else if let Some(message) = self.pipeline.error_message() {
            Screen::Failed(message)
        } else {
            Screen::Standings
        }
    }

    /// Entries in display order with their ranks.
    pub fn standings(&self) -> Vec<(usize, MedalEntryWithTotal)> {
        ranked(self.pipeline.medals(), self.sort_key)
    }

    /// Fetch again, bypassing the cache.
    pub fn retry(&mut self) {
        self.pipeline.refetch();
        self.set_status_message("Reloading medal data...".to_string());
    }

    /// Make `key` the active sort column and update the location.
    ///
    /// Ignored while the table is not shown.
    pub fn set_sort(&mut self, key: SortKey) -> bool {
        if self.screen() != Screen::Standings {
            return false;
        }
        self.sort_key = key;
        self.location = self.location.with_sort(key);
        self.selected_index = 0;
        debug!(sort = %key, location = %self.location, "sort changed");
        true
    }

    /// Cycle to the next sort column.
    pub fn cycle_sort(&mut self) -> bool {
        self.set_sort(self.sort_key.next())
    }

    /// Sort key whose header occupies the given cell, if any.
    pub fn sort_key_at(&self, column: u16, row: u16) -> Option<SortKey> {
        self.header_hitboxes
            .iter()
            .find(|h| h.row == row && column >= h.x && column < h.x + h.width)
            .map(|h| h.key)
    }

    /// Switch between light and dark and remember the choice.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(e) = self.theme_store.save(self.theme.mode) {
            warn!(error = %e, "failed to save theme preference");
            self.set_status_message(format!("Theme not saved: {}", e));
        }
    }

    /// Move selection down by one row.
    pub fn select_next(&mut self) {
        let max = self.pipeline.medals().len().saturating_sub(1);
        self.selected_index = (self.selected_index + 1).min(max);
    }

    /// Move selection up by one row.
    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.pipeline.medals().len().saturating_sub(1);
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        match &self.status_message {
            Some((msg, time)) if time.elapsed() < STATUS_MESSAGE_TTL => Some(msg),
            _ => None,
        }
    }

    /// Export the current standings to a file.
    pub fn export_state(&self, path: &std::path::Path) -> Result<()> {
        if self.screen() != Screen::Standings {
            anyhow::bail!("No data to export");
        }

        let mut export = standings_json(self.pipeline.medals(), self.sort_key);
        export["location"] = serde_json::Value::String(self.location.to_string());

        let json = serde_json::to_string_pretty(&export)?;
        std::fs::write(path, json)?;
        info!(path = %path.display(), "exported standings");
        Ok(())
    }
}
