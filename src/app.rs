//! Application state and navigation logic.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};

use crate::data::{export_json, DashboardData, DisplayZone};
use crate::source::DataSource;
use crate::ui::Theme;

/// How long a status message stays visible.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// The current view/tab in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Cards for the latest reading plus the IAQ and PM2.5 gauges.
    Overview,
    /// Temperature/humidity and PM2.5/IAQ line charts.
    Trends,
    /// Gas sensor bars and trend chart.
    Gas,
    /// Table of every reading in the batch.
    Readings,
}

impl View {
    pub const ALL: [View; 4] = [View::Overview, View::Trends, View::Gas, View::Readings];

    /// Cycle to the next view.
    pub fn next(self) -> Self {
        match self {
            View::Overview => View::Trends,
            View::Trends => View::Gas,
            View::Gas => View::Readings,
            View::Readings => View::Overview,
        }
    }

    /// Cycle to the previous view.
    pub fn prev(self) -> Self {
        match self {
            View::Overview => View::Readings,
            View::Trends => View::Overview,
            View::Gas => View::Trends,
            View::Readings => View::Gas,
        }
    }

    /// Returns the display label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Trends => "Trends",
            View::Gas => "Gas",
            View::Readings => "Readings",
        }
    }

    /// Position in the tab bar.
    pub fn index(&self) -> usize {
        match self {
            View::Overview => 0,
            View::Trends => 1,
            View::Gas => 2,
            View::Readings => 3,
        }
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub current_view: View,
    pub show_help: bool,

    // Data source
    source: Box<dyn DataSource>,
    pub data: Option<DashboardData>,
    pub load_error: Option<String>,
    pub zone: DisplayZone,
    pub refresh_interval: Duration,

    // Readings table selection
    pub selected_row: usize,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App with the given data source.
    pub fn new(source: Box<dyn DataSource>, zone: DisplayZone, theme: Theme) -> Self {
        Self {
            running: true,
            current_view: View::Overview,
            show_help: false,
            source,
            data: None,
            load_error: None,
            zone,
            refresh_interval: Duration::from_secs(1),
            selected_row: 0,
            theme,
            status_message: None,
        }
    }

    /// Set the refresh interval shown in the footer.
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
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

    /// Poll the data source for a new batch.
    ///
    /// Returns true if new data was received. A source error is recorded in
    /// `load_error` and the previous data is kept on screen.
    pub fn reload_data(&mut self) -> bool {
        let batch = self.source.poll();

        if let Some(err) = self.source.error() {
            self.load_error = Some(err.to_string());
        }

        let Some(batch) = batch else {
            return false;
        };

        let data = DashboardData::from_batch(batch, self.zone);
        if data.reordered {
            self.set_status_message("Readings arrived out of order, re-sorted".to_string());
        }
        self.selected_row = self.selected_row.min(data.readings.len().saturating_sub(1));
        self.data = Some(data);
        self.load_error = None;
        true
    }

    /// Switch to the next view.
    pub fn next_view(&mut self) {
        self.current_view = self.current_view.next();
    }

    /// Switch to the previous view.
    pub fn prev_view(&mut self) {
        self.current_view = self.current_view.prev();
    }

    /// Switch to a specific view.
    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
    }

    fn row_count(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.readings.len())
    }

    /// Move the readings selection down by one row.
    pub fn select_next(&mut self) {
        self.select_next_n(1);
    }

    /// Move the readings selection up by one row.
    pub fn select_prev(&mut self) {
        self.select_prev_n(1);
    }

    /// Move the readings selection down by n rows.
    pub fn select_next_n(&mut self, n: usize) {
        let max = self.row_count().saturating_sub(1);
        self.selected_row = (self.selected_row + n).min(max);
    }

    /// Move the readings selection up by n rows.
    pub fn select_prev_n(&mut self, n: usize) {
        self.selected_row = self.selected_row.saturating_sub(n);
    }

    /// Jump to the newest reading.
    pub fn select_first(&mut self) {
        self.selected_row = 0;
    }

    /// Jump to the oldest reading.
    pub fn select_last(&mut self) {
        self.selected_row = self.row_count().saturating_sub(1);
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export the current dashboard to a JSON file.
    pub fn export_state(&self, path: &Path) -> Result<()> {
        let Some(export) = self.data.as_ref().and_then(export_json) else {
            bail!("No data to export");
        };

        let json = serde_json::to_string_pretty(&export)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{ChannelSource, FileSource, SampleSource};
    use airwatch_types::sample_readings;

    fn unloaded_app() -> App {
        let source = Box::new(SampleSource::new());
        App::new(source, DisplayZone::Utc, Theme::dark())
    }

    fn sample_app() -> App {
        let mut app = unloaded_app();
        assert!(app.reload_data());
        app
    }

    #[test]
    fn test_view_cycle() {
        for view in View::ALL {
            assert_eq!(view.next().prev(), view);
        }
        assert_eq!(View::Readings.next(), View::Overview);
        assert_eq!(View::Overview.prev(), View::Readings);
        assert_eq!(View::Gas.index(), 2);
    }

    #[test]
    fn test_reload_sample() {
        let mut app = sample_app();
        assert!(app.data.is_some());
        assert!(app.load_error.is_none());

        // Sample is delivered once
        assert!(!app.reload_data());
        assert!(app.data.is_some());
    }

    #[test]
    fn test_selection_clamps() {
        let mut app = sample_app();

        app.select_next_n(10);
        assert_eq!(app.selected_row, 4);
        app.select_prev();
        assert_eq!(app.selected_row, 3);
        app.select_first();
        assert_eq!(app.selected_row, 0);
        app.select_prev();
        assert_eq!(app.selected_row, 0);
        app.select_last();
        assert_eq!(app.selected_row, 4);
    }

    #[test]
    fn test_selection_clamped_on_smaller_batch() {
        let (tx, source) = ChannelSource::create("test");
        tx.send(sample_readings()).unwrap();

        let mut app = App::new(Box::new(source), DisplayZone::Utc, Theme::dark());
        app.reload_data();
        app.select_last();
        assert_eq!(app.selected_row, 4);

        let smaller = sample_readings().into_iter().take(2).collect();
        tx.send(smaller).unwrap();
        assert!(app.reload_data());
        assert_eq!(app.selected_row, 1);
    }

    #[test]
    fn test_empty_batch_has_no_dashboard() {
        let (_tx, source) = ChannelSource::create("test");
        let mut app = App::new(Box::new(source), DisplayZone::Utc, Theme::dark());

        assert!(app.reload_data());
        let data = app.data.as_ref().unwrap();
        assert!(data.dashboard.is_none());

        app.select_next();
        assert_eq!(app.selected_row, 0);
    }

    #[test]
    fn test_reordered_batch_sets_status() {
        let (tx, source) = ChannelSource::create("test");
        let mut batch = sample_readings();
        batch.reverse();
        tx.send(batch).unwrap();

        let mut app = App::new(Box::new(source), DisplayZone::Utc, Theme::dark());
        app.reload_data();
        assert!(app.get_status_message().unwrap().contains("out of order"));
    }

    #[test]
    fn test_source_error_is_recorded() {
        let source = FileSource::new("/nonexistent/readings.json");
        let mut app = App::new(Box::new(source), DisplayZone::Utc, Theme::dark());

        assert!(!app.reload_data());
        assert!(app.load_error.as_deref().unwrap().contains("Read error"));
        assert_eq!(app.source_description(), "file: /nonexistent/readings.json");
    }

    #[test]
    fn test_export_state() {
        let app = sample_app();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");

        app.export_state(&path).unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["device_id"], "mask01");
    }

    #[test]
    fn test_export_without_data_fails() {
        let app = unloaded_app();
        let dir = tempfile::tempdir().unwrap();
        assert!(app.export_state(&dir.path().join("export.json")).is_err());
    }

    #[test]
    fn test_help_and_quit() {
        let mut app = sample_app();
        app.toggle_help();
        assert!(app.show_help);
        app.toggle_help();
        assert!(!app.show_help);

        app.quit();
        assert!(!app.running);
    }
}
