//! # airwatch
//!
//! A terminal dashboard for air-quality sensor readings.
//!
//! A wearable sensor reports smoke (MQ2), general air quality (MQ135),
//! temperature, humidity, an indoor air-quality index and PM2.5. This crate
//! takes batches of those readings from a [`DataSource`], derives chart
//! series, classifications and gauge proportions through
//! [`airwatch_types`], and draws them in an interactive terminal UI.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │(processing)   │(rendering)   │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── SampleSource | FileSource | ChannelSource   │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, view navigation and row selection
//! - **[`source`]**: The [`DataSource`] trait with the built-in sample, file
//!   polling and channel implementations
//! - **[`data`]**: Ordering checks and derived views for one batch
//!   ([`DashboardData`]), refresh intervals and JSON export
//! - **[`settings`]**: Config file and environment settings
//! - **[`ui`]**: Rendering with ratatui: overview cards and gauges, trend
//!   charts, gas sensor bars and the readings table
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Show the built-in sample
//! airwatch
//!
//! # Watch a JSON file of readings (newest first)
//! airwatch --file readings.json --refresh 10s
//! ```
//!
//! ### As a library with the sample source
//!
//! ```
//! use airwatch::{App, DisplayZone, SampleSource, Theme};
//!
//! let mut app = App::new(Box::new(SampleSource::new()), DisplayZone::Utc, Theme::dark());
//! assert!(app.reload_data());
//! ```
//!
//! ### As a library with channel source
//!
//! ```
//! use airwatch::{App, ChannelSource, DisplayZone, Theme};
//! use airwatch_types::sample_readings;
//!
//! let (tx, source) = ChannelSource::create("sensor-gateway");
//! tx.send(sample_readings()).unwrap();
//!
//! let mut app = App::new(Box::new(source), DisplayZone::Utc, Theme::dark());
//! app.reload_data();
//! assert_eq!(app.data.unwrap().readings.len(), 5);
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod settings;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, View};
pub use data::{export_json, DashboardData, DisplayZone};
pub use settings::{Settings, ThemeChoice};
pub use source::{ChannelSource, DataSource, FileSource, ReadingBatch, SampleSource};
pub use ui::Theme;
