//! # airwatch-types
//!
//! Core types for the airwatch air-quality dashboard. This crate turns a batch
//! of raw sensor readings into the structures a dashboard draws: the latest
//! reading, a chronological chart series, qualitative classifications and
//! gauge proportions.
//!
//! Everything here is a pure function over borrowed input. Nothing is cached,
//! nothing is mutated (apart from [`ensure_newest_first`], which reorders a
//! batch the caller owns), and no I/O is performed.
//!
//! ## Features
//!
//! - `serde`: serialization of readings (matching the device JSON layout) and
//!   of derived views for export.
//!
//! ## Example
//!
//! ```rust
//! use airwatch_types::{
//!     classify_air_quality, classify_particulate, derive_chart_series_in,
//!     derive_gauge_proportions, latest, sample_readings, AirQualityBand,
//!     ParticulateLevel,
//! };
//! use chrono::Utc;
//!
//! let readings = sample_readings();
//!
//! let newest = latest(&readings).expect("sample is non-empty");
//! assert_eq!(classify_air_quality(newest.environment.iaq_index), AirQualityBand::LightlyPolluted);
//! assert_eq!(classify_particulate(newest.pm25), ParticulateLevel::Unhealthy);
//!
//! let series = derive_chart_series_in(&readings, &Utc);
//! assert_eq!(series.first().and_then(|p| p.time_label.as_deref()), Some("10:52"));
//!
//! let gauges = derive_gauge_proportions(newest);
//! assert_eq!(gauges.particulate[1].value, 0.0);
//! ```

mod chart;
mod classify;
mod dashboard;
mod error;
mod gauge;
mod order;
mod reading;
mod sample;
mod time;

pub use chart::*;
pub use classify::*;
pub use dashboard::*;
pub use error::*;
pub use gauge::*;
pub use order::*;
pub use reading::*;
pub use sample::*;
pub use time::*;
