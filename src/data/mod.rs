//! Ingestion and processing of reading batches.
//!
//! This module sits between a [`DataSource`](crate::source::DataSource) and
//! the UI. It enforces the newest-first ordering of each batch and derives
//! the display views from it.
//!
//! ## Submodules
//!
//! - [`dashboard`]: [`DashboardData`], the processed state for one batch
//! - [`duration`]: Parsing and formatting of refresh intervals (e.g., "10s", "10m")
//! - [`export`]: JSON export of the derived dashboard
//!
//! ## Data Flow
//!
//! ```text
//! ReadingBatch (newest-first, unverified)
//!        │
//!        ▼
//! DashboardData::from_batch()
//!        │
//!        ├──▶ ensure_newest_first() (warns and re-sorts if needed)
//!        │
//!        └──▶ Dashboard::from_readings() (series, bands, gauges)
//! ```

pub mod dashboard;
pub mod duration;
pub mod export;

pub use dashboard::{DashboardData, DisplayZone};
pub use export::export_json;
