//! Processed dashboard state for one reading batch.

use std::fs;
use std::path::Path;
use std::time::Instant;

use airwatch_types::{ensure_newest_first, format_last_updated_in, Dashboard, SensorReading};
use anyhow::{Context, Result};
use chrono::{Local, Utc};
use tracing::{debug, warn};

use crate::source::ReadingBatch;

/// Time zone used for every displayed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    /// The host's local time zone.
    #[default]
    Local,
    Utc,
}

impl DisplayZone {
    pub fn label(&self) -> &'static str {
        match self {
            DisplayZone::Local => "local",
            DisplayZone::Utc => "UTC",
        }
    }

    /// Full capture time of a reading in this zone, `None` if unparseable.
    pub fn timestamp(&self, reading: &SensorReading) -> Option<String> {
        match self {
            DisplayZone::Local => format_last_updated_in(&reading.captured_at, &Local),
            DisplayZone::Utc => format_last_updated_in(&reading.captured_at, &Utc),
        }
        .ok()
    }

    fn dashboard(&self, readings: &[SensorReading]) -> Option<Dashboard> {
        match self {
            DisplayZone::Local => Dashboard::from_readings(readings, &Local),
            DisplayZone::Utc => Dashboard::from_readings(readings, &Utc),
        }
    }
}

/// Complete processed data ready for display.
#[derive(Debug, Clone)]
pub struct DashboardData {
    /// The batch after ordering checks, newest first.
    pub readings: Vec<SensorReading>,
    /// Derived views, `None` when the batch is empty.
    pub dashboard: Option<Dashboard>,
    /// Whether the batch arrived out of order and was re-sorted.
    pub reordered: bool,
    pub zone: DisplayZone,
    pub last_updated: Instant,
}

impl DashboardData {
    /// Process a batch from a data source.
    pub fn from_batch(mut batch: ReadingBatch, zone: DisplayZone) -> Self {
        let reordered = ensure_newest_first(&mut batch);
        if reordered {
            warn!(
                readings = batch.len(),
                "batch was not newest-first, re-sorted by timestamp"
            );
        }

        let dashboard = zone.dashboard(&batch);
        match &dashboard {
            Some(d) => debug!(
                device = d.device_id(),
                readings = batch.len(),
                band = d.air_quality.label(),
                "processed batch"
            ),
            None => debug!("processed empty batch"),
        }

        Self {
            readings: batch,
            dashboard,
            reordered,
            zone,
            last_updated: Instant::now(),
        }
    }

    /// Load and process a batch from a JSON file.
    pub fn load(path: &Path, zone: DisplayZone) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let batch: ReadingBatch = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse readings from {}", path.display()))?;
        Ok(Self::from_batch(batch, zone))
    }

    /// Returns true if there is nothing to display.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
