//! Gauge and bar proportions for the latest reading.

use crate::{SensorReading, PM25_GOOD_MAX};

/// One labelled segment of a gauge or bar group.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GaugeSegment {
    pub label: &'static str,
    pub value: f64,
}

impl GaugeSegment {
    pub const fn new(label: &'static str, value: f64) -> Self {
        Self { label, value }
    }
}

/// Proportions for the particulate and IAQ gauges.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GaugeProportions {
    /// Current PM2.5, then the remaining budget up to the good-level bound.
    pub particulate: [GaugeSegment; 2],
    /// Raw IAQ index for a radial gauge.
    pub iaq: f64,
}

impl GaugeProportions {
    /// Fraction of the particulate gauge taken by the current value.
    ///
    /// Returns 0 when both segments are zero.
    pub fn particulate_ratio(&self) -> f64 {
        let [current, remaining] = self.particulate;
        let total = current.value + remaining.value;
        if total > 0.0 {
            (current.value / total).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Derive gauge proportions from the latest reading.
///
/// The padding segment is `max(0, 12 - pm25)` and is never negative.
pub fn derive_gauge_proportions(latest: &SensorReading) -> GaugeProportions {
    GaugeProportions {
        particulate: [
            GaugeSegment::new("Current PM2.5", latest.pm25),
            GaugeSegment::new("Good Level (0-12)", (PM25_GOOD_MAX - latest.pm25).max(0.0)),
        ],
        iaq: latest.environment.iaq_index,
    }
}

/// Derive the gas sensor bar values from the latest reading.
pub fn derive_gas_levels(latest: &SensorReading) -> [GaugeSegment; 2] {
    [
        GaugeSegment::new("MQ2 (Smoke)", latest.smoke_level),
        GaugeSegment::new("MQ135 (Air Quality)", latest.air_quality_raw),
    ]
}
