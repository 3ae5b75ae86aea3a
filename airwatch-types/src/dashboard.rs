//! Every derived view for one render pass.

use std::fmt::Display;

use chrono::TimeZone;

use crate::{
    classify_air_quality, classify_particulate, derive_chart_series_in, derive_gas_levels,
    derive_gauge_proportions, format_last_updated_in, latest, AirQualityBand, ChartPoint,
    GaugeProportions, GaugeSegment, ParticulateLevel, SensorReading,
};

/// Derived, display-ready views of a newest-first batch.
///
/// Built fresh for each batch and never mutated.
///
/// # Example
///
/// ```rust
/// use airwatch_types::{sample_readings, AirQualityBand, Dashboard};
/// use chrono::Utc;
///
/// let dashboard = Dashboard::from_readings(&sample_readings(), &Utc).unwrap();
/// assert_eq!(dashboard.air_quality, AirQualityBand::LightlyPolluted);
/// assert_eq!(dashboard.last_updated.as_deref(), Some("2025-09-09 11:32:00"));
///
/// assert!(Dashboard::from_readings(&[], &Utc).is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dashboard {
    pub latest: SensorReading,
    /// Oldest-first chart series.
    pub series: Vec<ChartPoint>,
    pub air_quality: AirQualityBand,
    pub particulate: ParticulateLevel,
    pub gauges: GaugeProportions,
    pub gas: [GaugeSegment; 2],
    /// Latest capture time as a full date and time, `None` if invalid.
    pub last_updated: Option<String>,
}

impl Dashboard {
    /// Derive all views, or `None` for an empty batch.
    pub fn from_readings<Tz>(readings: &[SensorReading], tz: &Tz) -> Option<Self>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let newest = latest(readings)?;
        Some(Self {
            latest: newest.clone(),
            series: derive_chart_series_in(readings, tz),
            air_quality: classify_air_quality(newest.environment.iaq_index),
            particulate: classify_particulate(newest.pm25),
            gauges: derive_gauge_proportions(newest),
            gas: derive_gas_levels(newest),
            last_updated: format_last_updated_in(&newest.captured_at, tz).ok(),
        })
    }

    /// Device id of the latest reading.
    pub fn device_id(&self) -> &str {
        &self.latest.device_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_readings;
    use chrono::Utc;

    #[test]
    fn test_dashboard_from_sample() {
        let dashboard = Dashboard::from_readings(&sample_readings(), &Utc).unwrap();

        assert_eq!(dashboard.device_id(), "mask01");
        assert_eq!(dashboard.series.len(), 5);
        assert_eq!(dashboard.air_quality, AirQualityBand::LightlyPolluted);
        assert_eq!(dashboard.particulate, ParticulateLevel::Unhealthy);
        assert_eq!(dashboard.gauges.iaq, 115.0);
        assert_eq!(dashboard.gas[0].value, 120.0);
    }

    #[test]
    fn test_dashboard_invalid_latest_timestamp() {
        let mut readings = sample_readings();
        readings[0].captured_at = "??".to_string();

        let dashboard = Dashboard::from_readings(&readings, &Utc).unwrap();
        assert!(dashboard.last_updated.is_none());
        assert!(dashboard.series[4].time_label.is_none());
    }

    #[test]
    fn test_dashboard_is_idempotent() {
        let readings = sample_readings();
        assert_eq!(
            Dashboard::from_readings(&readings, &Utc),
            Dashboard::from_readings(&readings, &Utc)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_dashboard_serializes() {
        let dashboard = Dashboard::from_readings(&sample_readings(), &Utc).unwrap();
        let json = serde_json::to_value(&dashboard).unwrap();

        assert_eq!(json["air_quality"], "lightly_polluted");
        assert_eq!(json["particulate"], "unhealthy");
        assert_eq!(json["latest"]["id"], "mask01");
        assert_eq!(json["series"][0]["time_label"], "10:52");
        assert_eq!(json["gauges"]["particulate"][1]["value"], 0.0);
    }
}
