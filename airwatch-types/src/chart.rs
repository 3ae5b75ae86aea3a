//! Chart-series derivation.

use std::fmt::Display;

use chrono::{Local, TimeZone};

use crate::{format_time_label_in, SensorReading};

/// A flattened, display-ready record for time-series plotting.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartPoint {
    /// Capture time as `HH:MM`, `None` if the timestamp did not parse.
    pub time_label: Option<String>,
    pub smoke: f64,
    pub air_quality: f64,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub iaq_index: f64,
    pub pm25: f64,
}

impl ChartPoint {
    /// Flatten one reading, labelling it in the given time zone.
    pub fn from_reading<Tz>(reading: &SensorReading, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            time_label: format_time_label_in(&reading.captured_at, tz).ok(),
            smoke: reading.smoke_level,
            air_quality: reading.air_quality_raw,
            temperature_c: reading.environment.temperature_c,
            humidity_pct: reading.environment.humidity_pct,
            iaq_index: reading.environment.iaq_index,
            pm25: reading.pm25,
        }
    }
}

/// Returns the newest reading of a newest-first batch.
pub fn latest(readings: &[SensorReading]) -> Option<&SensorReading> {
    readings.first()
}

/// Derive the chart series using the host's local time zone.
///
/// See [`derive_chart_series_in`].
pub fn derive_chart_series(readings: &[SensorReading]) -> Vec<ChartPoint> {
    derive_chart_series_in(readings, &Local)
}

/// Derive the chart series for a newest-first batch.
///
/// The output is oldest-first so charts read left to right in time.
pub fn derive_chart_series_in<Tz>(readings: &[SensorReading], tz: &Tz) -> Vec<ChartPoint>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    readings
        .iter()
        .rev()
        .map(|r| ChartPoint::from_reading(r, tz))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_readings;
    use chrono::Utc;

    #[test]
    fn test_empty_series() {
        assert!(derive_chart_series_in(&[], &Utc).is_empty());
        assert!(derive_chart_series(&[]).is_empty());
    }

    #[test]
    fn test_series_is_reversed() {
        let readings = sample_readings();
        let series = derive_chart_series_in(&readings, &Utc);

        assert_eq!(series.len(), 5);
        for (point, reading) in series.iter().zip(readings.iter().rev()) {
            assert_eq!(point.pm25, reading.pm25);
            assert_eq!(point.iaq_index, reading.environment.iaq_index);
        }

        let labels: Vec<&str> = series.iter().filter_map(|p| p.time_label.as_deref()).collect();
        assert_eq!(labels, ["10:52", "11:02", "11:12", "11:22", "11:32"]);
    }

    #[test]
    fn test_point_copies_fields() {
        let readings = sample_readings();
        let point = ChartPoint::from_reading(&readings[0], &Utc);

        assert_eq!(point.smoke, 120.0);
        assert_eq!(point.air_quality, 45.0);
        assert_eq!(point.temperature_c, 28.3);
        assert_eq!(point.humidity_pct, 62.0);
        assert_eq!(point.iaq_index, 115.0);
        assert_eq!(point.pm25, 56.2);
    }

    #[test]
    fn test_invalid_timestamp_has_no_label() {
        let mut readings = sample_readings();
        readings[0].captured_at = "garbage".to_string();

        let series = derive_chart_series_in(&readings, &Utc);
        assert_eq!(series.len(), 5);
        assert!(series.last().unwrap().time_label.is_none());
        assert!(series[0].time_label.is_some());
    }

    #[test]
    fn test_latest() {
        assert!(latest(&[]).is_none());

        let readings = sample_readings();
        let newest = latest(&readings).unwrap();
        assert!(std::ptr::eq(newest, &readings[0]));
        assert_eq!(newest, &readings[0]);
    }

    #[test]
    fn test_series_defaults_to_local() {
        let readings = sample_readings();
        let series = derive_chart_series(&readings);

        assert_eq!(series.len(), 5);
        assert_eq!(series, derive_chart_series_in(&readings, &Local));
        assert_eq!(series[0].pm25, readings[4].pm25);
        assert!(series.iter().all(|p| p.time_label.is_some()));
    }

    #[test]
    fn test_series_is_idempotent() {
        let readings = sample_readings();
        assert_eq!(
            derive_chart_series_in(&readings, &Utc),
            derive_chart_series_in(&readings, &Utc)
        );
    }
}
