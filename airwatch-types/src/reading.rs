//! Sensor readings as emitted by the device.

use chrono::{DateTime, FixedOffset};

use crate::ReadingError;

/// A single reading from the sensor device.
///
/// Field names follow the device's JSON payload when serialized:
///
/// ```json
/// {"id":"mask01","mq2":120,"mq135":45,
///  "bme680":{"temp":28.3,"humidity":62,"iaq":115},
///  "pm25":56.2,"timestamp":"2025-09-09T11:32:00Z"}
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorReading {
    /// Identifier of the emitting device.
    #[cfg_attr(feature = "serde", serde(rename = "id"))]
    pub device_id: String,

    /// MQ2 (smoke) raw value.
    #[cfg_attr(feature = "serde", serde(rename = "mq2"))]
    pub smoke_level: f64,

    /// MQ135 (general air quality) raw value.
    #[cfg_attr(feature = "serde", serde(rename = "mq135"))]
    pub air_quality_raw: f64,

    /// Environmental block (BME680).
    #[cfg_attr(feature = "serde", serde(rename = "bme680"))]
    pub environment: Environment,

    /// Fine particulate matter, µg/m³.
    pub pm25: f64,

    /// Capture time as an RFC 3339 string.
    ///
    /// Kept verbatim so a malformed value surfaces when it is formatted
    /// instead of rejecting the whole batch.
    #[cfg_attr(feature = "serde", serde(rename = "timestamp", default))]
    pub captured_at: String,
}

/// Temperature, humidity and IAQ from the environmental sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Environment {
    /// Degrees Celsius.
    #[cfg_attr(feature = "serde", serde(rename = "temp"))]
    pub temperature_c: f64,

    /// Relative humidity, 0-100.
    #[cfg_attr(feature = "serde", serde(rename = "humidity"))]
    pub humidity_pct: f64,

    /// Indoor air quality index.
    #[cfg_attr(feature = "serde", serde(rename = "iaq"))]
    pub iaq_index: f64,
}

impl SensorReading {
    /// Parse the capture timestamp.
    pub fn captured_at(&self) -> Result<DateTime<FixedOffset>, ReadingError> {
        crate::parse_timestamp(&self.captured_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_device_payload() {
        let json = r#"{
            "id": "mask01",
            "mq2": 120,
            "mq135": 45,
            "bme680": {"temp": 28.3, "humidity": 62, "iaq": 115},
            "pm25": 56.2,
            "timestamp": "2025-09-09T11:32:00Z"
        }"#;

        let reading: SensorReading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.device_id, "mask01");
        assert_eq!(reading.smoke_level, 120.0);
        assert_eq!(reading.air_quality_raw, 45.0);
        assert_eq!(reading.environment.temperature_c, 28.3);
        assert_eq!(reading.environment.humidity_pct, 62.0);
        assert_eq!(reading.environment.iaq_index, 115.0);
        assert_eq!(reading.pm25, 56.2);
        assert_eq!(reading.captured_at, "2025-09-09T11:32:00Z");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_missing_timestamp_is_empty() {
        let json = r#"{
            "id": "mask01", "mq2": 1, "mq135": 2,
            "bme680": {"temp": 20, "humidity": 40, "iaq": 30},
            "pm25": 3
        }"#;

        let reading: SensorReading = serde_json::from_str(json).unwrap();
        assert!(reading.captured_at.is_empty());
        assert!(reading.captured_at().is_err());
    }

    #[test]
    fn test_captured_at_parses_rfc3339() {
        let reading = crate::sample_readings().remove(0);
        let ts = reading.captured_at().unwrap();
        assert_eq!(ts.to_rfc3339(), "2025-09-09T11:32:00+00:00");
    }
}
