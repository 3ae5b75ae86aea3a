//! Built-in sample batch.

use crate::{Environment, SensorReading};

/// Device id of the built-in sample.
pub const SAMPLE_DEVICE_ID: &str = "mask01";

/// Five readings from `mask01` taken ten minutes apart, newest first.
pub fn sample_readings() -> Vec<SensorReading> {
    vec![
        sample(120.0, 45.0, 28.3, 62.0, 115.0, 56.2, "2025-09-09T11:32:00Z"),
        sample(115.0, 48.0, 27.8, 65.0, 120.0, 52.1, "2025-09-09T11:22:00Z"),
        sample(125.0, 42.0, 28.7, 58.0, 110.0, 58.9, "2025-09-09T11:12:00Z"),
        sample(118.0, 46.0, 28.1, 61.0, 118.0, 54.3, "2025-09-09T11:02:00Z"),
        sample(122.0, 44.0, 28.5, 63.0, 112.0, 55.8, "2025-09-09T10:52:00Z"),
    ]
}

fn sample(
    mq2: f64,
    mq135: f64,
    temperature_c: f64,
    humidity_pct: f64,
    iaq_index: f64,
    pm25: f64,
    captured_at: &str,
) -> SensorReading {
    SensorReading {
        device_id: SAMPLE_DEVICE_ID.to_string(),
        smoke_level: mq2,
        air_quality_raw: mq135,
        environment: Environment {
            temperature_c,
            humidity_pct,
            iaq_index,
        },
        pm25,
        captured_at: captured_at.to_string(),
    }
}
