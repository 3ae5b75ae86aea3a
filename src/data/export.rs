//! JSON export of the derived dashboard.

use serde_json::{json, Value};

use super::DashboardData;

/// Build the export document for the current data.
///
/// Returns `None` when there are no readings to export.
pub fn export_json(data: &DashboardData) -> Option<Value> {
    let dashboard = data.dashboard.as_ref()?;
    let latest = &dashboard.latest;

    Some(json!({
        "device_id": dashboard.device_id(),
        "last_updated": dashboard.last_updated,
        "time_zone": data.zone.label(),
        "reordered": data.reordered,
        "readings": data.readings.len(),
        "air_quality": {
            "iaq": latest.environment.iaq_index,
            "band": dashboard.air_quality.label(),
        },
        "particulate": {
            "pm25": latest.pm25,
            "level": dashboard.particulate.label(),
        },
        "environment": {
            "temperature_c": latest.environment.temperature_c,
            "humidity_pct": latest.environment.humidity_pct,
        },
        "gauges": dashboard.gauges,
        "gas": dashboard.gas,
        "series": dashboard.series,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DisplayZone;
    use airwatch_types::sample_readings;

    #[test]
    fn test_export_sample() {
        let data = DashboardData::from_batch(sample_readings(), DisplayZone::Utc);
        let export = export_json(&data).unwrap();

        assert_eq!(export["device_id"], "mask01");
        assert_eq!(export["last_updated"], "2025-09-09 11:32:00");
        assert_eq!(export["air_quality"]["band"], "Lightly Polluted");
        assert_eq!(export["particulate"]["level"], "Unhealthy");
        assert_eq!(export["gauges"]["particulate"][0]["value"], 56.2);
        assert_eq!(export["gas"][1]["label"], "MQ135 (Air Quality)");
        assert_eq!(export["series"].as_array().unwrap().len(), 5);
        assert_eq!(export["series"][4]["time_label"], "11:32");
    }

    #[test]
    fn test_export_empty() {
        let data = DashboardData::from_batch(Vec::new(), DisplayZone::Utc);
        assert!(export_json(&data).is_none());
    }
}
