//! Example: Feeding readings through a channel
//!
//! This example shows how to embed airwatch in your own application by
//! pushing reading batches through a [`ChannelSource`].
//!
//! This is useful when you want to:
//! - Bridge readings from a serial port or MQTT gateway
//! - Generate synthetic data for testing
//!
//! # Usage
//!
//! ```bash
//! cargo run --example channel_source
//! ```

use std::thread;
use std::time::Duration;

use airwatch::{ChannelSource, DashboardData, DataSource, DisplayZone};
use airwatch_types::{Environment, SensorReading};
use chrono::{SecondsFormat, Utc};

/// Readings kept in each batch.
const WINDOW: usize = 5;

fn synthetic_reading(counter: u64) -> SensorReading {
    let wave = (counter as f64 / 3.0).sin();
    SensorReading {
        device_id: "synthetic01".to_string(),
        smoke_level: 120.0 + 8.0 * wave,
        air_quality_raw: 45.0 - 3.0 * wave,
        environment: Environment {
            temperature_c: 28.0 + wave,
            humidity_pct: 60.0 + 4.0 * wave,
            iaq_index: 110.0 + 40.0 * wave,
        },
        pm25: 30.0 + 25.0 * wave,
        captured_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}

fn main() {
    println!("Channel source example");
    println!("Generating synthetic readings...\n");

    // Create a channel source - this returns both a sender and the source
    let (tx, mut source) = ChannelSource::create("synthetic-data");

    thread::spawn(move || {
        let mut counter = 0u64;
        let mut batch: Vec<SensorReading> = Vec::with_capacity(WINDOW);

        loop {
            counter += 1;

            // Newest first, keep a sliding window
            batch.insert(0, synthetic_reading(counter));
            batch.truncate(WINDOW);

            if tx.send(batch.clone()).is_err() {
                break; // Receiver dropped
            }

            thread::sleep(Duration::from_secs(1));
        }
    });

    println!("Receiving batches (press Ctrl+C to stop):\n");

    loop {
        if let Some(batch) = source.poll() {
            let data = DashboardData::from_batch(batch, DisplayZone::Utc);
            if let Some(dashboard) = data.dashboard {
                println!(
                    "{} readings | IAQ {:.0} {} | PM2.5 {:.1} {} | series of {}",
                    data.readings.len(),
                    dashboard.latest.environment.iaq_index,
                    dashboard.air_quality.label(),
                    dashboard.latest.pm25,
                    dashboard.particulate.label(),
                    dashboard.series.len(),
                );
            }
        }

        thread::sleep(Duration::from_millis(100));
    }
}
