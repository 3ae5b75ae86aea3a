//! Example: Watching a JSON file of readings
//!
//! This example polls a file with [`FileSource`] and prints the derived
//! classification every time the file changes.
//!
//! The file should contain a JSON array of readings, newest first, in the
//! wire format the sensor gateway produces.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example file_source -- path/to/readings.json
//! ```

use std::env;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use airwatch::{DashboardData, DataSource, DisplayZone, FileSource};

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: cargo run --example file_source -- <readings.json>");
        eprintln!();
        eprintln!("The file should contain a JSON array of readings such as:");
        eprintln!(
            r#"  [{{"id": "mask01", "mq2": 120, "mq135": 45, "bme680": {{"temp": 28.3, "humidity": 62, "iaq": 115}}, "pm25": 56.2, "timestamp": "2025-09-09T11:32:00Z"}}]"#
        );
        std::process::exit(1);
    });

    println!("Watching file: {}", path);
    println!("Press Ctrl+C to stop\n");

    let mut source = FileSource::new(&path);

    loop {
        match source.poll() {
            Some(batch) => {
                let data = DashboardData::from_batch(batch, DisplayZone::Local);
                match data.dashboard {
                    Some(ref dashboard) => println!(
                        "{} readings from {}: IAQ {} ({}), PM2.5 {} ({}), last updated {}",
                        data.readings.len(),
                        dashboard.device_id(),
                        dashboard.latest.environment.iaq_index,
                        dashboard.air_quality.label(),
                        dashboard.latest.pm25,
                        dashboard.particulate.label(),
                        dashboard.last_updated.as_deref().unwrap_or("—"),
                    ),
                    None => println!("File holds no readings"),
                }
                if data.reordered {
                    println!("  (batch was out of order and has been re-sorted)");
                }
            }
            None => {
                if let Some(err) = source.error() {
                    eprint!("\rError: {}  ", err);
                } else {
                    print!("\rWaiting for changes...  ");
                }
                io::stdout().flush().unwrap();
            }
        }

        thread::sleep(Duration::from_millis(500));
    }
}
