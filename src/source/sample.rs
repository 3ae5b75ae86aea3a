//! Built-in sample source.

use airwatch_types::sample_readings;

use super::{DataSource, ReadingBatch};

/// A source that yields the built-in five-reading sample once.
#[derive(Debug, Default)]
pub struct SampleSource {
    delivered: bool,
}

impl SampleSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataSource for SampleSource {
    fn poll(&mut self) -> Option<ReadingBatch> {
        if self.delivered {
            return None;
        }
        self.delivered = true;
        Some(sample_readings())
    }

    fn description(&self) -> &str {
        "sample: mask01"
    }

    fn error(&self) -> Option<&str> {
        None
    }
}
