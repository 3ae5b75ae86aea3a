//! Data source abstraction for receiving sensor reading batches.
//!
//! A source hands the dashboard whole batches of readings, newest first.
//! The dashboard never asks for a single reading and never writes back.

mod channel;
mod file;
mod sample;

pub use channel::ChannelSource;
pub use file::FileSource;
pub use sample::SampleSource;

use std::fmt::Debug;

use airwatch_types::SensorReading;

/// A batch of readings as delivered by a source.
pub type ReadingBatch = Vec<SensorReading>;

/// Trait for receiving reading batches from various sources.
///
/// # Example
///
/// ```
/// use airwatch::{DataSource, SampleSource};
///
/// let mut source = SampleSource::new();
/// if let Some(batch) = source.poll() {
///     println!("Got {} readings", batch.len());
/// }
/// ```
pub trait DataSource: Send + Debug {
    /// Poll for the latest batch.
    ///
    /// Returns `Some(batch)` if new data is available, `None` otherwise.
    /// This method should be non-blocking.
    fn poll(&mut self) -> Option<ReadingBatch>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;

    /// Returns the error message from the last poll, if any.
    fn error(&self) -> Option<&str>;
}
