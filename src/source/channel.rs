//! Channel-based data source.
//!
//! Receives reading batches via a tokio watch channel. This is the seam for
//! a host application that owns the feed (a polling client, a subscription)
//! and pushes batches rather than having them read from a file.

use tokio::sync::watch;

use super::{DataSource, ReadingBatch};

/// A data source that receives reading batches via a channel.
///
/// # Example
///
/// ```
/// use airwatch::{ChannelSource, DataSource};
/// use airwatch_types::sample_readings;
///
/// let (tx, mut source) = ChannelSource::create("feed://mask01");
/// tx.send(sample_readings()).unwrap();
/// assert_eq!(source.poll().unwrap().len(), 5);
/// ```
///
/// Producers can live on a tokio runtime:
///
/// ```
/// use airwatch::{ChannelSource, DataSource};
/// use airwatch_types::sample_readings;
///
/// # tokio_test::block_on(async {
/// let (tx, mut source) = ChannelSource::create("gateway");
/// let producer = tokio::spawn(async move {
///     tx.send(sample_readings()).unwrap();
///     tx
/// });
/// let _tx = producer.await.unwrap();
/// assert_eq!(source.poll().unwrap().len(), 5);
/// # });
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<ReadingBatch>,
    description: String,
    initial_returned: bool,
}

impl ChannelSource {
    /// Create a new channel source.
    ///
    /// # Arguments
    ///
    /// * `receiver` - The receiving end of a watch channel
    /// * `source_description` - Where batches come from (e.g., "feed://mask01")
    pub fn new(receiver: watch::Receiver<ReadingBatch>, source_description: &str) -> Self {
        let description = format!("channel: {}", source_description);
        Self {
            receiver,
            description,
            initial_returned: false,
        }
    }

    /// Create a channel pair for sending batches to a ChannelSource.
    ///
    /// The channel starts with an empty batch.
    pub fn create(source_description: &str) -> (watch::Sender<ReadingBatch>, Self) {
        let (tx, rx) = watch::channel(ReadingBatch::new());
        let source = Self::new(rx, source_description);
        (tx, source)
    }
}

impl DataSource for ChannelSource {
    fn poll(&mut self) -> Option<ReadingBatch> {
        // Return the current value on first poll
        if !self.initial_returned {
            self.initial_returned = true;
            self.receiver.mark_changed();
        }

        if self.receiver.has_changed().unwrap_or(false) {
            Some(self.receiver.borrow_and_update().clone())
        } else {
            None
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airwatch_types::sample_readings;

    #[test]
    fn test_channel_source_poll() {
        let (tx, mut source) = ChannelSource::create("test");
        assert_eq!(source.description(), "channel: test");

        // Initially returns the empty batch
        let batch = source.poll();
        assert!(batch.unwrap().is_empty());

        // No change
        assert!(source.poll().is_none());

        tx.send(sample_readings()).unwrap();

        let batch = source.poll().unwrap();
        assert_eq!(batch.len(), 5);
        assert!(source.poll().is_none());
    }

    #[test]
    fn test_channel_source_sender_dropped() {
        let (tx, mut source) = ChannelSource::create("test");
        let _ = source.poll();
        drop(tx);

        assert!(source.poll().is_none());
        assert!(source.error().is_none());
    }
}
