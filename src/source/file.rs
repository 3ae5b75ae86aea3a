//! File-based data source.
//!
//! Polls a JSON file holding an array of readings.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, warn};

use super::{DataSource, ReadingBatch};

/// A data source that reads reading batches from a JSON file.
///
/// The file holds a JSON array of device payloads, newest first. The source
/// tracks the file's modification time and only returns new data when the
/// file has been updated.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    last_error: Option<String>,
    last_modified: Option<SystemTime>,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self {
            path,
            description,
            last_error: None,
            last_modified: None,
        }
    }

    /// Returns the path being monitored.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn get_modified_time(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).ok()?.modified().ok()
    }

    fn read_file(&mut self) -> Option<ReadingBatch> {
        let result = fs::read_to_string(&self.path)
            .map_err(|e| format!("Read error: {}", e))
            .and_then(|content| {
                serde_json::from_str::<ReadingBatch>(&content)
                    .map_err(|e| format!("Parse error: {}", e))
            });

        match result {
            Ok(batch) => {
                debug!(
                    path = %self.path.display(),
                    readings = batch.len(),
                    "loaded readings"
                );
                self.last_error = None;
                Some(batch)
            }
            Err(err) => {
                // Only log transitions, the file is polled every refresh
                if self.last_error.as_deref() != Some(err.as_str()) {
                    warn!(path = %self.path.display(), "{}", err);
                }
                self.last_error = Some(err);
                None
            }
        }
    }
}

impl DataSource for FileSource {
    fn poll(&mut self) -> Option<ReadingBatch> {
        let current_modified = self.get_modified_time();

        let file_changed = match (&self.last_modified, &current_modified) {
            (None, _) => true,        // Never read successfully, always try
            (Some(_), None) => false, // File disappeared, keep the last batch
            (Some(last), Some(current)) => current > last,
        };

        if file_changed {
            if let Some(batch) = self.read_file() {
                self.last_modified = current_modified;
                return Some(batch);
            }
        }

        None
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_json() -> &'static str {
        r#"[
            {
                "id": "mask01", "mq2": 120, "mq135": 45,
                "bme680": {"temp": 28.3, "humidity": 62, "iaq": 115},
                "pm25": 56.2, "timestamp": "2025-09-09T11:32:00Z"
            },
            {
                "id": "mask01", "mq2": 115, "mq135": 48,
                "bme680": {"temp": 27.8, "humidity": 65, "iaq": 120},
                "pm25": 52.1, "timestamp": "2025-09-09T11:22:00Z"
            }
        ]"#
    }

    #[test]
    fn test_file_source_new() {
        let source = FileSource::new("/tmp/readings.json");
        assert_eq!(source.path(), Path::new("/tmp/readings.json"));
        assert_eq!(source.description(), "file: /tmp/readings.json");
        assert!(source.error().is_none());
    }

    #[test]
    fn test_file_source_poll_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", sample_json()).unwrap();

        let mut source = FileSource::new(file.path());

        let batch = source.poll().unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].environment.iaq_index, 115.0);
        assert_eq!(batch[1].pm25, 52.1);

        // Unchanged file
        assert!(source.poll().is_none());
    }

    #[test]
    fn test_file_source_empty_array() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[]").unwrap();

        let mut source = FileSource::new(file.path());
        let batch = source.poll().unwrap();
        assert!(batch.is_empty());
        assert!(source.error().is_none());
    }

    #[test]
    fn test_file_source_missing_file() {
        let mut source = FileSource::new("/nonexistent/path/readings.json");

        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Read error"));
    }

    #[test]
    fn test_file_source_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid json").unwrap();

        let mut source = FileSource::new(file.path());

        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Parse error"));
    }

    #[test]
    fn test_file_source_recovers_after_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{").unwrap();

        let mut source = FileSource::new(file.path());
        assert!(source.poll().is_none());
        assert!(source.error().is_some());

        // A failed read never records an mtime, so the next poll retries
        std::fs::write(file.path(), sample_json()).unwrap();
        assert!(source.poll().is_some());
        assert!(source.error().is_none());
    }
}
