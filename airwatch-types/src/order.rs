//! Newest-first ordering checks for reading batches.

use std::cmp::Reverse;

use crate::SensorReading;

/// Check that a batch is ordered newest-first.
///
/// Every adjacent pair must be non-increasing in time. Readings whose
/// timestamps do not parse belong after every parseable one, so a batch
/// with an unparseable reading ahead of a valid one is not ordered.
pub fn is_newest_first(readings: &[SensorReading]) -> bool {
    let times: Vec<_> = readings.iter().map(|r| r.captured_at().ok()).collect();
    times.windows(2).all(|pair| pair[0] >= pair[1])
}

/// Reorder a batch newest-first if it is not already.
///
/// The sort is stable. Readings with unparseable timestamps move to the end
/// in their original relative order. Returns `true` if the batch was
/// reordered.
pub fn ensure_newest_first(readings: &mut [SensorReading]) -> bool {
    if is_newest_first(readings) {
        return false;
    }
    readings.sort_by_key(|r| Reverse(r.captured_at().ok()));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_readings;

    #[test]
    fn test_sample_is_newest_first() {
        let mut readings = sample_readings();
        assert!(is_newest_first(&readings));
        assert!(!ensure_newest_first(&mut readings));
        assert_eq!(readings, sample_readings());
    }

    #[test]
    fn test_oldest_first_is_reversed() {
        let mut readings = sample_readings();
        readings.reverse();
        assert!(!is_newest_first(&readings));

        assert!(ensure_newest_first(&mut readings));
        assert_eq!(readings, sample_readings());
    }

    #[test]
    fn test_empty_and_single() {
        assert!(is_newest_first(&[]));
        let one = vec![sample_readings().remove(0)];
        assert!(is_newest_first(&one));
    }

    #[test]
    fn test_equal_timestamps_are_ordered() {
        let mut readings = sample_readings();
        readings[1].captured_at = readings[0].captured_at.clone();
        assert!(is_newest_first(&readings));
    }

    #[test]
    fn test_unparseable_moves_to_end() {
        let mut readings = sample_readings();
        readings.reverse();
        readings[0].captured_at = "bogus".to_string();

        assert!(ensure_newest_first(&mut readings));
        assert_eq!(readings.last().unwrap().captured_at, "bogus");
        assert!(is_newest_first(&readings));
        assert_eq!(readings[0].captured_at, "2025-09-09T11:32:00Z");
    }

    #[test]
    fn test_unparseable_ahead_of_ordered_tail() {
        let mut readings = sample_readings();
        readings[0].captured_at = "bogus".to_string();
        assert!(!is_newest_first(&readings));

        assert!(ensure_newest_first(&mut readings));
        assert_eq!(readings[0].captured_at, "2025-09-09T11:22:00Z");
        assert_eq!(readings[4].captured_at, "bogus");
        assert!(is_newest_first(&readings));
    }

    #[test]
    fn test_unparseable_already_last() {
        let mut readings = sample_readings();
        readings[4].captured_at = "bogus".to_string();
        readings[3].captured_at = "also bogus".to_string();

        assert!(is_newest_first(&readings));
        assert!(!ensure_newest_first(&mut readings));
    }
}
