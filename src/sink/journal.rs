//! In-memory journal of the records logged by this process

use std::collections::VecDeque;

use super::{LogSink, SinkResult};
use crate::models::LogRecord;

/// Bounded log of recent records, oldest first. When full, the oldest record
/// is dropped to make room.
#[derive(Debug, Clone)]
pub struct Journal {
    records: VecDeque<LogRecord>,
    capacity: usize,
}

impl Journal {
    /// A capacity of zero is treated as one
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogRecord> + '_ {
        self.records.iter()
    }
}

impl LogSink for Journal {
    fn record(&mut self, record: &LogRecord) -> SinkResult<()> {
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Intensity, WorkoutLog};
    use chrono::Utc;

    fn session(minutes: u32) -> LogRecord {
        LogRecord::Workout(WorkoutLog {
            workout: "Swimming".to_string(),
            duration: minutes,
            intensity: Intensity::Moderate,
            calories_burned: minutes * 11,
            notes: String::new(),
            timestamp: Utc::now(),
        })
    }

    fn durations(journal: &Journal) -> Vec<u32> {
        journal
            .iter()
            .filter_map(|r| match r {
                LogRecord::Workout(w) => Some(w.duration),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_records_in_order() {
        let mut journal = Journal::new(5);
        journal.record(&session(10)).unwrap();
        journal.record(&session(20)).unwrap();
        assert_eq!(durations(&journal), vec![10, 20]);
    }

    #[test]
    fn test_drops_oldest_when_full() {
        let mut journal = Journal::new(2);
        for minutes in [10, 20, 30] {
            journal.record(&session(minutes)).unwrap();
        }
        assert_eq!(journal.len(), 2);
        assert_eq!(durations(&journal), vec![20, 30]);
    }

    #[test]
    fn test_zero_capacity_keeps_latest() {
        let mut journal = Journal::new(0);
        journal.record(&session(10)).unwrap();
        journal.record(&session(15)).unwrap();
        assert_eq!(journal.capacity(), 1);
        assert_eq!(durations(&journal), vec![15]);
    }
}
