//! Log sinks
//!
//! A sink receives every finished record and acknowledges it synchronously.
//! Nothing here is durable: the console sink emits a tracing event and the
//! journal keeps a bounded in-memory history for the dashboard.

mod journal;

pub use journal::Journal;

use thiserror::Error;
use tracing::info;

use crate::models::LogRecord;

/// Sink error types
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for sink operations
pub type SinkResult<T> = Result<T, SinkError>;

/// Receiver of finished log records
pub trait LogSink {
    fn record(&mut self, record: &LogRecord) -> SinkResult<()>;
}

impl<S: LogSink + ?Sized> LogSink for &mut S {
    fn record(&mut self, record: &LogRecord) -> SinkResult<()> {
        (**self).record(record)
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn record(&mut self, record: &LogRecord) -> SinkResult<()> {
        (**self).record(record)
    }
}

/// Diagnostic sink: one structured `info` event per record, payload as JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn record(&mut self, record: &LogRecord) -> SinkResult<()> {
        let payload = serde_json::to_string(record)?;
        info!(kind = record.kind(), %payload, "Logging {}", record.kind());
        Ok(())
    }
}

/// Forwards each record to two sinks in order; stops at the first failure
#[derive(Debug)]
pub struct Tee<A, B>(pub A, pub B);

impl<A: LogSink, B: LogSink> LogSink for Tee<A, B> {
    fn record(&mut self, record: &LogRecord) -> SinkResult<()> {
        self.0.record(record)?;
        self.1.record(record)
    }
}
