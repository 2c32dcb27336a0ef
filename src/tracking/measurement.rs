//! Measurement recorder
//!
//! Weight is required; body measurements and notes are optional and pass
//! through unchanged.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{TrackerResult, ValidationError};
use crate::models::{LogRecord, MeasurementLog, Submission};
use crate::sink::LogSink;

pub const MEASUREMENTS_LOGGED: &str = "Measurements logged successfully!";

/// The weight & measurements form being filled in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementDraft {
    pub weight_kg: Option<f64>,
    pub waist_cm: Option<f64>,
    pub chest_cm: Option<f64>,
    pub hips_cm: Option<f64>,
    pub arms_cm: Option<f64>,
    pub thighs_cm: Option<f64>,
    pub notes: Option<String>,
}

impl MeasurementDraft {
    pub fn with_weight(weight_kg: f64) -> Self {
        Self {
            weight_kg: Some(weight_kg),
            ..Self::default()
        }
    }

    /// Log the reading. Rejected when no weight was entered.
    pub fn submit(self, sink: &mut dyn LogSink) -> TrackerResult<Submission<MeasurementLog>> {
        let Some(weight_kg) = self.weight_kg else {
            warn!("Rejected measurement submission: no weight");
            return Err(ValidationError::MissingWeight.into());
        };

        let timestamp = Utc::now();
        let record = MeasurementLog {
            weight_kg,
            waist_cm: self.waist_cm,
            chest_cm: self.chest_cm,
            hips_cm: self.hips_cm,
            arms_cm: self.arms_cm,
            thighs_cm: self.thighs_cm,
            notes: self.notes,
            timestamp,
            date: local_date(timestamp),
        };

        sink.record(&LogRecord::Measurement(record.clone()))?;

        Ok(Submission::to_dashboard(record, MEASUREMENTS_LOGGED))
    }
}

/// Calendar date in the local timezone, month/day/year without padding
pub fn local_date(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%-m/%-d/%Y").to_string()
}
