//! Workout calorie estimator
//!
//! Calories burned = calories per minute × duration × intensity multiplier,
//! rounded to the nearest whole calorie.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{TrackerResult, ValidationError};
use crate::models::{Intensity, LogRecord, Submission, WorkoutLog, WorkoutType};
use crate::sink::LogSink;

pub const WORKOUT_LOGGED: &str = "Workout logged successfully!";

/// Estimated calories for a session. Returns 0 while the workout type or the
/// duration is not chosen yet.
pub fn estimate_calories(
    workout: Option<&WorkoutType>,
    duration_minutes: Option<u32>,
    intensity: Intensity,
) -> u32 {
    let (Some(workout), Some(minutes)) = (workout, duration_minutes) else {
        return 0;
    };

    let calories = workout.calories_per_minute * f64::from(minutes) * intensity.multiplier();
    // Saturating cast; rates are never negative
    calories.round().max(0.0) as u32
}

/// The workout form being filled in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLogDraft {
    pub workout_type: Option<WorkoutType>,
    pub duration_minutes: Option<u32>,
    pub intensity: Intensity,
    pub notes: String,
}

impl WorkoutLogDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workout(mut self, workout: WorkoutType) -> Self {
        self.workout_type = Some(workout);
        self
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn estimated_calories(&self) -> u32 {
        estimate_calories(self.workout_type.as_ref(), self.duration_minutes, self.intensity)
    }

    /// Log the session. Rejected when the workout type or a non-zero duration
    /// is missing.
    pub fn submit(self, sink: &mut dyn LogSink) -> TrackerResult<Submission<WorkoutLog>> {
        let calories_burned = self.estimated_calories();

        let Some(workout) = self.workout_type else {
            warn!("Rejected workout submission: no workout type");
            return Err(ValidationError::MissingWorkoutType.into());
        };
        let Some(duration) = self.duration_minutes.filter(|&m| m > 0) else {
            warn!(workout = %workout.name, "Rejected workout submission: no duration");
            return Err(ValidationError::MissingDuration.into());
        };

        let record = WorkoutLog {
            workout: workout.name,
            duration,
            intensity: self.intensity,
            calories_burned,
            notes: self.notes,
            timestamp: Utc::now(),
        };

        sink.record(&LogRecord::Workout(record.clone()))?;

        Ok(Submission::to_dashboard(record, WORKOUT_LOGGED))
    }
}
