//! Error types
//!
//! Validation failures are the only errors a user can trigger by filling in a
//! form; the rest cover lookups made by the tool layer and the log sink.

use thiserror::Error;

use crate::sink::SinkError;

/// A required field was missing when a form was submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select at least one food")]
    EmptyFoodSelection,

    #[error("Please select a meal type")]
    MissingMealType,

    #[error("Please select a workout type")]
    MissingWorkoutType,

    #[error("Please enter the workout duration")]
    MissingDuration,

    #[error("Please enter your weight")]
    MissingWeight,

    #[error("Please fill in all required fields")]
    MissingAccountFields,

    #[error("Please enter email and password")]
    MissingCredentials,
}

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No selected food at index {index} (selection has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unknown food: '{0}'")]
    UnknownFood(String),

    #[error("Unknown workout type: '{0}'")]
    UnknownWorkout(String),

    #[error("Invalid meal type: '{0}'. Valid types: breakfast, lunch, dinner, snack")]
    InvalidMealType(String),

    #[error("Invalid intensity: '{0}'. Valid values: low, moderate, high")]
    InvalidIntensity(String),

    #[error("Not signed in")]
    NotSignedIn,

    #[error("Log sink error: {0}")]
    Sink(#[from] SinkError),
}

/// Result type for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
