//! Log records
//!
//! Finished entries produced by a successful form submission. They are handed
//! to a [`crate::sink::LogSink`] and are not stored anywhere durable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Intensity, MealType, SelectedFoodLine};

/// A logged meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealLog {
    pub foods: Vec<SelectedFoodLine>,
    pub meal_type: MealType,
    pub total_calories: f64,
    pub timestamp: DateTime<Utc>,
}

/// A logged workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLog {
    /// Workout type name
    pub workout: String,
    /// Minutes
    pub duration: u32,
    pub intensity: Intensity,
    pub calories_burned: u32,
    pub notes: String,
    pub timestamp: DateTime<Utc>,
}

/// A logged weight and body measurement reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementLog {
    pub weight_kg: f64,
    pub waist_cm: Option<f64>,
    pub chest_cm: Option<f64>,
    pub hips_cm: Option<f64>,
    pub arms_cm: Option<f64>,
    pub thighs_cm: Option<f64>,
    pub notes: Option<String>,
    pub timestamp: DateTime<Utc>,
    /// Local calendar date, e.g. "1/29/2024"
    pub date: String,
}

/// Any record a sink can receive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogRecord {
    Meal(MealLog),
    Workout(WorkoutLog),
    Measurement(MeasurementLog),
}

impl LogRecord {
    pub fn kind(&self) -> &'static str {
        match self {
            LogRecord::Meal(_) => "meal",
            LogRecord::Workout(_) => "workout",
            LogRecord::Measurement(_) => "measurement",
        }
    }
}

/// Pages of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Landing,
    Dashboard,
}

/// Outcome of an accepted form submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission<T> {
    pub record: T,
    /// Confirmation shown to the user
    pub message: &'static str,
    /// Where the shell should go next
    pub navigate_to: Route,
}

impl<T> Submission<T> {
    pub fn to_dashboard(record: T, message: &'static str) -> Self {
        Self {
            record,
            message,
            navigate_to: Route::Dashboard,
        }
    }
}
