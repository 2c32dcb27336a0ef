//! Trackers
//!
//! The calculations behind the three logging forms.

pub mod meal;
pub mod measurement;
pub mod workout;

pub use meal::MealAggregator;
pub use measurement::{local_date, MeasurementDraft};
pub use workout::{estimate_calories, WorkoutLogDraft};
