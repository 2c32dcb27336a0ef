//! Data models
//!
//! Plain structs shared by the catalogs, the trackers and the tool layer.

mod food;
mod records;
mod user;
mod workout;

pub use food::{FoodEntry, MealType, SelectedFoodLine};
pub use records::{LogRecord, MealLog, MeasurementLog, Route, Submission, WorkoutLog};
pub use user::{DietPreference, FitnessGoal, UserProfile};
pub use workout::{Intensity, WorkoutType};
