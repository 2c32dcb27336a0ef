//! Reference catalogs
//!
//! Static food and workout tables supplied to the trackers at startup.

pub mod foods;
pub mod workouts;

pub use foods::FoodCatalog;
pub use workouts::{group_by_category, WorkoutCatalog, WorkoutGroup};
