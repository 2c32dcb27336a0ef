//! Workout catalog
//!
//! Read-only list of workout types with per-minute calorie burn rates, and the
//! category grouping used to present them.

use serde::Serialize;

use crate::models::WorkoutType;

/// (name, calories per minute, category)
const WORKOUT_TYPES: &[(&str, f64, &str)] = &[
    ("Walking (Slow)", 3.5, "Cardio"),
    ("Walking (Brisk)", 5.0, "Cardio"),
    ("Running (6 mph)", 10.0, "Cardio"),
    ("Running (8 mph)", 13.0, "Cardio"),
    ("Cycling (Moderate)", 8.0, "Cardio"),
    ("Cycling (Vigorous)", 12.0, "Cardio"),
    ("Swimming", 11.0, "Cardio"),
    ("Yoga", 3.0, "Flexibility"),
    ("Pilates", 4.0, "Flexibility"),
    ("Weight Training", 6.0, "Strength"),
    ("Bodyweight Exercises", 8.0, "Strength"),
    ("CrossFit", 15.0, "HIIT"),
    ("HIIT Training", 12.0, "HIIT"),
    ("Dancing", 5.0, "Fun"),
    ("Badminton", 7.0, "Sports"),
    ("Cricket", 5.0, "Sports"),
    ("Football", 9.0, "Sports"),
    ("Basketball", 8.0, "Sports"),
];

/// Workouts sharing a category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutGroup {
    pub category: String,
    pub workouts: Vec<WorkoutType>,
}

/// Partition workouts by category.
///
/// Groups appear in the order their category is first seen and keep the input
/// order within each group.
pub fn group_by_category(workouts: &[WorkoutType]) -> Vec<WorkoutGroup> {
    workouts.iter().fold(Vec::new(), |mut groups: Vec<WorkoutGroup>, workout| {
        match groups.iter_mut().find(|g| g.category == workout.category) {
            Some(group) => group.workouts.push(workout.clone()),
            None => groups.push(WorkoutGroup {
                category: workout.category.clone(),
                workouts: vec![workout.clone()],
            }),
        }
        groups
    })
}

/// Ordered, read-only workout catalog
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutCatalog {
    entries: Vec<WorkoutType>,
}

impl WorkoutCatalog {
    pub fn new(entries: Vec<WorkoutType>) -> Self {
        Self { entries }
    }

    /// The built-in catalog
    pub fn builtin() -> Self {
        Self::new(
            WORKOUT_TYPES
                .iter()
                .map(|&(name, per_minute, category)| WorkoutType::new(name, per_minute, category))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[WorkoutType] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact name lookup
    pub fn find(&self, name: &str) -> Option<&WorkoutType> {
        self.entries.iter().find(|w| w.name == name)
    }

    pub fn grouped(&self) -> Vec<WorkoutGroup> {
        group_by_category(&self.entries)
    }
}

impl Default for WorkoutCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
