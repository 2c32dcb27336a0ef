//! Workout models
//!
//! Workout types from the catalog and the intensity levels a session can be
//! logged at.

use serde::{Deserialize, Serialize};

/// A kind of workout with its calorie burn rate at moderate intensity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutType {
    pub name: String,
    pub calories_per_minute: f64,
    pub category: String,
}

impl WorkoutType {
    pub fn new(
        name: impl Into<String>,
        calories_per_minute: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            calories_per_minute,
            category: category.into(),
        }
    }
}

/// Intensity enum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    #[default]
    Moderate,
    High,
}

impl Intensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Moderate => "moderate",
            Intensity::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Intensity::Low),
            "moderate" | "medium" => Some(Intensity::Moderate),
            "high" => Some(Intensity::High),
            _ => None,
        }
    }

    /// Factor applied to the per-minute burn rate
    pub fn multiplier(&self) -> f64 {
        match self {
            Intensity::Low => 0.8,
            Intensity::Moderate => 1.0,
            Intensity::High => 1.2,
        }
    }
}
