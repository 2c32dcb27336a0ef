//! User profile model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fitness goal chosen at signup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessGoal {
    WeightLoss,
    WeightGain,
    MuscleGain,
    Maintenance,
    GeneralFitness,
}

impl FitnessGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "weight-loss",
            FitnessGoal::WeightGain => "weight-gain",
            FitnessGoal::MuscleGain => "muscle-gain",
            FitnessGoal::Maintenance => "maintenance",
            FitnessGoal::GeneralFitness => "general-fitness",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "weight-loss" => Some(FitnessGoal::WeightLoss),
            "weight-gain" => Some(FitnessGoal::WeightGain),
            "muscle-gain" => Some(FitnessGoal::MuscleGain),
            "maintenance" | "maintain" => Some(FitnessGoal::Maintenance),
            "general-fitness" => Some(FitnessGoal::GeneralFitness),
            _ => None,
        }
    }
}

/// Diet preference chosen at signup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietPreference {
    Vegetarian,
    NonVegetarian,
    Vegan,
    Eggetarian,
}

impl DietPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietPreference::Vegetarian => "vegetarian",
            DietPreference::NonVegetarian => "non-vegetarian",
            DietPreference::Vegan => "vegan",
            DietPreference::Eggetarian => "eggetarian",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "vegetarian" | "veg" => Some(DietPreference::Vegetarian),
            "non-vegetarian" | "non-veg" => Some(DietPreference::NonVegetarian),
            "vegan" => Some(DietPreference::Vegan),
            "eggetarian" => Some(DietPreference::Eggetarian),
            _ => None,
        }
    }
}

/// The signed-in user. Never carries the password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: Option<u32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub gender: Option<String>,
    pub fitness_goal: Option<FitnessGoal>,
    pub diet_preference: Option<DietPreference>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_accepts_form_values() {
        assert_eq!(FitnessGoal::from_str("weight-loss"), Some(FitnessGoal::WeightLoss));
        assert_eq!(FitnessGoal::from_str("muscle_gain"), Some(FitnessGoal::MuscleGain));
        assert_eq!(FitnessGoal::from_str("bulk"), None);
    }

    #[test]
    fn test_diet_preference_round_trips_through_str() {
        for pref in [
            DietPreference::Vegetarian,
            DietPreference::NonVegetarian,
            DietPreference::Vegan,
            DietPreference::Eggetarian,
        ] {
            assert_eq!(DietPreference::from_str(pref.as_str()), Some(pref));
        }
    }
}
