//! Food models
//!
//! Catalog entries and the lines of an in-progress meal selection.

use serde::{Deserialize, Serialize};

/// A food from the catalog, with its calories for one serving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub name: String,
    pub calories_per_serving: f64,
    pub category: String,
    pub is_vegetarian: bool,
}

impl FoodEntry {
    pub fn new(
        name: impl Into<String>,
        calories_per_serving: f64,
        category: impl Into<String>,
        is_vegetarian: bool,
    ) -> Self {
        Self {
            name: name.into(),
            calories_per_serving,
            category: category.into(),
            is_vegetarian,
        }
    }
}

/// One food chosen for the meal being logged, with how many servings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedFoodLine {
    pub entry: FoodEntry,
    /// Always >= 1 while the line exists
    pub quantity: u32,
}

impl SelectedFoodLine {
    pub fn new(entry: FoodEntry) -> Self {
        Self { entry, quantity: 1 }
    }

    /// Calories for this line (calories per serving × quantity)
    pub fn calories(&self) -> f64 {
        self.entry.calories_per_serving * f64::from(self.quantity)
    }
}

/// Meal type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Some(MealType::Breakfast),
            "lunch" => Some(MealType::Lunch),
            "dinner" => Some(MealType::Dinner),
            "snack" => Some(MealType::Snack),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}
