//! Food catalog
//!
//! Read-only list of foods with per-serving calories. The built-in table is a
//! set of common Indian dishes.

use serde::Serialize;

use crate::models::FoodEntry;

/// (name, calories per serving, category, vegetarian)
const INDIAN_FOODS: &[(&str, f64, &str, bool)] = &[
    ("Roti (Wheat)", 104.0, "Grains", true),
    ("Rice (Cooked)", 130.0, "Grains", true),
    ("Dal (Moong)", 118.0, "Pulses", true),
    ("Dal (Toor)", 115.0, "Pulses", true),
    ("Rajma", 127.0, "Pulses", true),
    ("Chole", 164.0, "Pulses", true),
    ("Paneer", 265.0, "Dairy", true),
    ("Chicken Curry", 180.0, "Non-Veg", false),
    ("Fish Curry", 150.0, "Non-Veg", false),
    ("Egg Curry", 155.0, "Non-Veg", false),
    ("Aloo Sabzi", 85.0, "Vegetables", true),
    ("Bhindi Sabzi", 35.0, "Vegetables", true),
    ("Palak Sabzi", 23.0, "Vegetables", true),
    ("Mixed Vegetables", 55.0, "Vegetables", true),
    ("Idli (2 pieces)", 58.0, "South Indian", true),
    ("Dosa (Plain)", 168.0, "South Indian", true),
    ("Upma", 85.0, "South Indian", true),
    ("Poha", 76.0, "Breakfast", true),
    ("Paratha (Plain)", 126.0, "Grains", true),
    ("Biryani (Veg)", 290.0, "Rice", true),
    ("Biryani (Chicken)", 350.0, "Rice", false),
];

/// Ordered, read-only food catalog
#[derive(Debug, Clone, Serialize)]
pub struct FoodCatalog {
    entries: Vec<FoodEntry>,
}

impl FoodCatalog {
    pub fn new(entries: Vec<FoodEntry>) -> Self {
        Self { entries }
    }

    /// The built-in catalog
    pub fn builtin() -> Self {
        Self::new(
            INDIAN_FOODS
                .iter()
                .map(|&(name, calories, category, veg)| {
                    FoodEntry::new(name, calories, category, veg)
                })
                .collect(),
        )
    }

    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact name lookup
    pub fn find(&self, name: &str) -> Option<&FoodEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Case-insensitive substring search on the name, in catalog order.
    /// An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<&FoodEntry> {
        let needle = term.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .collect()
    }
}

impl Default for FoodCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
