//! Meal aggregator
//!
//! Keeps the foods chosen for the meal being logged and totals their calories.

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{TrackerError, TrackerResult, ValidationError};
use crate::models::{FoodEntry, LogRecord, MealLog, MealType, SelectedFoodLine, Submission};
use crate::sink::LogSink;

pub const MEAL_LOGGED: &str = "Meal logged successfully!";

/// The in-progress meal selection.
///
/// Lines are unique by food name and every line has a quantity of at least 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MealAggregator {
    lines: Vec<SelectedFoodLine>,
}

impl MealAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[SelectedFoodLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one serving of `entry`. Re-adding a food already in the selection
    /// bumps its quantity instead of creating a second line.
    ///
    /// Returns the index of the affected line.
    pub fn add_food(&mut self, entry: &FoodEntry) -> usize {
        match self.lines.iter().position(|l| l.entry.name == entry.name) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(1);
                debug!(food = %entry.name, quantity = line.quantity, "Incremented selected food");
                index
            }
            None => {
                self.lines.push(SelectedFoodLine::new(entry.clone()));
                debug!(food = %entry.name, "Added food to selection");
                self.lines.len() - 1
            }
        }
    }

    /// Remove the line at `index`
    pub fn remove_food(&mut self, index: usize) -> TrackerResult<SelectedFoodLine> {
        self.check_index(index)?;
        let removed = self.lines.remove(index);
        debug!(food = %removed.entry.name, "Removed food from selection");
        Ok(removed)
    }

    /// Overwrite the quantity of the line at `index`. A quantity of zero or
    /// less removes the line, in which case `None` is returned.
    pub fn update_quantity(
        &mut self,
        index: usize,
        new_quantity: i64,
    ) -> TrackerResult<Option<&SelectedFoodLine>> {
        if new_quantity <= 0 {
            self.remove_food(index)?;
            return Ok(None);
        }

        self.check_index(index)?;
        let line = &mut self.lines[index];
        line.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        debug!(food = %line.entry.name, quantity = line.quantity, "Updated selected food quantity");
        Ok(Some(line))
    }

    /// Σ (calories per serving × quantity) over the current selection
    pub fn total_calories(&self) -> f64 {
        self.lines.iter().map(SelectedFoodLine::calories).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Log the selection as a meal.
    ///
    /// Rejected while the selection is empty or no meal type is chosen; the
    /// selection is left as is in that case. On success the record is handed
    /// to `sink` and the selection is cleared.
    pub fn submit(
        &mut self,
        meal_type: Option<MealType>,
        sink: &mut dyn LogSink,
    ) -> TrackerResult<Submission<MealLog>> {
        if self.lines.is_empty() {
            warn!("Rejected meal submission: no foods selected");
            return Err(ValidationError::EmptyFoodSelection.into());
        }
        let Some(meal_type) = meal_type else {
            warn!("Rejected meal submission: no meal type");
            return Err(ValidationError::MissingMealType.into());
        };

        let record = MealLog {
            foods: self.lines.clone(),
            meal_type,
            total_calories: self.total_calories(),
            timestamp: Utc::now(),
        };

        sink.record(&LogRecord::Meal(record.clone()))?;
        self.lines.clear();

        Ok(Submission::to_dashboard(record, MEAL_LOGGED))
    }

    fn check_index(&self, index: usize) -> TrackerResult<()> {
        if index < self.lines.len() {
            Ok(())
        } else {
            Err(TrackerError::IndexOutOfRange {
                index,
                len: self.lines.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FoodCatalog;
    use crate::models::Route;
    use crate::sink::Journal;
    use proptest::prelude::*;

    fn food(catalog: &FoodCatalog, name: &str) -> FoodEntry {
        catalog.find(name).cloned().unwrap()
    }

    #[test]
    fn test_roti_twice_and_dal_once() {
        let catalog = FoodCatalog::builtin();
        let mut meal = MealAggregator::new();
        meal.add_food(&food(&catalog, "Roti (Wheat)"));
        meal.add_food(&food(&catalog, "Roti (Wheat)"));
        meal.add_food(&food(&catalog, "Dal (Moong)"));

        assert_eq!(meal.len(), 2);
        assert_eq!(meal.lines()[0].quantity, 2);
        assert_eq!(meal.lines()[1].quantity, 1);
        assert_eq!(meal.total_calories(), 326.0);
    }

    #[test]
    fn test_add_returns_line_index() {
        let catalog = FoodCatalog::builtin();
        let mut meal = MealAggregator::new();
        assert_eq!(meal.add_food(&food(&catalog, "Poha")), 0);
        assert_eq!(meal.add_food(&food(&catalog, "Upma")), 1);
        assert_eq!(meal.add_food(&food(&catalog, "Poha")), 0);
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let catalog = FoodCatalog::builtin();
        let mut meal = MealAggregator::new();
        meal.add_food(&food(&catalog, "Rajma"));
        meal.add_food(&food(&catalog, "Chole"));

        assert!(meal.update_quantity(0, 0).unwrap().is_none());
        assert_eq!(meal.len(), 1);
        assert_eq!(meal.lines()[0].entry.name, "Chole");
    }

    #[test]
    fn test_update_quantity_negative_removes_line() {
        let catalog = FoodCatalog::builtin();
        let mut meal = MealAggregator::new();
        meal.add_food(&food(&catalog, "Rajma"));
        meal.add_food(&food(&catalog, "Chole"));

        assert!(meal.update_quantity(1, -5).unwrap().is_none());
        assert_eq!(meal.len(), 1);
        assert_eq!(meal.lines()[0].entry.name, "Rajma");
    }

    #[test]
    fn test_update_quantity_overwrites() {
        let catalog = FoodCatalog::builtin();
        let mut meal = MealAggregator::new();
        meal.add_food(&food(&catalog, "Paneer"));

        let line = meal.update_quantity(0, 3).unwrap().unwrap();
        assert_eq!(line.quantity, 3);
        assert_eq!(meal.total_calories(), 795.0);
    }

    #[test]
    fn test_out_of_range_index_is_an_error() {
        let catalog = FoodCatalog::builtin();
        let mut meal = MealAggregator::new();
        meal.add_food(&food(&catalog, "Upma"));

        assert!(matches!(
            meal.remove_food(1),
            Err(TrackerError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert!(matches!(
            meal.update_quantity(4, 2),
            Err(TrackerError::IndexOutOfRange { index: 4, len: 1 })
        ));
        assert!(matches!(
            meal.update_quantity(4, 0),
            Err(TrackerError::IndexOutOfRange { .. })
        ));
        assert_eq!(meal.len(), 1);
        assert_eq!(meal.lines()[0].quantity, 1);
    }

    #[test]
    fn test_submit_empty_selection_is_rejected() {
        let mut meal = MealAggregator::new();
        let mut journal = Journal::new(10);

        let err = meal.submit(Some(MealType::Lunch), &mut journal).unwrap_err();
        assert!(matches!(
            err,
            TrackerError::Validation(ValidationError::EmptyFoodSelection)
        ));
        assert!(journal.is_empty());
    }

    #[test]
    fn test_submit_without_meal_type_keeps_selection() {
        let catalog = FoodCatalog::builtin();
        let mut meal = MealAggregator::new();
        let mut journal = Journal::new(10);
        meal.add_food(&food(&catalog, "Idli (2 pieces)"));

        let err = meal.submit(None, &mut journal).unwrap_err();
        assert!(matches!(
            err,
            TrackerError::Validation(ValidationError::MissingMealType)
        ));
        assert!(journal.is_empty());
        assert_eq!(meal.len(), 1);
    }

    #[test]
    fn test_submit_logs_and_clears() {
        let catalog = FoodCatalog::builtin();
        let mut meal = MealAggregator::new();
        let mut journal = Journal::new(10);
        meal.add_food(&food(&catalog, "Dosa (Plain)"));
        meal.add_food(&food(&catalog, "Dosa (Plain)"));

        let submission = meal.submit(Some(MealType::Breakfast), &mut journal).unwrap();
        assert_eq!(submission.record.total_calories, 336.0);
        assert_eq!(submission.record.meal_type, MealType::Breakfast);
        assert_eq!(submission.record.foods.len(), 1);
        assert_eq!(submission.message, MEAL_LOGGED);
        assert_eq!(submission.navigate_to, Route::Dashboard);

        assert!(meal.is_empty());
        assert_eq!(journal.len(), 1);
        let first = journal.iter().next().unwrap();
        match first {
            LogRecord::Meal(logged) => assert_eq!(logged, &submission.record),
            other => panic!("unexpected record: {:?}", other),
        }
    }

    fn entries(calories: &[u32]) -> Vec<FoodEntry> {
        calories
            .iter()
            .enumerate()
            .map(|(i, &c)| FoodEntry::new(format!("food-{i}"), f64::from(c), "Test", true))
            .collect()
    }

    proptest! {
        #[test]
        fn prop_distinct_adds_make_distinct_lines(
            calories in prop::collection::vec(0u32..1000, 0..30),
        ) {
            let mut meal = MealAggregator::new();
            for entry in entries(&calories) {
                meal.add_food(&entry);
            }
            prop_assert_eq!(meal.len(), calories.len());
            prop_assert!(meal.lines().iter().all(|l| l.quantity == 1));
        }

        #[test]
        fn prop_repeated_add_counts_quantity(n in 1usize..200, calories in 0u32..1000) {
            let entry = FoodEntry::new("Repeat", f64::from(calories), "Test", true);
            let mut meal = MealAggregator::new();
            for _ in 0..n {
                meal.add_food(&entry);
            }
            prop_assert_eq!(meal.len(), 1);
            prop_assert_eq!(meal.lines()[0].quantity as usize, n);
        }

        #[test]
        fn prop_total_matches_expected_sum(
            calories in prop::collection::vec(0u32..1000, 1..20),
            picks in prop::collection::vec(any::<prop::sample::Index>(), 0..60),
            updates in prop::collection::vec((any::<prop::sample::Index>(), 1i64..50), 0..10),
        ) {
            let catalog = entries(&calories);
            let mut meal = MealAggregator::new();
            let mut expected: Vec<(usize, u64)> = Vec::new();

            for pick in &picks {
                let i = pick.index(catalog.len());
                meal.add_food(&catalog[i]);
                match expected.iter_mut().find(|(idx, _)| *idx == i) {
                    Some((_, qty)) => *qty += 1,
                    None => expected.push((i, 1)),
                }
            }

            if !expected.is_empty() {
                for (pos, qty) in &updates {
                    let line = pos.index(expected.len());
                    meal.update_quantity(line, *qty).unwrap();
                    expected[line].1 = *qty as u64;
                }
            }

            let sum: u64 = expected.iter().map(|(i, q)| u64::from(calories[*i]) * q).sum();
            prop_assert_eq!(meal.total_calories(), sum as f64);
            prop_assert!(meal.lines().iter().all(|l| l.quantity >= 1));
        }
    }
}
