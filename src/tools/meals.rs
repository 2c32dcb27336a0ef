//! Meal MCP Tools
//!
//! Food search and the meal selection: add, remove, change quantity and
//! submit.

use serde::Serialize;

use crate::app::AppState;
use crate::error::TrackerError;
use crate::models::{FoodEntry, MealLog, MealType, Submission};
use crate::tracking::MealAggregator;

/// Response for search_foods
#[derive(Debug, Serialize)]
pub struct SearchFoodsResponse {
    pub term: String,
    pub foods: Vec<FoodEntry>,
    pub count: usize,
}

/// One line of the selection as shown to the user
#[derive(Debug, Serialize)]
pub struct SelectionLine {
    pub index: usize,
    pub name: String,
    pub category: String,
    pub calories_per_serving: f64,
    pub quantity: u32,
    pub calories: f64,
}

/// The current meal selection
#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub message: String,
    pub items: Vec<SelectionLine>,
    pub total_calories: f64,
}

impl SelectionResponse {
    fn from_meal(meal: &MealAggregator, message: impl Into<String>) -> Self {
        let items = meal
            .lines()
            .iter()
            .enumerate()
            .map(|(index, line)| SelectionLine {
                index,
                name: line.entry.name.clone(),
                category: line.entry.category.clone(),
                calories_per_serving: line.entry.calories_per_serving,
                quantity: line.quantity,
                calories: line.calories(),
            })
            .collect();

        Self {
            message: message.into(),
            items,
            total_calories: meal.total_calories(),
        }
    }
}

pub fn parse_meal_type(value: Option<&str>) -> Result<Option<MealType>, String> {
    match value.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => MealType::from_str(s)
            .map(Some)
            .ok_or_else(|| TrackerError::InvalidMealType(s.to_string()).to_string()),
    }
}

/// Case-insensitive substring search; an empty term lists every food
pub fn search_foods(state: &AppState, term: Option<&str>) -> SearchFoodsResponse {
    let term = term.unwrap_or_default().to_string();
    let foods: Vec<FoodEntry> = state.foods().search(&term).into_iter().cloned().collect();
    SearchFoodsResponse {
        count: foods.len(),
        term,
        foods,
    }
}

pub fn get_selection(state: &AppState) -> SelectionResponse {
    let message = format!("{} item(s) selected", state.meal().len());
    SelectionResponse::from_meal(state.meal(), message)
}

pub fn add_food(state: &mut AppState, name: &str) -> Result<SelectionResponse, String> {
    let line = state.add_food(name).map_err(|e| e.to_string())?;
    let message = format!("{} x{}", line.entry.name, line.quantity);
    Ok(SelectionResponse::from_meal(state.meal(), message))
}

pub fn remove_food(state: &mut AppState, index: usize) -> Result<SelectionResponse, String> {
    let removed = state.meal_mut().remove_food(index).map_err(|e| e.to_string())?;
    let message = format!("Removed {}", removed.entry.name);
    Ok(SelectionResponse::from_meal(state.meal(), message))
}

/// Set the quantity of a line; zero or less removes it
pub fn update_food_quantity(
    state: &mut AppState,
    index: usize,
    quantity: i64,
) -> Result<SelectionResponse, String> {
    let message = match state
        .meal_mut()
        .update_quantity(index, quantity)
        .map_err(|e| e.to_string())?
    {
        Some(line) => format!("{} x{}", line.entry.name, line.quantity),
        None => format!("Removed item at index {}", index),
    };
    Ok(SelectionResponse::from_meal(state.meal(), message))
}

pub fn discard_selection(state: &mut AppState) -> SelectionResponse {
    let discarded = state.meal().len();
    state.meal_mut().clear();
    SelectionResponse::from_meal(state.meal(), format!("Discarded {} item(s)", discarded))
}

pub fn submit_meal(
    state: &mut AppState,
    meal_type: Option<&str>,
) -> Result<Submission<MealLog>, String> {
    let meal_type = parse_meal_type(meal_type)?;
    state.submit_meal(meal_type).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_type_parsing() {
        assert_eq!(parse_meal_type(None), Ok(None));
        assert_eq!(parse_meal_type(Some("")), Ok(None));
        assert_eq!(parse_meal_type(Some("snack")), Ok(Some(MealType::Snack)));
        assert!(parse_meal_type(Some("brunch")).is_err());
    }

    #[test]
    fn test_selection_flow() {
        let mut state = AppState::default();
        add_food(&mut state, "Roti (Wheat)").unwrap();
        add_food(&mut state, "Roti (Wheat)").unwrap();
        let response = add_food(&mut state, "Dal (Moong)").unwrap();
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.total_calories, 326.0);

        let response = update_food_quantity(&mut state, 0, 0).unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].name, "Dal (Moong)");
        assert_eq!(response.items[0].index, 0);

        assert!(remove_food(&mut state, 4).is_err());
        assert_eq!(get_selection(&state).items.len(), 1);
    }

    #[test]
    fn test_submit_needs_meal_type() {
        let mut state = AppState::default();
        add_food(&mut state, "Poha").unwrap();

        let err = submit_meal(&mut state, None).unwrap_err();
        assert_eq!(err, "Please select a meal type");
        assert_eq!(get_selection(&state).items.len(), 1);

        let submission = submit_meal(&mut state, Some("breakfast")).unwrap();
        assert_eq!(submission.record.total_calories, 76.0);
        assert!(get_selection(&state).items.is_empty());
    }

    #[test]
    fn test_search() {
        let state = AppState::default();
        assert_eq!(search_foods(&state, Some("curry")).count, 3);
        assert_eq!(search_foods(&state, None).count, state.foods().len());
    }
}
