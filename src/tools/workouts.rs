//! Workout MCP Tools
//!
//! Workout catalog listing, calorie estimates and workout logging.

use serde::Serialize;

use crate::app::AppState;
use crate::catalog::WorkoutGroup;
use crate::error::TrackerError;
use crate::models::{Intensity, Submission, WorkoutLog};

/// Response for list_workouts
#[derive(Debug, Serialize)]
pub struct ListWorkoutsResponse {
    pub groups: Vec<WorkoutGroup>,
    pub total: usize,
}

/// Response for estimate_workout_calories
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub workout: Option<String>,
    pub duration_minutes: Option<u32>,
    pub intensity: Intensity,
    pub estimated_calories: u32,
}

/// The fields of the workout form
#[derive(Debug, Default)]
pub struct WorkoutInput<'a> {
    pub workout: Option<&'a str>,
    pub duration_minutes: Option<u32>,
    pub intensity: Option<&'a str>,
    pub notes: Option<&'a str>,
}

/// Missing or blank intensity means moderate
pub fn parse_intensity(value: Option<&str>) -> Result<Intensity, String> {
    match value.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(Intensity::default()),
        Some(s) => Intensity::from_str(s)
            .ok_or_else(|| TrackerError::InvalidIntensity(s.to_string()).to_string()),
    }
}

pub fn list_workouts(state: &AppState) -> ListWorkoutsResponse {
    ListWorkoutsResponse {
        groups: state.workouts().grouped(),
        total: state.workouts().len(),
    }
}

/// Live estimate; zero until both the workout and the duration are given
pub fn estimate_workout_calories(
    state: &AppState,
    input: WorkoutInput<'_>,
) -> Result<EstimateResponse, String> {
    let intensity = parse_intensity(input.intensity)?;
    let draft = state
        .workout_draft(input.workout, input.duration_minutes, intensity, input.notes)
        .map_err(|e| e.to_string())?;

    Ok(EstimateResponse {
        estimated_calories: draft.estimated_calories(),
        workout: draft.workout_type.map(|w| w.name),
        duration_minutes: draft.duration_minutes,
        intensity,
    })
}

pub fn log_workout(
    state: &mut AppState,
    input: WorkoutInput<'_>,
) -> Result<Submission<WorkoutLog>, String> {
    let intensity = parse_intensity(input.intensity)?;
    let draft = state
        .workout_draft(input.workout, input.duration_minutes, intensity, input.notes)
        .map_err(|e| e.to_string())?;
    state.submit_workout(draft).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_defaults_to_moderate() {
        assert_eq!(parse_intensity(None), Ok(Intensity::Moderate));
        assert_eq!(parse_intensity(Some("HIGH")), Ok(Intensity::High));
        assert!(parse_intensity(Some("extreme")).is_err());
    }

    #[test]
    fn test_estimate_and_log() {
        let mut state = AppState::default();
        let input = || WorkoutInput {
            workout: Some("Running (6 mph)"),
            duration_minutes: Some(30),
            intensity: Some("high"),
            notes: Some("park loop"),
        };

        assert_eq!(
            estimate_workout_calories(&state, input()).unwrap().estimated_calories,
            360
        );

        let submission = log_workout(&mut state, input()).unwrap();
        assert_eq!(submission.record.calories_burned, 360);
        assert_eq!(submission.record.notes, "park loop");
        assert_eq!(state.journal().len(), 1);
    }

    #[test]
    fn test_estimate_without_duration_is_zero() {
        let state = AppState::default();
        let response = estimate_workout_calories(
            &state,
            WorkoutInput {
                workout: Some("Yoga"),
                ..WorkoutInput::default()
            },
        )
        .unwrap();
        assert_eq!(response.estimated_calories, 0);
    }

    #[test]
    fn test_listing_groups_every_workout() {
        let response = list_workouts(&AppState::default());
        let grouped: usize = response.groups.iter().map(|g| g.workouts.len()).sum();
        assert_eq!(grouped, response.total);
    }
}
