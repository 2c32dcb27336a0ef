//! Application state
//!
//! Owns everything one user's session touches: the catalogs, the signed-in
//! user, the in-progress meal and the journal of logged records. Every form
//! submission is routed to the console sink and then to the journal.

use chrono::Utc;

use crate::catalog::{FoodCatalog, WorkoutCatalog};
use crate::config::AppConfig;
use crate::dashboard::{self, DashboardSummary};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    Intensity, MealLog, MealType, MeasurementLog, Route, SelectedFoodLine, Submission, WorkoutLog,
};
use crate::session::Session;
use crate::sink::{ConsoleSink, Journal, Tee};
use crate::tracking::{MealAggregator, MeasurementDraft, WorkoutLogDraft};

pub struct AppState {
    config: AppConfig,
    foods: FoodCatalog,
    workouts: WorkoutCatalog,
    session: Session,
    meal: MealAggregator,
    journal: Journal,
    console: ConsoleSink,
}

impl AppState {
    /// State with the built-in catalogs
    pub fn new(config: AppConfig) -> Self {
        Self::with_catalogs(config, FoodCatalog::builtin(), WorkoutCatalog::builtin())
    }

    pub fn with_catalogs(config: AppConfig, foods: FoodCatalog, workouts: WorkoutCatalog) -> Self {
        let journal = Journal::new(config.journal_limit);
        Self {
            config,
            foods,
            workouts,
            session: Session::new(),
            meal: MealAggregator::new(),
            journal,
            console: ConsoleSink,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn foods(&self) -> &FoodCatalog {
        &self.foods
    }

    pub fn workouts(&self) -> &WorkoutCatalog {
        &self.workouts
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn meal(&self) -> &MealAggregator {
        &self.meal
    }

    pub fn meal_mut(&mut self) -> &mut MealAggregator {
        &mut self.meal
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Add one serving of the named catalog food to the meal
    pub fn add_food(&mut self, name: &str) -> TrackerResult<&SelectedFoodLine> {
        let entry = self
            .foods
            .find(name)
            .ok_or_else(|| TrackerError::UnknownFood(name.to_string()))?;
        let index = self.meal.add_food(entry);
        Ok(&self.meal.lines()[index])
    }

    pub fn submit_meal(
        &mut self,
        meal_type: Option<MealType>,
    ) -> TrackerResult<Submission<MealLog>> {
        let mut sink = Tee(&mut self.console, &mut self.journal);
        self.meal.submit(meal_type, &mut sink)
    }

    /// Build a workout draft, resolving the workout name against the catalog
    pub fn workout_draft(
        &self,
        workout: Option<&str>,
        duration_minutes: Option<u32>,
        intensity: Intensity,
        notes: Option<&str>,
    ) -> TrackerResult<WorkoutLogDraft> {
        let mut draft = WorkoutLogDraft::new()
            .with_intensity(intensity)
            .with_notes(notes.unwrap_or_default());

        if let Some(name) = workout.map(str::trim).filter(|s| !s.is_empty()) {
            let workout_type = self
                .workouts
                .find(name)
                .cloned()
                .ok_or_else(|| TrackerError::UnknownWorkout(name.to_string()))?;
            draft = draft.with_workout(workout_type);
        }
        if let Some(minutes) = duration_minutes {
            draft = draft.with_duration(minutes);
        }

        Ok(draft)
    }

    pub fn submit_workout(
        &mut self,
        draft: WorkoutLogDraft,
    ) -> TrackerResult<Submission<WorkoutLog>> {
        let mut sink = Tee(&mut self.console, &mut self.journal);
        draft.submit(&mut sink)
    }

    pub fn submit_measurements(
        &mut self,
        draft: MeasurementDraft,
    ) -> TrackerResult<Submission<MeasurementLog>> {
        let mut sink = Tee(&mut self.console, &mut self.journal);
        draft.submit(&mut sink)
    }

    /// Sign out and drop the in-progress meal
    pub fn logout(&mut self) -> Route {
        self.session.logout();
        self.meal.clear();
        Route::Landing
    }

    pub fn dashboard(&self) -> TrackerResult<DashboardSummary> {
        let user = self.session.current_user()?;
        Ok(dashboard::summarize(
            self.journal.iter(),
            user,
            self.config.calorie_goal,
            Utc::now(),
        ))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::models::LogRecord;

    #[test]
    fn test_add_food_resolves_catalog_names() {
        let mut state = AppState::default();
        assert_eq!(state.add_food("Roti (Wheat)").unwrap().quantity, 1);
        assert_eq!(state.add_food("Roti (Wheat)").unwrap().quantity, 2);
        assert!(matches!(
            state.add_food("Pizza"),
            Err(TrackerError::UnknownFood(_))
        ));
        assert_eq!(state.meal().len(), 1);
    }

    #[test]
    fn test_meal_submission_reaches_journal() {
        let mut state = AppState::default();
        state.add_food("Roti (Wheat)").unwrap();
        state.add_food("Roti (Wheat)").unwrap();
        state.add_food("Dal (Moong)").unwrap();

        let submission = state.submit_meal(Some(MealType::Dinner)).unwrap();
        assert_eq!(submission.record.total_calories, 326.0);
        assert!(state.meal().is_empty());
        assert_eq!(state.journal().len(), 1);
        assert!(matches!(state.journal().iter().next(), Some(LogRecord::Meal(_))));
    }

    #[test]
    fn test_rejected_submission_logs_nothing() {
        let mut state = AppState::default();
        let err = state.submit_meal(Some(MealType::Lunch)).unwrap_err();
        assert!(matches!(
            err,
            TrackerError::Validation(ValidationError::EmptyFoodSelection)
        ));
        assert!(state.journal().is_empty());
    }

    #[test]
    fn test_workout_draft_resolution() {
        let state = AppState::default();
        let draft = state
            .workout_draft(Some("Swimming"), Some(20), Intensity::Low, None)
            .unwrap();
        assert_eq!(draft.estimated_calories(), 176);

        let unset = state.workout_draft(Some("  "), Some(20), Intensity::Low, None).unwrap();
        assert!(unset.workout_type.is_none());

        assert!(matches!(
            state.workout_draft(Some("Skydiving"), None, Intensity::High, None),
            Err(TrackerError::UnknownWorkout(_))
        ));
    }

    #[test]
    fn test_workout_with_unset_duration_is_rejected() {
        let mut state = AppState::default();
        let draft = state
            .workout_draft(Some("Cricket"), None, Intensity::Moderate, None)
            .unwrap();
        assert!(matches!(
            state.submit_workout(draft),
            Err(TrackerError::Validation(ValidationError::MissingDuration))
        ));
        assert!(state.journal().is_empty());
    }

    #[test]
    fn test_dashboard_requires_sign_in() {
        let mut state = AppState::default();
        assert!(matches!(state.dashboard(), Err(TrackerError::NotSignedIn)));

        state.session_mut().login("me@example.com", "pw").unwrap();
        state.submit_measurements(MeasurementDraft::with_weight(72.4)).unwrap();
        let summary = state.dashboard().unwrap();
        assert_eq!(summary.calorie_goal, 2000.0);
        assert_eq!(summary.latest_weight_kg, Some(72.4));
    }

    #[test]
    fn test_logout_discards_selection() {
        let mut state = AppState::default();
        state.session_mut().login("me@example.com", "pw").unwrap();
        state.add_food("Upma").unwrap();

        assert_eq!(state.logout(), Route::Landing);
        assert!(state.meal().is_empty());
        assert!(!state.session().is_signed_in());
    }
}
