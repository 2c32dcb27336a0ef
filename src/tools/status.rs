//! FitTrack Status Tool
//!
//! Provides runtime status information about the FitTrack service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::app::AppState;
use crate::build_info::BuildInfo;

/// Logging instructions for AI assistants
pub const LOGGING_INSTRUCTIONS: &str = r#"
# FitTrack Logging Instructions

FitTrack keeps one session: a signed-in user, a meal selection in progress and
a journal of everything logged since the server started.

## Signing In

- `signup` creates a profile (name, email and password are required).
- `login` signs in with a demo profile under the given email.
- `whoami` shows who is signed in; `logout` signs out and discards the meal
  selection.

## Logging a Meal

1. `search_foods` with part of a food name (empty lists everything).
2. `add_food` with the exact catalog name. Adding the same food again bumps
   its quantity instead of adding a second line.
3. `get_meal_selection` shows each line with its 0-based `index`.
4. `update_food_quantity` sets a line's quantity; 0 or less removes the line.
   `remove_food` removes a line outright.
5. `submit_meal` with `meal_type` = breakfast, lunch, dinner or snack.

A meal is rejected while the selection is empty or no meal type is given. A
rejected meal keeps its selection; a logged meal clears it.

Calories are per serving: total = Σ (calories per serving × quantity).

## Logging a Workout

1. `list_workouts` shows the catalog grouped by category.
2. `estimate_workout_calories` previews the burn:
   calories per minute × minutes × intensity (low 0.8, moderate 1.0, high 1.2),
   rounded to a whole calorie.
3. `log_workout` records it. Workout and a non-zero duration are required;
   intensity defaults to moderate.

## Logging Weight & Measurements

`log_measurements` needs `weight_kg`. Waist, chest, hips, arms, thighs (cm)
and notes are optional.

## Dashboard

`get_dashboard` (signed in only) summarizes today's meals and calories against
the daily goal, calories burned today, workouts in the last 7 days, the three
most recent workouts and the weight history.
"#;

/// Runtime status of the FitTrack service
#[derive(Debug, Clone, Serialize)]
pub struct FitTrackStatus {
    pub build: BuildInfo,
    pub calorie_goal: f64,

    /// Session information
    pub signed_in: bool,
    pub selected_foods: usize,
    pub journal_records: usize,
    pub journal_capacity: usize,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self, state: &AppState) -> FitTrackStatus {
        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        FitTrackStatus {
            build: BuildInfo::current(),
            calorie_goal: state.config().calorie_goal,
            signed_in: state.session().is_signed_in(),
            selected_foods: state.meal().len(),
            journal_records: state.journal().len(),
            journal_capacity: state.journal().capacity(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
