//! FitTrack MCP Server Implementation
//!
//! Implements the MCP server with all FitTrack tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::app::AppState;
use crate::session::SignupForm;
use crate::tools::status::StatusTracker;
use crate::tools::workouts::WorkoutInput;
use crate::tools::{account, dashboard, meals, measurements, workouts};
use crate::tracking::MeasurementDraft;

/// FitTrack MCP Service
#[derive(Clone)]
pub struct FitTrackService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    state: Arc<std::sync::Mutex<AppState>>,
    tool_router: ToolRouter<FitTrackService>,
}

impl FitTrackService {
    pub fn new(state: AppState) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            state: Arc::new(std::sync::Mutex::new(state)),
            tool_router: Self::tool_router(),
        }
    }

    fn state(&self) -> Result<std::sync::MutexGuard<'_, AppState>, McpError> {
        self.state
            .lock()
            .map_err(|e| McpError::internal_error(format!("State lock poisoned: {}", e), None))
    }
}

fn tool_error(message: String) -> McpError {
    McpError::internal_error(message, None)
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Account Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SignupParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: Option<u32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub gender: Option<String>,
    /// weight-loss, weight-gain, muscle-gain, maintenance or general-fitness
    pub fitness_goal: Option<String>,
    /// vegetarian, non-vegetarian, vegan or eggetarian
    pub diet_preference: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Meal Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchFoodsParams {
    /// Part of a food name; empty lists every food
    #[serde(default)]
    pub term: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddFoodParams {
    /// Exact catalog name, e.g. "Roti (Wheat)"
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SelectionIndexParams {
    /// 0-based line index from get_meal_selection
    pub index: usize,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateFoodQuantityParams {
    pub index: usize,
    /// New quantity; 0 or less removes the line
    pub quantity: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SubmitMealParams {
    /// breakfast, lunch, dinner or snack
    pub meal_type: Option<String>,
}

// ============================================================================
// Workout & Measurement Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WorkoutParams {
    /// Exact catalog name, e.g. "Swimming"
    pub workout: Option<String>,
    pub duration_minutes: Option<u32>,
    /// low, moderate or high (default moderate)
    pub intensity: Option<String>,
    pub notes: Option<String>,
}

impl WorkoutParams {
    fn input(&self) -> WorkoutInput<'_> {
        WorkoutInput {
            workout: self.workout.as_deref(),
            duration_minutes: self.duration_minutes,
            intensity: self.intensity.as_deref(),
            notes: self.notes.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LogMeasurementsParams {
    pub weight_kg: Option<f64>,
    pub waist_cm: Option<f64>,
    pub chest_cm: Option<f64>,
    pub hips_cm: Option<f64>,
    pub arms_cm: Option<f64>,
    pub thighs_cm: Option<f64>,
    pub notes: Option<String>,
}

#[tool_router]
impl FitTrackService {
    // --- Status ---

    #[tool(description = "Get the current status of the FitTrack service including build info, session state, journal size and process information")]
    async fn fittrack_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = {
            let state = self.state()?;
            tracker.get_status(&state)
        };
        json_result(&status)
    }

    #[tool(description = "Get step-by-step instructions for logging meals, workouts and measurements. Call this when starting a session or when unsure how to use the FitTrack tools.")]
    fn logging_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::LOGGING_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(LOGGING_INSTRUCTIONS)]))
    }

    // --- Account ---

    #[tool(description = "Create an account and sign in. Name, email and password are required.")]
    fn signup(&self, Parameters(p): Parameters<SignupParams>) -> Result<CallToolResult, McpError> {
        let form = SignupForm {
            fitness_goal: account::parse_fitness_goal(p.fitness_goal.as_deref())
                .map_err(|e| McpError::invalid_params(e, None))?,
            diet_preference: account::parse_diet_preference(p.diet_preference.as_deref())
                .map_err(|e| McpError::invalid_params(e, None))?,
            name: p.name,
            email: p.email,
            password: p.password,
            age: p.age,
            height_cm: p.height_cm,
            weight_kg: p.weight_kg,
            gender: p.gender,
        };
        let mut state = self.state()?;
        let result = account::signup(&mut state, form).map_err(tool_error)?;
        json_result(&result)
    }

    #[tool(description = "Sign in with email and password (demo profile)")]
    fn login(&self, Parameters(p): Parameters<LoginParams>) -> Result<CallToolResult, McpError> {
        let mut state = self.state()?;
        let result = account::login(&mut state, &p.email, &p.password).map_err(tool_error)?;
        json_result(&result)
    }

    #[tool(description = "Sign out. Discards the meal selection in progress.")]
    fn logout(&self) -> Result<CallToolResult, McpError> {
        let mut state = self.state()?;
        json_result(&account::logout(&mut state))
    }

    #[tool(description = "Show the signed-in user, if any")]
    fn whoami(&self) -> Result<CallToolResult, McpError> {
        let state = self.state()?;
        json_result(&account::whoami(&state))
    }

    // --- Meals ---

    #[tool(description = "Search the food catalog by name (case-insensitive substring). Calories are per serving.")]
    fn search_foods(
        &self,
        Parameters(p): Parameters<SearchFoodsParams>,
    ) -> Result<CallToolResult, McpError> {
        let state = self.state()?;
        json_result(&meals::search_foods(&state, p.term.as_deref()))
    }

    #[tool(description = "Add one serving of a catalog food to the meal selection. Adding a food already selected increases its quantity.")]
    fn add_food(
        &self,
        Parameters(p): Parameters<AddFoodParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut state = self.state()?;
        let result = meals::add_food(&mut state, &p.name).map_err(tool_error)?;
        json_result(&result)
    }

    #[tool(description = "Remove a line from the meal selection by index")]
    fn remove_food(
        &self,
        Parameters(p): Parameters<SelectionIndexParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut state = self.state()?;
        let result = meals::remove_food(&mut state, p.index).map_err(tool_error)?;
        json_result(&result)
    }

    #[tool(description = "Set the quantity of a selected food. A quantity of 0 or less removes it.")]
    fn update_food_quantity(
        &self,
        Parameters(p): Parameters<UpdateFoodQuantityParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut state = self.state()?;
        let result = meals::update_food_quantity(&mut state, p.index, p.quantity)
            .map_err(tool_error)?;
        json_result(&result)
    }

    #[tool(description = "Show the meal selection with line indexes and the running calorie total")]
    fn get_meal_selection(&self) -> Result<CallToolResult, McpError> {
        let state = self.state()?;
        json_result(&meals::get_selection(&state))
    }

    #[tool(description = "Discard the meal selection without logging it")]
    fn discard_meal_selection(&self) -> Result<CallToolResult, McpError> {
        let mut state = self.state()?;
        json_result(&meals::discard_selection(&mut state))
    }

    #[tool(description = "Log the meal selection as a meal of the given type. Clears the selection on success.")]
    fn submit_meal(
        &self,
        Parameters(p): Parameters<SubmitMealParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut state = self.state()?;
        let result = meals::submit_meal(&mut state, p.meal_type.as_deref()).map_err(tool_error)?;
        json_result(&result)
    }

    // --- Workouts ---

    #[tool(description = "List the workout catalog grouped by category, with calories burned per minute")]
    fn list_workouts(&self) -> Result<CallToolResult, McpError> {
        let state = self.state()?;
        json_result(&workouts::list_workouts(&state))
    }

    #[tool(description = "Estimate calories burned for a workout, duration and intensity without logging anything")]
    fn estimate_workout_calories(
        &self,
        Parameters(p): Parameters<WorkoutParams>,
    ) -> Result<CallToolResult, McpError> {
        let state = self.state()?;
        let result = workouts::estimate_workout_calories(&state, p.input()).map_err(tool_error)?;
        json_result(&result)
    }

    #[tool(description = "Log a workout session. Workout and a non-zero duration are required.")]
    fn log_workout(
        &self,
        Parameters(p): Parameters<WorkoutParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut state = self.state()?;
        let result = workouts::log_workout(&mut state, p.input()).map_err(tool_error)?;
        json_result(&result)
    }

    // --- Measurements ---

    #[tool(description = "Log weight (kg, required) and optional body measurements (cm)")]
    fn log_measurements(
        &self,
        Parameters(p): Parameters<LogMeasurementsParams>,
    ) -> Result<CallToolResult, McpError> {
        let draft = MeasurementDraft {
            weight_kg: p.weight_kg,
            waist_cm: p.waist_cm,
            chest_cm: p.chest_cm,
            hips_cm: p.hips_cm,
            arms_cm: p.arms_cm,
            thighs_cm: p.thighs_cm,
            notes: p.notes,
        };
        let mut state = self.state()?;
        let result = measurements::log_measurements(&mut state, draft).map_err(tool_error)?;
        json_result(&result)
    }

    // --- Dashboard ---

    #[tool(description = "Summarize today's meals and calories, calories burned, this week's workouts and weight history for the signed-in user")]
    fn get_dashboard(&self) -> Result<CallToolResult, McpError> {
        let state = self.state()?;
        let result = dashboard::get_dashboard(&state).map_err(tool_error)?;
        json_result(&result)
    }
}

#[tool_handler]
impl ServerHandler for FitTrackService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "fittrack".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("FitTrack".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "FitTrack - meal, workout and body measurement logging. \
                 IMPORTANT: Call logging_instructions before logging anything. \
                 Account: signup/login/logout/whoami. \
                 Meals: search_foods, add_food, remove_food, update_food_quantity, \
                 get_meal_selection, discard_meal_selection, submit_meal. \
                 Workouts: list_workouts, estimate_workout_calories, log_workout. \
                 Measurements: log_measurements. \
                 Dashboard: get_dashboard (requires sign in)."
                    .into(),
            ),
        }
    }
}
