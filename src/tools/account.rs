//! Account MCP Tools
//!
//! Signup, login, logout and the current-user lookup.

use serde::Serialize;

use crate::app::AppState;
use crate::models::{DietPreference, FitnessGoal, Route, UserProfile};
use crate::session::SignupForm;

/// Response for signup and login
#[derive(Debug, Serialize)]
pub struct SignedInResponse {
    pub user: UserProfile,
    pub navigate_to: Route,
}

/// Response for logout
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    /// Name of the user that was signed in, if any
    pub signed_out: Option<String>,
    pub navigate_to: Route,
}

/// Response for whoami
#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    pub signed_in: bool,
    pub user: Option<UserProfile>,
}

pub fn parse_fitness_goal(value: Option<&str>) -> Result<Option<FitnessGoal>, String> {
    match value.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => FitnessGoal::from_str(s).map(Some).ok_or_else(|| {
            format!(
                "Unknown fitness goal '{}'. Use weight-loss, weight-gain, muscle-gain, \
                 maintenance or general-fitness",
                s
            )
        }),
    }
}

pub fn parse_diet_preference(value: Option<&str>) -> Result<Option<DietPreference>, String> {
    match value.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => DietPreference::from_str(s).map(Some).ok_or_else(|| {
            format!(
                "Unknown diet preference '{}'. Use vegetarian, non-vegetarian, vegan or eggetarian",
                s
            )
        }),
    }
}

/// Create an account and sign in as it
pub fn signup(state: &mut AppState, form: SignupForm) -> Result<SignedInResponse, String> {
    let user = state
        .session_mut()
        .signup(form)
        .map_err(|e| e.to_string())?
        .clone();

    Ok(SignedInResponse {
        user,
        navigate_to: Route::Dashboard,
    })
}

/// Sign in with the demo profile
pub fn login(
    state: &mut AppState,
    email: &str,
    password: &str,
) -> Result<SignedInResponse, String> {
    let user = state
        .session_mut()
        .login(email, password)
        .map_err(|e| e.to_string())?
        .clone();

    Ok(SignedInResponse {
        user,
        navigate_to: Route::Dashboard,
    })
}

pub fn logout(state: &mut AppState) -> LogoutResponse {
    let signed_out = state.session().current_user().ok().map(|u| u.name.clone());
    let navigate_to = state.logout();
    LogoutResponse {
        signed_out,
        navigate_to,
    }
}

pub fn whoami(state: &AppState) -> WhoAmIResponse {
    let user = state.session().current_user().ok().cloned();
    WhoAmIResponse {
        signed_in: user.is_some(),
        user,
    }
}
