//! Session context
//!
//! Holds the signed-in user for the lifetime of the application state. There
//! is no real authentication: credentials are only checked for presence and
//! the password is never kept.

use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::error::{TrackerError, TrackerResult, ValidationError};
use crate::models::{DietPreference, FitnessGoal, UserProfile};

/// Signup form fields. Name, email and password are required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: Option<u32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub gender: Option<String>,
    pub fitness_goal: Option<FitnessGoal>,
    pub diet_preference: Option<DietPreference>,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<UserProfile>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a profile from the signup form and make it current
    pub fn signup(&mut self, form: SignupForm) -> TrackerResult<&UserProfile> {
        if is_blank(&form.name) || is_blank(&form.email) || is_blank(&form.password) {
            return Err(ValidationError::MissingAccountFields.into());
        }

        let now = Utc::now();
        let profile = UserProfile {
            id: now.timestamp_millis().to_string(),
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            age: form.age,
            height_cm: form.height_cm,
            weight_kg: form.weight_kg,
            gender: form.gender,
            fitness_goal: form.fitness_goal,
            diet_preference: form.diet_preference,
            created_at: now,
        };

        info!(user_id = %profile.id, "Signed up");
        let user: &UserProfile = self.user.insert(profile);
        Ok(user)
    }

    /// Sign in with the demo profile under the given email
    pub fn login(&mut self, email: &str, password: &str) -> TrackerResult<&UserProfile> {
        if is_blank(email) || is_blank(password) {
            return Err(ValidationError::MissingCredentials.into());
        }

        let profile = UserProfile {
            id: "1".to_string(),
            name: "Demo User".to_string(),
            email: email.trim().to_string(),
            age: Some(28),
            height_cm: Some(170.0),
            weight_kg: Some(70.0),
            gender: Some("male".to_string()),
            fitness_goal: Some(FitnessGoal::WeightLoss),
            diet_preference: Some(DietPreference::Vegetarian),
            created_at: Utc::now(),
        };

        info!(user_id = %profile.id, "Logged in");
        let user: &UserProfile = self.user.insert(profile);
        Ok(user)
    }

    /// Sign out, returning the profile that was current
    pub fn logout(&mut self) -> Option<UserProfile> {
        let previous = self.user.take();
        if let Some(ref user) = previous {
            info!(user_id = %user.id, "Logged out");
        }
        previous
    }

    pub fn current_user(&self) -> TrackerResult<&UserProfile> {
        self.user.as_ref().ok_or(TrackerError::NotSignedIn)
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
