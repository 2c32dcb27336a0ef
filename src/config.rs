//! Runtime configuration
//!
//! Read from environment variables; a missing or unparsable value falls back
//! to its default.

use std::str::FromStr;

use tracing::warn;

pub const DEFAULT_CALORIE_GOAL: f64 = 2000.0;
pub const DEFAULT_JOURNAL_LIMIT: usize = 500;
pub const DEFAULT_LOG_DIRECTIVE: &str = "fittrack=info";

/// tracing filter directive; read by `main` before the config so that
/// configuration warnings are visible
pub const LOG_ENV: &str = "FITTRACK_LOG";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Daily calorie target shown on the dashboard (FITTRACK_CALORIE_GOAL)
    pub calorie_goal: f64,
    /// Records kept in the in-memory journal (FITTRACK_JOURNAL_LIMIT)
    pub journal_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            calorie_goal: DEFAULT_CALORIE_GOAL,
            journal_limit: DEFAULT_JOURNAL_LIMIT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let calorie_goal = parse_or_default(
            &lookup,
            "FITTRACK_CALORIE_GOAL",
            defaults.calorie_goal,
            |v: &f64| v.is_finite() && *v > 0.0,
        );
        let journal_limit = parse_or_default(
            &lookup,
            "FITTRACK_JOURNAL_LIMIT",
            defaults.journal_limit,
            |v: &usize| *v > 0,
        );

        Self {
            calorie_goal,
            journal_limit,
        }
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T, valid: impl Fn(&T) -> bool) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy,
{
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.trim().parse::<T>() {
        Ok(value) if valid(&value) => value,
        _ => {
            warn!(key, value = %raw, "Ignoring invalid configuration value");
            default
        }
    }
}
