//! Dashboard summary
//!
//! Derived from the records logged during this process; nothing is read from
//! storage.

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use serde::Serialize;

use crate::models::{LogRecord, MealType, UserProfile};

const RECENT_WORKOUTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealSummary {
    pub meal_type: MealType,
    /// e.g. "Breakfast"
    pub label: &'static str,
    pub foods: Vec<String>,
    pub calories: f64,
    /// Local time of day, e.g. "1:05 PM"
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutSummary {
    pub workout: String,
    pub duration: u32,
    pub calories_burned: u32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightPoint {
    pub date: String,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub user_name: String,
    pub calories_consumed_today: f64,
    pub calorie_goal: f64,
    pub calorie_progress_percent: f64,
    pub calories_burned_today: u32,
    pub workouts_this_week: usize,
    pub today_meals: Vec<MealSummary>,
    /// Most recent first
    pub recent_workouts: Vec<WorkoutSummary>,
    /// Oldest first
    pub weight_history: Vec<WeightPoint>,
    pub latest_weight_kg: Option<f64>,
}

fn local_day(ts: DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&Local).date_naive()
}

/// Summarize `records` (oldest first) as of `now`
pub fn summarize<'a>(
    records: impl IntoIterator<Item = &'a LogRecord>,
    user: &UserProfile,
    calorie_goal: f64,
    now: DateTime<Utc>,
) -> DashboardSummary {
    let today = local_day(now);
    let week_start = now - Duration::days(7);

    let mut today_meals = Vec::new();
    let mut calories_burned_today = 0u32;
    let mut workouts_this_week = 0usize;
    let mut workouts = Vec::new();
    let mut weight_history = Vec::new();

    for record in records {
        match record {
            LogRecord::Meal(meal) => {
                if local_day(meal.timestamp) == today {
                    today_meals.push(MealSummary {
                        meal_type: meal.meal_type,
                        label: meal.meal_type.display_name(),
                        foods: meal.foods.iter().map(|l| l.entry.name.clone()).collect(),
                        calories: meal.total_calories,
                        time: meal.timestamp.with_timezone(&Local).format("%-I:%M %p").to_string(),
                    });
                }
            }
            LogRecord::Workout(workout) => {
                if local_day(workout.timestamp) == today {
                    calories_burned_today =
                        calories_burned_today.saturating_add(workout.calories_burned);
                }
                if workout.timestamp > week_start && workout.timestamp <= now {
                    workouts_this_week += 1;
                }
                workouts.push(WorkoutSummary {
                    workout: workout.workout.clone(),
                    duration: workout.duration,
                    calories_burned: workout.calories_burned,
                    timestamp: workout.timestamp,
                });
            }
            LogRecord::Measurement(m) => weight_history.push((m.timestamp, WeightPoint {
                date: m.date.clone(),
                weight_kg: m.weight_kg,
            })),
        }
    }

    workouts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    workouts.truncate(RECENT_WORKOUTS);
    weight_history.sort_by(|a, b| a.0.cmp(&b.0));
    let weight_history: Vec<WeightPoint> = weight_history.into_iter().map(|(_, p)| p).collect();

    let calories_consumed_today: f64 = today_meals.iter().map(|m| m.calories).sum();
    let calorie_progress_percent = if calorie_goal > 0.0 {
        calories_consumed_today / calorie_goal * 100.0
    } else {
        0.0
    };

    DashboardSummary {
        user_name: user.name.clone(),
        calories_consumed_today,
        calorie_goal,
        calorie_progress_percent,
        calories_burned_today,
        workouts_this_week,
        today_meals,
        recent_workouts: workouts,
        latest_weight_kg: weight_history.last().map(|p| p.weight_kg),
        weight_history,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        FoodEntry, Intensity, MealLog, MeasurementLog, SelectedFoodLine, WorkoutLog,
    };

    fn user() -> UserProfile {
        UserProfile {
            id: "1".to_string(),
            name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
            age: None,
            height_cm: None,
            weight_kg: None,
            gender: None,
            fitness_goal: None,
            diet_preference: None,
            created_at: Utc::now(),
        }
    }

    fn meal(calories: f64, at: DateTime<Utc>) -> LogRecord {
        let line = SelectedFoodLine::new(FoodEntry::new("Rice (Cooked)", calories, "Grains", true));
        LogRecord::Meal(MealLog {
            foods: vec![line],
            meal_type: MealType::Lunch,
            total_calories: calories,
            timestamp: at,
        })
    }

    fn workout(name: &str, calories: u32, at: DateTime<Utc>) -> LogRecord {
        LogRecord::Workout(WorkoutLog {
            workout: name.to_string(),
            duration: 30,
            intensity: Intensity::Moderate,
            calories_burned: calories,
            notes: String::new(),
            timestamp: at,
        })
    }

    fn weigh_in(kg: f64, at: DateTime<Utc>) -> LogRecord {
        LogRecord::Measurement(MeasurementLog {
            weight_kg: kg,
            waist_cm: None,
            chest_cm: None,
            hips_cm: None,
            arms_cm: None,
            thighs_cm: None,
            notes: None,
            timestamp: at,
            date: crate::tracking::local_date(at),
        })
    }

    #[test]
    fn test_empty_journal() {
        let summary = summarize(std::iter::empty(), &user(), 2000.0, Utc::now());
        assert_eq!(summary.user_name, "Demo User");
        assert_eq!(summary.calories_consumed_today, 0.0);
        assert_eq!(summary.calorie_progress_percent, 0.0);
        assert!(summary.today_meals.is_empty());
        assert_eq!(summary.latest_weight_kg, None);
    }

    #[test]
    fn test_only_todays_meals_count() {
        let now = Utc::now();
        let records = vec![
            meal(450.0, now - Duration::days(2)),
            meal(320.0, now),
            meal(455.0, now),
        ];
        let summary = summarize(&records, &user(), 2000.0, now);
        assert_eq!(summary.today_meals.len(), 2);
        assert_eq!(summary.today_meals[0].label, "Lunch");
        assert_eq!(summary.calories_consumed_today, 775.0);
        assert!((summary.calorie_progress_percent - 38.75).abs() < 1e-9);
    }

    #[test]
    fn test_workouts() {
        let now = Utc::now();
        let records = vec![
            workout("Old", 100, now - Duration::days(10)),
            workout("Yoga", 180, now - Duration::days(1)),
            workout("Walk", 150, now - Duration::days(3)),
            workout("Run", 300, now),
            workout("Swim", 330, now - Duration::days(5)),
        ];
        let summary = summarize(&records, &user(), 2000.0, now);
        assert_eq!(summary.workouts_this_week, 4);
        assert_eq!(summary.calories_burned_today, 300);

        let recent: Vec<_> = summary.recent_workouts.iter().map(|w| w.workout.as_str()).collect();
        assert_eq!(recent, vec!["Run", "Yoga", "Walk"]);
    }

    #[test]
    fn test_weight_history_is_chronological() {
        let now = Utc::now();
        let records = vec![
            weigh_in(74.2, now - Duration::days(14)),
            weigh_in(75.0, now - Duration::days(28)),
            weigh_in(73.5, now),
        ];
        let summary = summarize(&records, &user(), 2000.0, now);
        let weights: Vec<_> = summary.weight_history.iter().map(|p| p.weight_kg).collect();
        assert_eq!(weights, vec![75.0, 74.2, 73.5]);
        assert_eq!(summary.latest_weight_kg, Some(73.5));
    }
}
