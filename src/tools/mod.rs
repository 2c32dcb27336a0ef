//! FitTrack Tools module
//!
//! MCP tool implementations for FitTrack.

pub mod account;
pub mod dashboard;
pub mod meals;
pub mod measurements;
pub mod status;
pub mod workouts;
