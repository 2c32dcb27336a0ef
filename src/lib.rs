//! FitTrack Library
//!
//! Core functionality for meal, workout and body measurement logging.

pub mod app;
pub mod build_info;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod mcp;
pub mod models;
pub mod session;
pub mod sink;
pub mod tools;
pub mod tracking;
