//! MCP service

pub mod server;

pub use server::FitTrackService;
