//! Build metadata
//!
//! `build.rs` stamps every compilation with a build number and a UTC
//! timestamp. They surface in the startup banner and the status tool.

use serde::Serialize;

use crate::config::AppConfig;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const RAW_BUILD_NUMBER: &str = env!("FITTRACK_BUILD_NUMBER");
const BUILD_TIMESTAMP: &str = env!("FITTRACK_BUILD_TIMESTAMP");

/// Which binary is answering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self::from_stamp(RAW_BUILD_NUMBER, BUILD_TIMESTAMP)
    }

    /// A malformed build number reads as 0
    fn from_stamp(build_number: &str, build_timestamp: &'static str) -> Self {
        Self {
            version: VERSION,
            build_number: build_number.trim().parse().unwrap_or(0),
            build_timestamp,
        }
    }

    /// e.g. "FitTrack v0.1.0 (build 12)"
    pub fn label(&self) -> String {
        format!("FitTrack v{} (build {})", self.version, self.build_number)
    }
}

/// Banner text for stderr: build stamp plus the settings in effect
pub fn startup_banner(info: &BuildInfo, config: &AppConfig) -> String {
    let rule = "=".repeat(47);
    [
        rule.clone(),
        format!("  {}", info.label()),
        format!("  Compiled: {}", info.build_timestamp),
        format!("  Daily calorie goal: {}", config.calorie_goal),
        format!("  Journal keeps {} records", config.journal_limit),
        rule,
    ]
    .join("\n")
}

pub fn print_startup_banner(config: &AppConfig) {
    eprintln!("{}", startup_banner(&BuildInfo::current(), config));
}
