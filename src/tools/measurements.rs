//! Measurement MCP Tools

use crate::app::AppState;
use crate::models::{MeasurementLog, Submission};
use crate::tracking::MeasurementDraft;

pub fn log_measurements(
    state: &mut AppState,
    draft: MeasurementDraft,
) -> Result<Submission<MeasurementLog>, String> {
    state.submit_measurements(draft).map_err(|e| e.to_string())
}
