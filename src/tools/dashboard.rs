//! Dashboard MCP Tool

use crate::app::AppState;
use crate::dashboard::DashboardSummary;

/// Summary for the signed-in user
pub fn get_dashboard(state: &AppState) -> Result<DashboardSummary, String> {
    state
        .dashboard()
        .map_err(|e| format!("Cannot show dashboard: {}", e))
}
