//! Error handling utilities for MCP server

use curricula_core::PlanError;
use rmcp::ErrorData;

/// Converts a planner error into an MCP error. Caller mistakes (unknown ids,
/// occupied slots, missing plan) are reported as invalid parameters so the
/// client can correct the call; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &PlanError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        PlanError::NotFound { .. } | PlanError::InvalidInput { .. } => {
            ErrorData::invalid_params(text, None)
        }
        _ => ErrorData::internal_error(text, None),
    }
}
