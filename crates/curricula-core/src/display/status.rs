//! Confirmation messages for operations without a resource to show.

use std::fmt;

/// A one-line outcome with optional detail lines, e.g. for semester
/// changes and settings updates.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
    pub details: Vec<String>,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
            details: Vec::new(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
            details: Vec::new(),
        }
    }

    /// Appends a detail line shown under the message.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = if self.success { "✓" } else { "✗" };
        writeln!(f, "{icon} {}", self.message)?;
        for detail in &self.details {
            writeln!(f, "  - {detail}")?;
        }
        Ok(())
    }
}
