//! Status and kind enumerations for requisites.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Derived satisfaction state of a requisite group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequisiteStatus {
    /// Every referent was found in a valid semester
    Complete,

    /// Some, but not all, referents were found
    Partial,

    /// No referent was found
    #[default]
    Missing,

    /// A referent was found in the wrong semester
    Invalid,
}

impl RequisiteStatus {
    /// Uppercase label used in persisted documents and output.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequisiteStatus::Complete => "COMPLETE",
            RequisiteStatus::Partial => "PARTIAL",
            RequisiteStatus::Missing => "MISSING",
            RequisiteStatus::Invalid => "INVALID",
        }
    }

    /// Badge ranking, higher is worse. Partial and Invalid share a rank.
    pub fn severity(&self) -> u8 {
        match self {
            RequisiteStatus::Complete => 0,
            RequisiteStatus::Partial | RequisiteStatus::Invalid => 1,
            RequisiteStatus::Missing => 2,
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use curricula_core::models::RequisiteStatus;
    ///
    /// assert_eq!(RequisiteStatus::Complete.with_icon(), "✓ Complete");
    /// assert_eq!(RequisiteStatus::Missing.with_icon(), "○ Missing");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            RequisiteStatus::Complete => "✓ Complete",
            RequisiteStatus::Partial => "◐ Partial",
            RequisiteStatus::Missing => "○ Missing",
            RequisiteStatus::Invalid => "✗ Invalid",
        }
    }
}

impl FromStr for RequisiteStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "COMPLETE" => Ok(RequisiteStatus::Complete),
            "PARTIAL" => Ok(RequisiteStatus::Partial),
            "MISSING" => Ok(RequisiteStatus::Missing),
            "INVALID" => Ok(RequisiteStatus::Invalid),
            _ => Err(format!("Invalid requisite status: {s}")),
        }
    }
}

/// Whether a requisite must be taken before or alongside its course.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum RequisiteKind {
    /// Referent must sit in a strictly earlier semester
    #[serde(rename = "PRE")]
    Pre,

    /// Referent must sit in the same semester
    #[serde(rename = "CO")]
    Co,

    /// Unclassified group; referents only need to be present
    #[serde(rename = "-")]
    Unspecified,
}

impl RequisiteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequisiteKind::Pre => "PRE",
            RequisiteKind::Co => "CO",
            RequisiteKind::Unspecified => "-",
        }
    }
}

impl FromStr for RequisiteKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PRE" => Ok(RequisiteKind::Pre),
            "CO" => Ok(RequisiteKind::Co),
            "-" => Ok(RequisiteKind::Unspecified),
            _ => Err(format!("Invalid requisite kind: {s}")),
        }
    }
}
