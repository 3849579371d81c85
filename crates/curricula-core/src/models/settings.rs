//! Per-user presentation settings.

use serde::{Deserialize, Serialize};

/// Display and warning-suppression flags. These never influence the
/// resolver, which always computes true status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Draw requisite connectors between courses
    pub show_arrows: bool,
    /// Animate course moves
    pub animate: bool,
    /// Highlight the selected course's requisites
    pub show_select: bool,
    /// Hide semester unit-load warnings
    pub ignore_units: bool,
    /// Hide requisite warnings
    pub ignore_reqs: bool,
    /// Hide semester-offered warnings
    pub ignore_offer: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_arrows: true,
            animate: true,
            show_select: true,
            ignore_units: false,
            ignore_reqs: false,
            ignore_offer: true,
        }
    }
}
