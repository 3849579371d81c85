//! High-level planner API.
//!
//! The [`Planner`] is the single logical writer of one user's plan. It owns
//! the loaded catalog, the in-memory plan and the user's settings, and is the
//! caller the engine expects: it checks every precondition (known catalog
//! ids, semester range, free destination slot, empty trailing semester)
//! before handing an edit to the engine, reruns the requisite resolver after
//! each successful mutation and schedules a debounced save.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI / MCP     │    │     Planner     │    │   PlanWriter    │
//! │  (params::*)    │───▶│ (checks, engine,│───▶│ (debounced db   │
//! │                 │    │  resolver)      │    │  writes)        │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`plan_ops`]: Plan, semester, catalog and settings operations
//! - [`course_ops`]: Course placement and editing operations
//! - [`writer`]: Background persistence
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use curricula_core::{PlannerBuilder, params::{AddCourse, InstantiatePlan}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut planner = PlannerBuilder::new()
//!     .with_catalog_dir(Some("data/catalog"))
//!     .build()
//!     .await?;
//!
//! planner.instantiate_plan(&InstantiatePlan {
//!     program_id: 1,
//!     curriculum_code: "BSCS-2018".to_string(),
//!     start_year: 2024,
//! })?;
//! let course = planner.add_course(&AddCourse { catalog_id: 210, semester: 3 })?;
//! println!("{course}");
//!
//! planner.flush().await;
//! # Ok(())
//! # }
//! ```

use jiff::Timestamp;

use crate::{
    catalog::Catalog,
    engine::resolve_requisites,
    error::{PlanError, Result},
    models::{Plan, Settings},
};

pub mod builder;
pub mod course_ops;
pub mod plan_ops;
pub mod writer;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;
pub use writer::{PlanWriter, DEFAULT_DEBOUNCE};

/// Main planner interface for one user's plan.
pub struct Planner {
    pub(crate) catalog: Catalog,
    pub(crate) user: String,
    pub(crate) plan: Option<Plan>,
    pub(crate) saved_at: Option<Timestamp>,
    pub(crate) settings: Settings,
    pub(crate) writer: PlanWriter,
}

impl Planner {
    pub(crate) fn new(
        catalog: Catalog,
        user: String,
        plan: Option<Plan>,
        saved_at: Option<Timestamp>,
        settings: Settings,
        writer: PlanWriter,
    ) -> Self {
        let plan = plan.map(|mut plan| {
            resolve_requisites(&mut plan);
            plan
        });
        Self {
            catalog,
            user,
            plan,
            saved_at,
            settings,
            writer,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Identity whose plan this planner edits.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The current plan.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::NotFound` if the user has no plan yet.
    pub fn plan(&self) -> Result<&Plan> {
        self.plan.as_ref().ok_or_else(PlanError::no_plan)
    }

    pub fn has_plan(&self) -> bool {
        self.plan.is_some()
    }

    /// When the plan was last written, as of session start.
    pub fn saved_at(&self) -> Option<&Timestamp> {
        self.saved_at.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Writes any pending change and waits for it.
    pub async fn flush(&self) {
        self.writer.flush().await;
    }

    /// Flushes pending changes and stops the background writer.
    pub async fn shutdown(self) {
        self.writer.shutdown().await;
    }

    /// Mutable access to the plan for an edit.
    pub(crate) fn plan_mut(&mut self) -> Result<&mut Plan> {
        self.plan.as_mut().ok_or_else(PlanError::no_plan)
    }

    /// Resolves requisites after a mutation and schedules the save.
    pub(crate) fn commit(&mut self) {
        if let Some(plan) = self.plan.as_mut() {
            resolve_requisites(plan);
            self.writer.schedule_save(plan);
        }
    }
}

/// Rejects semester indices outside the plan's axis.
pub(crate) fn check_semester(plan: &Plan, semester: u32) -> Result<()> {
    if semester >= plan.sems {
        return Err(PlanError::invalid_input("semester").with_reason(format!(
            "Semester {semester} is outside the plan's {} semesters",
            plan.sems
        )));
    }
    Ok(())
}
