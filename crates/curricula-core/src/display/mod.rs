//! Display formatting for plans, catalog records and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! Views that need more context than a single value, such as a plan together
//! with the user's warning settings, are wrapper types in this module. All
//! output is markdown, rendered for the terminal by the CLI and returned
//! verbatim to MCP clients.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Views & Result  │    │   Formatted     │
//! │ (Plan, Course)  │───▶│    Wrappers     │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`board`]: Semester-by-semester plan view with warnings (PlanBoard)
//! - [`report`]: Whole-plan report with special-category fills (PlanReport)
//! - [`collections`]: Catalog listings and load tables
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use curricula_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Semester 9 added")
//!     .with_detail("Plan now has 10 semesters");
//! assert_eq!(
//!     status.to_string(),
//!     "✓ Semester 9 added\n  - Plan now has 10 semesters\n"
//! );
//! ```

pub mod board;
pub mod collections;
pub mod datetime;
pub mod models;
pub mod report;
pub mod results;
pub mod status;

pub use board::PlanBoard;
pub use collections::{CatalogCourses, Curricula, Programs, SemesterLoads};
pub use datetime::SavedAt;
pub use report::PlanReport;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
