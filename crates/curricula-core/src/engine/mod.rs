//! The planning engine.
//!
//! Four synchronous, infallible parts operate on an in-memory [`Plan`]:
//!
//! - [`instantiate`]: expands a curriculum template into an initial plan
//! - grid operations ([`Plan::add_course`], [`Plan::move_course`], ...):
//!   structural edits of the course list
//! - [`resolve_requisites`]: recomputes every requisite status
//! - [`semester_load`]: advisory per-semester unit checks
//!
//! Callers run the resolver after any structural change before reading a
//! status.
//!
//! ```rust
//! use curricula_core::{
//!     engine::resolve_requisites,
//!     models::{Course, Plan, Referent, Requisite, RequisiteKind, RequisiteStatus},
//! };
//!
//! let mut plan = Plan::new("BSCS", 3, 2024, 18.0, 120.0);
//! let id = plan.allocate_id();
//! let mut intro = Course::placeholder(id, "CMSC 11", 0, 0);
//! intro.catalog_id = Some(10);
//! plan.add_course(intro);
//!
//! let id = plan.allocate_id();
//! let mut next = Course::placeholder(id, "CMSC 21", 1, 0);
//! next.catalog_id = Some(11);
//! next.requisites.push(Requisite::new(1, RequisiteKind::Pre, vec![Referent::course("CMSC 11", 10)]));
//! plan.add_course(next);
//!
//! resolve_requisites(&mut plan);
//! assert_eq!(plan.course(id).map(Course::overall_status), Some(RequisiteStatus::Complete));
//! ```
//!
//! [`Plan`]: crate::models::Plan
//! [`Plan::add_course`]: crate::models::Plan::add_course
//! [`Plan::move_course`]: crate::models::Plan::move_course

mod grid;
pub mod instantiate;
pub mod load;
pub mod resolver;

#[cfg(test)]
mod tests;

pub use instantiate::{instantiate, semester_count, semester_index};
pub use load::{
    curriculum_units, semester_load, semester_loads, unoffered_courses, CurriculumUnits,
    LoadIssue, SemesterLoad, MIDYEAR_MAX_UNITS, REGULAR_MIN_UNITS,
};
pub use resolver::{classify, evaluate, resolve_requisites, units_before};
