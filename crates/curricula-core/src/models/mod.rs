//! Data models for plans, courses and requisites.
//!
//! This module contains the plan-owned domain models of the planner. Catalog
//! records (read-only input data) live in [`crate::catalog`]; the algorithms
//! that operate on these models live in [`crate::engine`]. Display
//! implementations are located in [`crate::display::models`] to keep data
//! structures free of presentation logic.
//!
//! # Examples
//!
//! ```rust
//! use curricula_core::models::{Course, CourseId, Plan, RequisiteStatus};
//!
//! let mut plan = Plan::new("BSCS-2018", 11, 2024, 21.0, 144.0);
//! let id = plan.allocate_id();
//! plan.courses.push(Course::placeholder(id, "MAJOR", 0, 0));
//!
//! let course = plan.course(id).unwrap();
//! assert!(course.is_placeholder());
//! assert_eq!(course.overall_status(), RequisiteStatus::Complete);
//! ```

pub mod course;
pub mod plan;
pub mod requisite;
pub mod settings;
pub mod status;


pub use course::{counts_toward_units, Course, CourseId, NOT_COUNTED_CODES};
pub use plan::{
    semester_label, Plan, SpecialBuckets, SpecialCategory, CUSTOM_CATALOG_BASE,
};
pub use requisite::{Referent, Requisite, RequisiteTarget, Standing, CUSTOM_REQUISITE_ID};
pub use settings::Settings;
pub use status::{RequisiteKind, RequisiteStatus};
