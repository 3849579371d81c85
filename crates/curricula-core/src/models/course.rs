//! Course model definition and related functionality.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Requisite, RequisiteStatus};
use crate::catalog::CatalogCourse;

/// Stable identifier of a course within one plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct CourseId(pub u64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Course codes that carry units but never count toward load or standing.
pub const NOT_COUNTED_CODES: [&str; 5] = ["HK 11", "HK 12", "HK 13", "NSTP 1", "NSTP 2"];

/// Returns true when units of a course with this code count toward
/// required totals.
pub fn counts_toward_units(code: &str) -> bool {
    !NOT_COUNTED_CODES.contains(&code)
}

/// A course placed in a plan (or a placeholder for an open slot).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    /// Unique identifier within the plan
    pub id: CourseId,

    /// Catalog entry this course was created from; `None` for placeholders
    pub catalog_id: Option<u64>,

    pub title: String,

    pub description: String,

    /// Course code, or the upper-cased category label for placeholders
    pub code: String,

    pub units: f64,

    /// Zero-based chronological semester index
    pub semester: u32,

    /// Order within the semester, unique per semester
    pub position: u32,

    #[serde(default)]
    pub requisites: Vec<Requisite>,

    /// Semester-in-year indices (0, 1, 2) the course is offered in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offered: Option<Vec<u32>>,
}

impl Course {
    /// Creates a placeholder for an open curriculum slot.
    pub fn placeholder(id: CourseId, code: impl Into<String>, semester: u32, position: u32) -> Self {
        Self {
            id,
            catalog_id: None,
            title: "-".to_string(),
            description: "-".to_string(),
            code: code.into(),
            units: 0.0,
            semester,
            position,
            requisites: Vec::new(),
            offered: None,
        }
    }

    /// Creates a course from a catalog entry with fresh, unresolved
    /// requisites.
    pub fn from_catalog(id: CourseId, entry: &CatalogCourse, semester: u32, position: u32) -> Self {
        let mut course = Self::placeholder(id, "", semester, position);
        course.fill_from_catalog(entry);
        course
    }

    /// Overwrites the catalog-derived data of this course in place, keeping
    /// its identifier, semester and position.
    pub fn fill_from_catalog(&mut self, entry: &CatalogCourse) {
        self.catalog_id = Some(entry.id);
        self.title = entry.title.clone();
        self.description = entry.description.clone();
        self.code = entry.code.clone();
        self.units = entry.units.unwrap_or(0.0);
        self.requisites = entry.requisites.iter().map(Requisite::from_catalog).collect();
        self.offered = Some(entry.sem_offered.clone());
    }

    /// True for courses with no catalog link.
    pub fn is_placeholder(&self) -> bool {
        self.catalog_id.is_none()
    }

    /// Worst status among the course's requisites; `Complete` when it has
    /// none. Among equally ranked statuses the first one wins.
    pub fn overall_status(&self) -> RequisiteStatus {
        self.requisites
            .iter()
            .map(|r| r.status)
            .fold(RequisiteStatus::Complete, |worst, status| {
                if status.severity() > worst.severity() {
                    status
                } else {
                    worst
                }
            })
    }

    /// Whether the course is offered in the semester it occupies. Courses
    /// without an offering list are offered every semester.
    pub fn is_offered(&self) -> bool {
        self.offered
            .as_ref()
            .is_none_or(|offered| offered.contains(&(self.semester % 3)))
    }

    /// Units counted toward required totals.
    pub fn counted_units(&self) -> f64 {
        if counts_toward_units(&self.code) {
            self.units
        } else {
            0.0
        }
    }
}
