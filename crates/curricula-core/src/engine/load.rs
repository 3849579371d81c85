//! Semester unit-load validation.
//!
//! Advisory only: results are reported for display and never block an edit.

use serde::{Deserialize, Serialize};

use crate::models::{Course, Plan};

/// Minimum units of a regular (1st or 2nd) semester.
pub const REGULAR_MIN_UNITS: f64 = 15.0;
/// Maximum units of a midyear semester.
pub const MIDYEAR_MAX_UNITS: f64 = 6.0;

/// Unit totals and bounds of one semester.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SemesterLoad {
    pub semester: u32,
    /// Units excluding administrative zero-weight codes
    pub req_units: f64,
    /// Units of every course in the semester
    pub total_units: f64,
    pub min_units: f64,
    pub max_units: f64,
    pub valid: bool,
}

/// Why a semester's load is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadIssue {
    /// Required units exceed the maximum
    Overloaded,
    /// Total units fall below the minimum
    Underloaded,
}

impl SemesterLoad {
    /// Overload is reported ahead of underload.
    pub fn issue(&self) -> Option<LoadIssue> {
        if self.req_units > self.max_units {
            Some(LoadIssue::Overloaded)
        } else if self.total_units < self.min_units {
            Some(LoadIssue::Underloaded)
        } else {
            None
        }
    }

    /// Units carried by administrative codes only.
    pub fn uncounted_units(&self) -> f64 {
        self.total_units - self.req_units
    }
}

/// Computes the load of one semester.
pub fn semester_load(plan: &Plan, semester: u32) -> SemesterLoad {
    let courses = plan.courses.iter().filter(|c| c.semester == semester);
    let (req_units, total_units) = courses.fold((0.0, 0.0), |(req, total), course| {
        (req + course.counted_units(), total + course.units)
    });

    let (min_units, max_units) = if semester % 3 == 2 {
        (0.0, MIDYEAR_MAX_UNITS)
    } else {
        (REGULAR_MIN_UNITS, plan.max_units)
    };

    SemesterLoad {
        semester,
        req_units,
        total_units,
        min_units,
        max_units,
        valid: req_units <= max_units && total_units >= min_units,
    }
}

/// Loads of every semester on the plan's axis.
pub fn semester_loads(plan: &Plan) -> Vec<SemesterLoad> {
    (0..plan.sems).map(|s| semester_load(plan, s)).collect()
}

/// Plan-wide unit totals against the curriculum requirement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CurriculumUnits {
    pub req_units: f64,
    pub total_units: f64,
    pub required_units: f64,
}

impl CurriculumUnits {
    pub fn is_met(&self) -> bool {
        self.req_units >= self.required_units
    }
}

pub fn curriculum_units(plan: &Plan) -> CurriculumUnits {
    CurriculumUnits {
        req_units: plan.courses.iter().map(Course::counted_units).sum(),
        total_units: plan.courses.iter().map(|c| c.units).sum(),
        required_units: plan.total_units,
    }
}

/// Courses placed in a semester they are not offered in.
pub fn unoffered_courses(plan: &Plan) -> Vec<&Course> {
    plan.courses.iter().filter(|c| !c.is_offered()).collect()
}
