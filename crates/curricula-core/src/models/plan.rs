//! Plan model definition and related functionality.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Course, CourseId};

/// Open-ended curriculum categories whose fills are tracked for reporting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum SpecialCategory {
    Major,
    Elective,
    Specialized,
    Track,
    Cognate,
}

impl SpecialCategory {
    pub const ALL: [SpecialCategory; 5] = [
        SpecialCategory::Major,
        SpecialCategory::Elective,
        SpecialCategory::Specialized,
        SpecialCategory::Track,
        SpecialCategory::Cognate,
    ];

    /// Placeholder code of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialCategory::Major => "MAJOR",
            SpecialCategory::Elective => "ELECTIVE",
            SpecialCategory::Specialized => "SPECIALIZED",
            SpecialCategory::Track => "TRACK",
            SpecialCategory::Cognate => "COGNATE",
        }
    }
}

impl FromStr for SpecialCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpecialCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Not a special category: {s}"))
    }
}

/// Courses used to fill open-category slots, by category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub struct SpecialBuckets {
    #[serde(default)]
    pub major: Vec<CourseId>,
    #[serde(default)]
    pub elective: Vec<CourseId>,
    #[serde(default)]
    pub specialized: Vec<CourseId>,
    #[serde(default)]
    pub track: Vec<CourseId>,
    #[serde(default)]
    pub cognate: Vec<CourseId>,
}

impl SpecialBuckets {
    pub fn get(&self, category: SpecialCategory) -> &[CourseId] {
        match category {
            SpecialCategory::Major => &self.major,
            SpecialCategory::Elective => &self.elective,
            SpecialCategory::Specialized => &self.specialized,
            SpecialCategory::Track => &self.track,
            SpecialCategory::Cognate => &self.cognate,
        }
    }

    pub fn get_mut(&mut self, category: SpecialCategory) -> &mut Vec<CourseId> {
        match category {
            SpecialCategory::Major => &mut self.major,
            SpecialCategory::Elective => &mut self.elective,
            SpecialCategory::Specialized => &mut self.specialized,
            SpecialCategory::Track => &mut self.track,
            SpecialCategory::Cognate => &mut self.cognate,
        }
    }
}

/// A student's multi-semester course arrangement for one curriculum.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Code of the curriculum the plan was instantiated from
    pub code: String,

    /// Number of semesters on the plan's axis
    pub sems: u32,

    /// Calendar year the first semester starts in
    pub year: i32,

    /// Maximum units in a regular semester
    pub max_units: f64,

    /// Units the curriculum requires overall
    pub total_units: f64,

    /// All placed courses and placeholders
    #[serde(default)]
    pub courses: Vec<Course>,

    #[serde(default)]
    pub special: SpecialBuckets,

    /// Next value handed out by [`Plan::allocate_id`]
    #[serde(default)]
    pub next_course_id: u64,

    /// Number of custom courses created so far
    #[serde(default)]
    pub custom_courses: u64,
}

/// Offset of synthetic catalog ids given to custom courses.
pub const CUSTOM_CATALOG_BASE: u64 = 20_000;

impl Plan {
    /// Creates an empty plan.
    pub fn new(code: impl Into<String>, sems: u32, year: i32, max_units: f64, total_units: f64) -> Self {
        Self {
            code: code.into(),
            sems,
            year,
            max_units,
            total_units,
            courses: Vec::new(),
            special: SpecialBuckets::default(),
            next_course_id: 1,
            custom_courses: 0,
        }
    }

    /// Hands out a fresh course identifier.
    pub fn allocate_id(&mut self) -> CourseId {
        let used = self.courses.iter().map(|c| c.id.0 + 1).max().unwrap_or(1);
        let id = self.next_course_id.max(used);
        self.next_course_id = id + 1;
        CourseId(id)
    }

    /// Hands out a synthetic catalog id for a custom course.
    pub fn allocate_custom_catalog_id(&mut self) -> u64 {
        self.custom_courses += 1;
        CUSTOM_CATALOG_BASE + self.custom_courses
    }

    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn course_mut(&mut self, id: CourseId) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.id == id)
    }

    /// Courses of one semester ordered by position.
    pub fn courses_in_semester(&self, semester: u32) -> Vec<&Course> {
        let mut courses: Vec<&Course> = self
            .courses
            .iter()
            .filter(|c| c.semester == semester)
            .collect();
        courses.sort_by_key(|c| c.position);
        courses
    }

    /// Human readable label of a semester, e.g. "1st Sem AY 2024-2025".
    pub fn semester_label(&self, semester: u32) -> String {
        semester_label(self.year, semester)
    }
}

/// Labels a semester index relative to a starting year.
///
/// ```rust
/// use curricula_core::models::semester_label;
///
/// assert_eq!(semester_label(2024, 0), "1st Sem AY 2024-2025");
/// assert_eq!(semester_label(2024, 4), "2nd Sem AY 2025-2026");
/// assert_eq!(semester_label(2024, 2), "Midyear 2025");
/// ```
pub fn semester_label(start_year: i32, semester: u32) -> String {
    let year = start_year + (semester / 3) as i32;
    match semester % 3 {
        0 => format!("1st Sem AY {}-{}", year, year + 1),
        1 => format!("2nd Sem AY {}-{}", year, year + 1),
        _ => format!("Midyear {}", year + 1),
    }
}
