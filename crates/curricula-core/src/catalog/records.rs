//! Read-only catalog record shapes, as stored in the catalog JSON files.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::RequisiteKind;

/// A requisite group as listed in the course catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogRequisite {
    pub req_id: u64,
    #[serde(rename = "type")]
    pub kind: RequisiteKind,
    /// Display codes, positionally paired with `course_ids`
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub course_ids: Vec<u64>,
}

/// A canonical course definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogCourse {
    pub id: u64,
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Unit count; some administrative entries carry none
    #[serde(default)]
    pub units: Option<f64>,
    /// Semester-in-year indices: 0 = 1st, 1 = 2nd, 2 = midyear
    #[serde(default)]
    pub sem_offered: Vec<u32>,
    #[serde(default)]
    pub requisites: Vec<CatalogRequisite>,
}

/// Required slot counts for one (year, semester) of a curriculum.
///
/// Category counts are free-form `<category>_count` fields; their file
/// order is preserved and decides placeholder order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StructureEntry {
    /// Curriculum year, 1-based
    pub year: u32,
    /// Semester within the year: 1, 2, or 3 for midyear
    pub sem: u32,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl StructureEntry {
    /// Category slot counts in file order, skipping aggregate `total`
    /// fields. Integral floats such as `2.0` count; anything else that is not
    /// a non-negative whole number is skipped.
    pub fn slot_counts(&self) -> impl Iterator<Item = (&str, u64)> {
        self.fields.iter().filter_map(|(key, value)| {
            let label = key.strip_suffix("_count")?;
            if key.contains("total") {
                return None;
            }
            let count = slot_count(value);
            if count.is_none() {
                debug!(
                    "Skipping {key} of year {} sem {}: {value} is not a slot count",
                    self.year, self.sem
                );
            }
            count.map(|count| (label, count))
        })
    }
}

fn slot_count(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        let count = value.as_f64()?;
        (count >= 0.0 && count.fract() == 0.0 && count <= u32::MAX as f64).then_some(count as u64)
    })
}

/// Upper-cases a category label into a placeholder code; the first
/// underscore becomes a space ("ge_elective" → "GE ELECTIVE").
pub fn placeholder_code(label: &str) -> String {
    label.to_uppercase().replacen('_', " ", 1)
}

/// Pins a concrete catalog course into a curriculum slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurriculumCourse {
    /// Catalog id of the pinned course
    pub id: u64,
    /// Curriculum year; 0 together with `sem == 0` marks an unused pin
    pub year: u32,
    pub sem: u32,
    /// Category or course type the pin fills, compared to placeholder codes
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub code: String,
}

impl CurriculumCourse {
    /// True for the (0, 0) sentinel.
    pub fn is_unused(&self) -> bool {
        self.year == 0 && self.sem == 0
    }
}

/// A curriculum: slot structure plus pinned courses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurriculumTemplate {
    pub code: String,
    #[serde(default)]
    pub name: String,
    /// Owning degree program
    #[serde(default)]
    pub program_id: Option<u64>,
    pub total_units: f64,
    #[serde(default)]
    pub curriculum_structure: Vec<StructureEntry>,
    #[serde(default)]
    pub curriculum_courses: Vec<CurriculumCourse>,
}

/// A degree program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DegreeProgram {
    pub id: u64,
    pub title: String,
    pub max_units: f64,
}
