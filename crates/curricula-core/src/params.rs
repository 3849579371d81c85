//! Parameter structures for planner operations.
//!
//! These are shared by every interface (CLI, MCP) and carry no framework
//! derives beyond serde. Interface layers wrap them: the CLI converts its clap
//! argument structs into these via `From`, and the MCP server deserializes
//! them through a transparent wrapper. JSON schema generation is available
//! behind the `schema` feature.
//!
//! ```ignore
//! // In the CLI
//! #[derive(Args)]
//! pub struct AddCourseArgs {
//!     pub catalog_id: u64,
//!     #[arg(short, long)]
//!     pub semester: u32,
//! }
//!
//! impl From<AddCourseArgs> for AddCourse {
//!     fn from(args: AddCourseArgs) -> Self {
//!         AddCourse {
//!             catalog_id: args.catalog_id,
//!             semester: args.semester,
//!         }
//!     }
//! }
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::RequisiteKind;

/// Parameters for operations requiring just a course id.
///
/// Used for show_course, delete_course.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The plan-local id of the course to operate on
    pub id: u64,
}

/// Parameters for instantiating a fresh plan from a curriculum.
///
/// Replaces the user's current plan, if any.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct InstantiatePlan {
    /// Degree program id
    pub program_id: u64,
    /// Code of one of the program's curricula
    pub curriculum_code: String,
    /// Calendar year the first semester starts in
    pub start_year: i32,
}

/// Parameters for adding a catalog course to the plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddCourse {
    /// Catalog id of the course to add
    pub catalog_id: u64,
    /// Zero-based semester index to place it in
    pub semester: u32,
}

/// Parameters for adding an open-category placeholder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddPlaceholder {
    /// Category code, e.g. "MAJOR" or "GE ELECTIVE"
    pub code: String,
    pub semester: u32,
}

/// Parameters for creating a freeform course that is not in the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateCustomCourse {
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub units: f64,
    pub semester: u32,
    /// Kind of the optional custom requisite group
    #[serde(default)]
    pub requisite_kind: Option<RequisiteKind>,
    /// Catalog ids of plan courses the custom requisite refers to
    #[serde(default)]
    pub requisites: Vec<u64>,
}

/// Parameters for editing a placed course. Omitted fields are unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct EditCourse {
    pub id: u64,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub units: Option<f64>,
    /// Moving to another semester re-slots the course at the first free
    /// position there
    #[serde(default)]
    pub semester: Option<u32>,
    /// Kind of the custom requisite group
    #[serde(default)]
    pub requisite_kind: Option<RequisiteKind>,
    /// Catalog ids of plan courses for the custom requisite group; an empty
    /// list removes the group
    #[serde(default)]
    pub requisites: Option<Vec<u64>>,
}

impl EditCourse {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.code.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.units.is_none()
            && self.semester.is_none()
            && self.requisite_kind.is_none()
            && self.requisites.is_none()
    }
}

/// Parameters for moving a course to a (semester, position) slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct MoveCourse {
    pub id: u64,
    pub semester: u32,
    /// Target position; the first free position when omitted
    #[serde(default)]
    pub position: Option<u32>,
}

/// Parameters for swapping a placeholder for a catalog course.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ReplacePlaceholder {
    /// Plan-local id of the placeholder
    pub id: u64,
    /// Catalog id of the course taking its slot
    pub catalog_id: u64,
}

/// Parameters for operations on a single semester.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Semester {
    /// Zero-based semester index
    pub semester: u32,
}

/// Parameters for searching the course catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SearchCatalog {
    /// Case-insensitive text matched against course codes and titles
    pub query: String,
}

/// Parameters for listing the curricula of a degree program.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListCurricula {
    pub program_id: u64,
}

/// Parameters for updating presentation settings. Omitted flags are
/// unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateSettings {
    #[serde(default)]
    pub show_arrows: Option<bool>,
    #[serde(default)]
    pub animate: Option<bool>,
    #[serde(default)]
    pub show_select: Option<bool>,
    #[serde(default)]
    pub ignore_units: Option<bool>,
    #[serde(default)]
    pub ignore_reqs: Option<bool>,
    #[serde(default)]
    pub ignore_offer: Option<bool>,
}
