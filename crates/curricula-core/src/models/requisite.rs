//! Requisite model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{RequisiteKind, RequisiteStatus};
use crate::catalog::CatalogRequisite;

/// Requisite id given to the single user-defined group of a custom course.
pub const CUSTOM_REQUISITE_ID: u64 = 999_999;

/// Class standing reached once enough units are earned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Standing {
    /// A quarter of the curriculum's units
    Sophomore,
    /// Half of the curriculum's units
    Junior,
    /// Three quarters of the curriculum's units
    Senior,
}

impl Standing {
    /// Maps the catalog's reserved course ids onto standings.
    pub fn from_catalog_id(id: u64) -> Option<Self> {
        match id {
            100_005 => Some(Standing::Sophomore),
            100_004 => Some(Standing::Junior),
            100_003 => Some(Standing::Senior),
            _ => None,
        }
    }

    /// Fraction of the curriculum's total units required.
    pub fn threshold_fraction(&self) -> f64 {
        match self {
            Standing::Sophomore => 0.25,
            Standing::Junior => 0.5,
            Standing::Senior => 0.75,
        }
    }
}

/// What a single referent of a requisite group points at.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequisiteTarget {
    /// A course placed in the plan, matched by its catalog link
    Course { catalog_id: u64 },
    /// Cumulative units earned before the requiring course's semester
    Standing { standing: Standing },
}

/// One member of a requisite group: a display code paired with its target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Referent {
    /// Code shown to the student (e.g. "CMSC 21" or "JUNIOR STANDING")
    pub code: String,
    pub target: RequisiteTarget,
}

impl Referent {
    /// Referent pointing at a catalog course.
    pub fn course(code: impl Into<String>, catalog_id: u64) -> Self {
        Self {
            code: code.into(),
            target: RequisiteTarget::Course { catalog_id },
        }
    }

    /// Referent satisfied by class standing.
    pub fn standing(code: impl Into<String>, standing: Standing) -> Self {
        Self {
            code: code.into(),
            target: RequisiteTarget::Standing { standing },
        }
    }

    /// Builds a referent from a catalog (code, id) pair, recognising the
    /// reserved standing ids.
    pub fn from_catalog(code: &str, id: u64) -> Self {
        match Standing::from_catalog_id(id) {
            Some(standing) => Self::standing(code, standing),
            None => Self::course(code, id),
        }
    }
}

/// A prerequisite or corequisite group owned by a course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Requisite {
    /// Identifier of the group (catalog `req_id`)
    pub id: u64,

    /// Ordering constraint applied to every referent
    pub kind: RequisiteKind,

    /// Referents of the group, in catalog order
    pub referents: Vec<Referent>,

    /// Derived by the resolver; `Missing` until first resolved
    #[serde(default)]
    pub status: RequisiteStatus,
}

impl Requisite {
    /// Creates an unresolved requisite group.
    pub fn new(id: u64, kind: RequisiteKind, referents: Vec<Referent>) -> Self {
        Self {
            id,
            kind,
            referents,
            status: RequisiteStatus::Missing,
        }
    }

    /// Builds a requisite from a catalog record. Code and id lists are
    /// paired positionally; a trailing unpaired entry is dropped.
    pub fn from_catalog(record: &CatalogRequisite) -> Self {
        let referents = record
            .courses
            .iter()
            .zip(&record.course_ids)
            .map(|(code, id)| Referent::from_catalog(code, *id))
            .collect();
        Self::new(record.req_id, record.kind, referents)
    }

    /// Display codes of the referents.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.referents.iter().map(|r| r.code.as_str())
    }
}
