//! Catalog & template store.
//!
//! Static, read-only input data consumed by the engine: course catalog
//! entries, curriculum templates and degree programs. A [`Catalog`] is
//! loaded once from a directory holding `courses.json`, `curricula.json` and
//! `programs.json` and is never mutated afterwards.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;

use crate::{
    error::{PlanError, Result},
    models::Standing,
};

pub mod records;

pub use records::{
    placeholder_code, CatalogCourse, CatalogRequisite, CurriculumCourse, CurriculumTemplate,
    DegreeProgram, StructureEntry,
};

pub const COURSES_FILE: &str = "courses.json";
pub const CURRICULA_FILE: &str = "curricula.json";
pub const PROGRAMS_FILE: &str = "programs.json";

/// In-memory catalog of courses, curricula and programs.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<CatalogCourse>,
    curricula: Vec<CurriculumTemplate>,
    programs: Vec<DegreeProgram>,
}

impl Catalog {
    pub fn new(
        courses: Vec<CatalogCourse>,
        curricula: Vec<CurriculumTemplate>,
        programs: Vec<DegreeProgram>,
    ) -> Self {
        Self {
            courses,
            curricula,
            programs,
        }
    }

    /// Loads the three catalog files from `dir`.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::FileSystem` if a file cannot be read and
    /// `PlanError::Catalog` if it does not parse.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let catalog = Self {
            courses: read_records(&dir.join(COURSES_FILE))?,
            curricula: read_records(&dir.join(CURRICULA_FILE))?,
            programs: read_records(&dir.join(PROGRAMS_FILE))?,
        };
        log::debug!(
            "Loaded catalog from {}: {} courses, {} curricula, {} programs",
            dir.display(),
            catalog.courses.len(),
            catalog.curricula.len(),
            catalog.programs.len()
        );
        Ok(catalog)
    }

    pub fn courses(&self) -> &[CatalogCourse] {
        &self.courses
    }

    pub fn programs(&self) -> &[DegreeProgram] {
        &self.programs
    }

    pub fn curricula(&self) -> &[CurriculumTemplate] {
        &self.curricula
    }

    pub fn course(&self, id: u64) -> Option<&CatalogCourse> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn program(&self, id: u64) -> Option<&DegreeProgram> {
        self.programs.iter().find(|p| p.id == id)
    }

    pub fn curriculum(&self, code: &str) -> Option<&CurriculumTemplate> {
        self.curricula.iter().find(|c| c.code == code)
    }

    /// Curricula belonging to a degree program.
    pub fn curricula_for_program(&self, program_id: u64) -> Vec<&CurriculumTemplate> {
        self.curricula
            .iter()
            .filter(|c| c.program_id == Some(program_id))
            .collect()
    }

    /// Case-insensitive search over course codes and titles. Standing
    /// markers are not real courses and are never returned.
    pub fn search(&self, query: &str) -> Vec<&CatalogCourse> {
        let needle = query.to_lowercase();
        self.courses
            .iter()
            .filter(|c| Standing::from_catalog_id(c.id).is_none())
            .filter(|c| {
                c.code.to_lowercase().contains(&needle) || c.title.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

fn read_records<T: DeserializeOwned>(path: &PathBuf) -> Result<Vec<T>> {
    let raw = fs::read_to_string(path).map_err(|e| PlanError::FileSystem {
        path: path.clone(),
        source: e,
    })?;
    serde_json::from_str(&raw).map_err(|e| PlanError::Catalog {
        path: path.clone(),
        reason: e.to_string(),
    })
}
