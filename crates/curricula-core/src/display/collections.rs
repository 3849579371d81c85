//! Collection wrapper types for displaying groups of catalog records and
//! semester loads.

use std::fmt;

use crate::{
    catalog::{CatalogCourse, CurriculumTemplate, DegreeProgram},
    engine::SemesterLoad,
    models::semester_label,
};

/// Search hits from the course catalog.
pub struct CatalogCourses<'a>(pub Vec<&'a CatalogCourse>);

impl CatalogCourses<'_> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for CatalogCourses<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No matching courses.");
        }
        for course in &self.0 {
            write!(f, "{course}")?;
        }
        Ok(())
    }
}

/// The degree programs of the catalog.
pub struct Programs<'a>(pub &'a [DegreeProgram]);

impl fmt::Display for Programs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No degree programs in the catalog.");
        }
        writeln!(f, "# Degree Programs")?;
        writeln!(f)?;
        for program in self.0 {
            write!(f, "{program}")?;
        }
        Ok(())
    }
}

/// The curricula of one degree program.
pub struct Curricula<'a>(pub Vec<&'a CurriculumTemplate>);

impl fmt::Display for Curricula<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No curricula for this program.");
        }
        for curriculum in &self.0 {
            write!(f, "{curriculum}")?;
        }
        Ok(())
    }
}

/// Per-semester loads of a plan, labeled from its start year.
pub struct SemesterLoads {
    pub start_year: i32,
    pub loads: Vec<SemesterLoad>,
}

impl fmt::Display for SemesterLoads {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "| Semester | Units | Total | Range | Status |")?;
        writeln!(f, "|---|---|---|---|---|")?;
        for load in &self.loads {
            let status = match load.issue() {
                Some(issue) => format!("✗ {issue}"),
                None => "✓ ok".to_string(),
            };
            writeln!(
                f,
                "| {} | {} | {} | {}-{} | {status} |",
                semester_label(self.start_year, load.semester),
                load.req_units,
                load.total_units,
                load.min_units,
                load.max_units
            )?;
        }
        Ok(())
    }
}
