//! Display implementations for domain models.
//!
//! Markdown output for the plan-owned models and catalog records, kept apart
//! from the model definitions.

use std::fmt;

use super::board::PlanBoard;
use crate::{
    catalog::{CatalogCourse, CurriculumTemplate, DegreeProgram},
    engine::{CurriculumUnits, LoadIssue, SemesterLoad},
    models::{Course, Plan, Requisite, RequisiteKind, RequisiteStatus, Settings},
};

impl fmt::Display for RequisiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for RequisiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Requisite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = self.codes().collect();
        write!(f, "{} {} ({})", self.kind, codes.join(", "), self.status.with_icon())
    }
}

/// Semester-in-year names of an offering list.
pub(crate) fn offering_names(offered: &[u32]) -> String {
    let names: Vec<&str> = offered
        .iter()
        .map(|sem| match sem % 3 {
            0 => "1st",
            1 => "2nd",
            _ => "Midyear",
        })
        .collect();
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_placeholder() {
            writeln!(f, "### {}. {} (placeholder)", self.id, self.code)?;
        } else {
            writeln!(f, "### {}. {}: {}", self.id, self.code, self.title)?;
        }
        writeln!(f)?;

        writeln!(f, "- Units: {}", self.units)?;
        writeln!(f, "- Slot: semester {}, position {}", self.semester, self.position)?;
        if let Some(catalog_id) = self.catalog_id {
            writeln!(f, "- Catalog ID: {catalog_id}")?;
        }
        if let Some(offered) = &self.offered {
            let marker = if self.is_offered() { "" } else { " (not this semester)" };
            writeln!(f, "- Offered: {}{marker}", offering_names(offered))?;
        }
        writeln!(f, "- Requisites: {}", self.overall_status().with_icon())?;

        if !self.description.is_empty() && self.description != "-" {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        if !self.requisites.is_empty() {
            writeln!(f)?;
            writeln!(f, "#### Requisites")?;
            writeln!(f)?;
            for requisite in &self.requisites {
                writeln!(f, "- {requisite}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let settings = Settings::default();
        write!(f, "{}", PlanBoard::new(self, &settings))
    }
}

impl fmt::Display for LoadIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadIssue::Overloaded => write!(f, "overloaded"),
            LoadIssue::Underloaded => write!(f, "underloaded"),
        }
    }
}

impl fmt::Display for SemesterLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Units: {} of {} (minimum {})",
            self.req_units, self.max_units, self.min_units
        )?;
        if self.uncounted_units() > 0.0 {
            write!(f, ", plus {} uncounted", self.uncounted_units())?;
        }
        Ok(())
    }
}

impl fmt::Display for CurriculumUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.is_met() { "✓" } else { "○" };
        write!(
            f,
            "{mark} Curriculum units: {} of {} required ({} total)",
            self.req_units, self.required_units, self.total_units
        )
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Settings")?;
        writeln!(f)?;
        let flags = [
            ("show_arrows", self.show_arrows),
            ("animate", self.animate),
            ("show_select", self.show_select),
            ("ignore_units", self.ignore_units),
            ("ignore_reqs", self.ignore_reqs),
            ("ignore_offer", self.ignore_offer),
        ];
        for (name, value) in flags {
            writeln!(f, "- {name}: {value}")?;
        }
        Ok(())
    }
}

impl fmt::Display for CatalogCourse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}: {} (ID: {})", self.code, self.title, self.id)?;
        writeln!(f)?;
        if let Some(units) = self.units {
            writeln!(f, "- **Units**: {units}")?;
        }
        writeln!(f, "- **Offered**: {}", offering_names(&self.sem_offered))?;
        for requisite in &self.requisites {
            writeln!(f, "- **{}**: {}", requisite.kind, requisite.courses.join(", "))?;
        }
        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for DegreeProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} (ID: {}, max {} units per semester)",
            self.title, self.id, self.max_units
        )
    }
}

impl fmt::Display for CurriculumTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}**", self.code)?;
        if !self.name.is_empty() {
            write!(f, ": {}", self.name)?;
        }
        writeln!(f, " ({} units)", self.total_units)
    }
}
