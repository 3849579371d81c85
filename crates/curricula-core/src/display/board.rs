//! Semester-by-semester board view of a plan.

use std::fmt;

use jiff::Timestamp;

use super::datetime::SavedAt;
use crate::{
    engine::{curriculum_units, semester_load},
    models::{Course, Plan, RequisiteStatus, Settings},
};

/// Renders a plan as one markdown table per semester, followed by the
/// semester's unit load and any warnings the settings do not suppress.
///
/// # Examples
///
/// ```rust
/// use curricula_core::{
///     display::PlanBoard,
///     models::{Course, Plan, Settings},
/// };
///
/// let mut plan = Plan::new("BSCS", 3, 2024, 18.0, 120.0);
/// let id = plan.allocate_id();
/// plan.add_course(Course::placeholder(id, "MAJOR", 0, 0));
///
/// let settings = Settings::default();
/// let output = PlanBoard::new(&plan, &settings).to_string();
/// assert!(output.contains("## 1st Sem AY 2024-2025"));
/// assert!(output.contains("underloaded"));
/// ```
pub struct PlanBoard<'a> {
    pub plan: &'a Plan,
    pub settings: &'a Settings,
    pub saved_at: Option<&'a Timestamp>,
}

impl<'a> PlanBoard<'a> {
    pub fn new(plan: &'a Plan, settings: &'a Settings) -> Self {
        Self {
            plan,
            settings,
            saved_at: None,
        }
    }

    /// Includes the last-saved time in the header.
    pub fn with_saved_at(mut self, saved_at: Option<&'a Timestamp>) -> Self {
        self.saved_at = saved_at;
        self
    }

    fn warnings(&self, courses: &[&Course], semester: u32) -> Vec<String> {
        let mut warnings = Vec::new();

        if !self.settings.ignore_units {
            let load = semester_load(self.plan, semester);
            if let Some(issue) = load.issue() {
                warnings.push(format!("Semester is {issue}"));
            }
        }

        for course in courses {
            if !self.settings.ignore_reqs {
                let status = course.overall_status();
                if status != RequisiteStatus::Complete {
                    warnings.push(format!("{}: requisites {}", course.code, status.with_icon()));
                }
            }
            if !self.settings.ignore_offer && !course.is_offered() {
                warnings.push(format!("{} is not offered in this semester", course.code));
            }
        }

        warnings
    }
}

impl fmt::Display for PlanBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.plan;
        writeln!(f, "# {} (from {})", plan.code, plan.year)?;
        writeln!(f)?;
        writeln!(f, "- Semesters: {}", plan.sems)?;
        writeln!(f, "- Max units per semester: {}", plan.max_units)?;
        if self.saved_at.is_some() {
            writeln!(f, "- Last saved: {}", SavedAt(self.saved_at))?;
        }

        for semester in 0..plan.sems {
            let courses = plan.courses_in_semester(semester);
            writeln!(f)?;
            writeln!(f, "## {}", plan.semester_label(semester))?;
            writeln!(f)?;

            if courses.is_empty() {
                writeln!(f, "_No courses._")?;
            } else {
                writeln!(f, "| Pos | ID | Code | Title | Units | Requisites |")?;
                writeln!(f, "|---|---|---|---|---|---|")?;
                for course in &courses {
                    writeln!(
                        f,
                        "| {} | {} | {} | {} | {} | {} |",
                        course.position,
                        course.id,
                        course.code,
                        course.title,
                        course.units,
                        course.overall_status().with_icon()
                    )?;
                }
            }

            writeln!(f)?;
            writeln!(f, "{}", semester_load(plan, semester))?;

            let warnings = self.warnings(&courses, semester);
            if !warnings.is_empty() {
                writeln!(f)?;
                for warning in warnings {
                    writeln!(f, "- ⚠ {warning}")?;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)?;
        writeln!(f, "{}", curriculum_units(plan))
    }
}
