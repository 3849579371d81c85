//! Full-plan report, including the courses used for open categories.

use std::fmt;

use crate::{
    engine::curriculum_units,
    models::{Plan, SpecialCategory},
};

/// Markdown report of a plan: every semester with its courses, then the
/// special-category fills and the unit summary.
pub struct PlanReport<'a>(pub &'a Plan);

impl fmt::Display for PlanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        writeln!(f, "# Plan Report: {}", plan.code)?;

        for semester in 0..plan.sems {
            let courses = plan.courses_in_semester(semester);
            let units: f64 = courses.iter().map(|c| c.counted_units()).sum();
            writeln!(f)?;
            writeln!(f, "## {} ({units} units)", plan.semester_label(semester))?;
            writeln!(f)?;
            if courses.is_empty() {
                writeln!(f, "_None._")?;
            }
            for course in courses {
                writeln!(
                    f,
                    "- {}: {} ({} units, {})",
                    course.code,
                    course.title,
                    course.units,
                    course.overall_status().with_icon()
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "## Special Courses")?;
        for category in SpecialCategory::ALL {
            writeln!(f)?;
            writeln!(f, "### {}", category.as_str())?;
            writeln!(f)?;
            // Ids of courses deleted since they filled the slot are skipped.
            let filled: Vec<_> = plan
                .special
                .get(category)
                .iter()
                .filter_map(|id| plan.course(*id))
                .collect();
            if filled.is_empty() {
                writeln!(f, "_None._")?;
            }
            for course in filled {
                writeln!(f, "- {}: {} ({} units)", course.code, course.title, course.units)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "## Summary")?;
        writeln!(f)?;
        writeln!(f, "{}", curriculum_units(plan))
    }
}
