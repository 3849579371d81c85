//! Plan instantiation: expands a curriculum template against the catalog
//! into an initial semester-by-semester course grid.

use log::debug;

use crate::{
    catalog::{placeholder_code, Catalog, CurriculumTemplate, DegreeProgram},
    models::{Course, Plan},
};

/// Zero-based chronological index of a curriculum-relative (year, sem)
/// pair, or `None` when either half is 0.
pub fn semester_index(year: u32, sem: u32) -> Option<u32> {
    if year == 0 || sem == 0 {
        return None;
    }
    Some(3 * (year - 1) + sem - 1)
}

/// Number of semesters a template spans.
///
/// With a structure table this is one past the latest structure entry.
/// Without one it is derived from the latest pinned year, three semesters a
/// year minus the trailing midyear.
pub fn semester_count(template: &CurriculumTemplate) -> u32 {
    if template.curriculum_structure.is_empty() {
        let last_year = template
            .curriculum_courses
            .iter()
            .map(|c| c.year)
            .max()
            .unwrap_or(0);
        return (last_year * 3).saturating_sub(1);
    }

    template
        .curriculum_structure
        .iter()
        .filter_map(|entry| semester_index(entry.year, entry.sem))
        .max()
        .map_or(0, |last| last + 1)
}

/// Builds a fresh plan from a template.
///
/// Placeholders are materialized for every open slot in the structure
/// table, then pinned courses fill matching placeholders in place or are
/// appended to their semester. Pins naming an unknown catalog course or a
/// semester outside the plan are skipped. Requisites start out `Missing`;
/// callers resolve them before reading any status.
pub fn instantiate(
    program: &DegreeProgram,
    template: &CurriculumTemplate,
    catalog: &Catalog,
    start_year: i32,
) -> Plan {
    let sems = semester_count(template);
    let mut plan = Plan::new(
        template.code.clone(),
        sems,
        start_year,
        program.max_units,
        template.total_units,
    );

    for semester in 0..sems {
        let year = semester / 3 + 1;
        let sem = semester % 3 + 1;
        let Some(entry) = template
            .curriculum_structure
            .iter()
            .find(|e| e.year == year && e.sem == sem)
        else {
            continue;
        };

        let mut position = 0;
        for (label, count) in entry.slot_counts() {
            let code = placeholder_code(label);
            for _ in 0..count {
                let id = plan.allocate_id();
                plan.add_course(Course::placeholder(id, code.clone(), semester, position));
                position += 1;
            }
        }
    }

    for pin in &template.curriculum_courses {
        if pin.is_unused() {
            continue;
        }
        let Some(entry) = catalog.course(pin.id) else {
            debug!("Skipping pin of unknown catalog course {}", pin.id);
            continue;
        };
        let Some(semester) = semester_index(pin.year, pin.sem).filter(|s| *s < sems) else {
            debug!(
                "Skipping pin of {} at year {} sem {}: outside the plan",
                entry.code, pin.year, pin.sem
            );
            continue;
        };

        let slot = plan.courses.iter_mut().find(|c| {
            c.semester == semester && c.is_placeholder() && c.code == pin.kind
        });
        match slot {
            Some(placeholder) => placeholder.fill_from_catalog(entry),
            None => {
                let id = plan.allocate_id();
                let position = plan.next_free_position(semester);
                plan.add_course(Course::from_catalog(id, entry, semester, position));
            }
        }
    }

    debug!(
        "Instantiated plan {} with {} semesters and {} courses",
        plan.code,
        plan.sems,
        plan.courses.len()
    );
    plan
}
