//! Requisite status resolution.
//!
//! [`resolve_requisites`] recomputes the status of every requisite of every
//! course from the current plan. It is pure with respect to everything but
//! the `status` fields, total over all plans, and idempotent. There is no
//! incremental mode: the whole plan is recomputed after each edit.

use crate::models::{Course, Plan, Requisite, RequisiteKind, RequisiteStatus, RequisiteTarget};

/// Rewrites the status of every requisite in the plan.
pub fn resolve_requisites(plan: &mut Plan) {
    let statuses: Vec<Vec<RequisiteStatus>> = plan
        .courses
        .iter()
        .map(|course| {
            course
                .requisites
                .iter()
                .map(|requisite| evaluate(plan, course, requisite))
                .collect()
        })
        .collect();

    for (course, statuses) in plan.courses.iter_mut().zip(statuses) {
        for (requisite, status) in course.requisites.iter_mut().zip(statuses) {
            requisite.status = status;
        }
    }
}

/// Status of one requisite group of `course` against the plan.
pub fn evaluate(plan: &Plan, course: &Course, requisite: &Requisite) -> RequisiteStatus {
    let mut found = 0;
    let mut has_invalid = false;

    for referent in &requisite.referents {
        match referent.target {
            RequisiteTarget::Standing { standing } => {
                let threshold = standing.threshold_fraction() * plan.total_units;
                if units_before(plan, course) >= threshold {
                    found += 1;
                }
            }
            RequisiteTarget::Course { catalog_id } => {
                let Some(target) = plan.courses.iter().find(|c| c.catalog_id == Some(catalog_id))
                else {
                    continue;
                };
                found += 1;
                if !placement_satisfies(requisite.kind, target.semester, course.semester) {
                    has_invalid = true;
                }
            }
        }
    }

    classify(found, requisite.referents.len(), has_invalid)
}

/// Whether a referent in `referent_semester` satisfies a requisite of the
/// given kind for a course in `course_semester`.
pub fn placement_satisfies(kind: RequisiteKind, referent_semester: u32, course_semester: u32) -> bool {
    match kind {
        RequisiteKind::Pre => referent_semester < course_semester,
        RequisiteKind::Co => referent_semester == course_semester,
        RequisiteKind::Unspecified => true,
    }
}

/// Status rule, in precedence order: nothing found is `Missing`, any
/// misplaced referent is `Invalid`, some found is `Partial`, all found is
/// `Complete`.
pub fn classify(found: usize, total: usize, has_invalid: bool) -> RequisiteStatus {
    if found == 0 {
        RequisiteStatus::Missing
    } else if has_invalid {
        RequisiteStatus::Invalid
    } else if found < total {
        RequisiteStatus::Partial
    } else {
        RequisiteStatus::Complete
    }
}

/// Counted units of every other course placed strictly before `course`'s
/// semester.
pub fn units_before(plan: &Plan, course: &Course) -> f64 {
    plan.courses
        .iter()
        .filter(|c| c.id != course.id && c.semester < course.semester)
        .map(Course::counted_units)
        .sum()
}
