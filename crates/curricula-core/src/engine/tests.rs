use serde_json::json;

use super::*;
use crate::{
    catalog::{Catalog, CatalogCourse, CatalogRequisite, CurriculumTemplate, DegreeProgram},
    models::{
        Course, CourseId, Plan, Referent, Requisite, RequisiteKind, RequisiteStatus, Standing,
    },
};

fn placed(plan: &mut Plan, catalog_id: u64, code: &str, units: f64, semester: u32) -> CourseId {
    let id = plan.allocate_id();
    let position = plan.next_free_position(semester);
    let mut course = Course::placeholder(id, code, semester, position);
    course.catalog_id = Some(catalog_id);
    course.units = units;
    plan.add_course(course)
}

fn with_requisite(plan: &mut Plan, id: CourseId, kind: RequisiteKind, referents: Vec<Referent>) {
    let course = plan.course_mut(id).expect("Course missing");
    let next = course.requisites.len() as u64 + 1;
    course.requisites.push(Requisite::new(next, kind, referents));
}

fn status_of(plan: &Plan, id: CourseId) -> Vec<RequisiteStatus> {
    plan.course(id)
        .expect("Course missing")
        .requisites
        .iter()
        .map(|r| r.status)
        .collect()
}

fn catalog_course(id: u64, code: &str, units: f64) -> CatalogCourse {
    CatalogCourse {
        id,
        code: code.to_string(),
        title: format!("{code} title"),
        description: String::new(),
        units: Some(units),
        sem_offered: vec![0, 1],
        requisites: vec![],
    }
}

#[test]
fn test_resolve_is_idempotent() {
    let mut plan = Plan::new("TEST", 6, 2024, 18.0, 120.0);
    let a = placed(&mut plan, 10, "CMSC 11", 3.0, 0);
    placed(&mut plan, 11, "CMSC 12", 3.0, 3);
    let b = placed(&mut plan, 12, "CMSC 21", 3.0, 1);
    with_requisite(&mut plan, b, RequisiteKind::Pre, vec![Referent::course("CMSC 11", 10)]);
    with_requisite(&mut plan, b, RequisiteKind::Co, vec![Referent::course("CMSC 12", 11)]);
    with_requisite(&mut plan, a, RequisiteKind::Pre, vec![Referent::course("MATH 1", 99)]);

    resolve_requisites(&mut plan);
    let once = plan.clone();
    resolve_requisites(&mut plan);
    assert_eq!(plan, once);
}

#[test]
fn test_resolve_empty_plan() {
    let mut plan = Plan::new("TEST", 0, 2024, 18.0, 120.0);
    resolve_requisites(&mut plan);
    assert!(plan.courses.is_empty());
}

#[test]
fn test_resolve_only_touches_statuses() {
    let mut plan = Plan::new("TEST", 3, 2024, 18.0, 120.0);
    let a = placed(&mut plan, 10, "CMSC 11", 3.0, 0);
    with_requisite(&mut plan, a, RequisiteKind::Pre, vec![Referent::course("X", 1)]);
    let before = plan.clone();

    resolve_requisites(&mut plan);
    let mut normalized = plan.clone();
    for course in &mut normalized.courses {
        for requisite in &mut course.requisites {
            requisite.status = RequisiteStatus::Missing;
        }
    }
    assert_eq!(normalized, before);
}

#[test]
fn test_partial_when_one_of_two_found() {
    let mut plan = Plan::new("TEST", 6, 2024, 18.0, 120.0);
    placed(&mut plan, 1, "MATH 27", 3.0, 0);
    let c = placed(&mut plan, 3, "MATH 28", 3.0, 3);
    with_requisite(
        &mut plan,
        c,
        RequisiteKind::Pre,
        vec![Referent::course("MATH 27", 1), Referent::course("MATH 17", 2)],
    );

    resolve_requisites(&mut plan);
    assert_eq!(status_of(&plan, c), vec![RequisiteStatus::Partial]);
}

#[test]
fn test_prerequisite_ordering_and_move() {
    let mut plan = Plan::new("TEST", 6, 2024, 18.0, 120.0);
    let a = placed(&mut plan, 1, "CMSC 11", 3.0, 2);
    let b = placed(&mut plan, 2, "CMSC 21", 3.0, 2);
    with_requisite(&mut plan, b, RequisiteKind::Pre, vec![Referent::course("CMSC 11", 1)]);

    resolve_requisites(&mut plan);
    assert_eq!(status_of(&plan, b), vec![RequisiteStatus::Invalid]);

    let position = plan.next_free_position(1);
    assert!(plan.move_course(a, 1, position));
    resolve_requisites(&mut plan);
    assert_eq!(status_of(&plan, b), vec![RequisiteStatus::Complete]);
}

#[test]
fn test_corequisite_requires_same_semester() {
    let mut plan = Plan::new("TEST", 6, 2024, 18.0, 120.0);
    let lab = placed(&mut plan, 1, "PHYS 71.1", 1.0, 1);
    let lecture = placed(&mut plan, 2, "PHYS 71", 4.0, 1);
    with_requisite(&mut plan, lecture, RequisiteKind::Co, vec![Referent::course("PHYS 71.1", 1)]);

    resolve_requisites(&mut plan);
    assert_eq!(status_of(&plan, lecture), vec![RequisiteStatus::Complete]);

    assert!(plan.move_course(lab, 0, 0));
    resolve_requisites(&mut plan);
    assert_eq!(status_of(&plan, lecture), vec![RequisiteStatus::Invalid]);
}

#[test]
fn test_invalid_outranks_partial() {
    let mut plan = Plan::new("TEST", 6, 2024, 18.0, 120.0);
    placed(&mut plan, 1, "CMSC 11", 3.0, 4);
    let c = placed(&mut plan, 3, "CMSC 123", 3.0, 3);
    with_requisite(
        &mut plan,
        c,
        RequisiteKind::Pre,
        vec![Referent::course("CMSC 11", 1), Referent::course("CMSC 12", 2)],
    );

    resolve_requisites(&mut plan);
    assert_eq!(status_of(&plan, c), vec![RequisiteStatus::Invalid]);
}

#[test]
fn test_unspecified_kind_only_needs_presence() {
    let mut plan = Plan::new("TEST", 6, 2024, 18.0, 120.0);
    placed(&mut plan, 1, "ENG 1", 3.0, 5);
    let c = placed(&mut plan, 2, "ENG 10", 3.0, 0);
    with_requisite(&mut plan, c, RequisiteKind::Unspecified, vec![Referent::course("ENG 1", 1)]);

    resolve_requisites(&mut plan);
    assert_eq!(status_of(&plan, c), vec![RequisiteStatus::Complete]);
}

#[test]
fn test_first_matching_referent_wins() {
    let mut plan = Plan::new("TEST", 6, 2024, 18.0, 120.0);
    placed(&mut plan, 1, "CMSC 11", 3.0, 3);
    placed(&mut plan, 1, "CMSC 11", 3.0, 0);
    let c = placed(&mut plan, 2, "CMSC 21", 3.0, 1);
    with_requisite(&mut plan, c, RequisiteKind::Pre, vec![Referent::course("CMSC 11", 1)]);

    resolve_requisites(&mut plan);
    assert_eq!(status_of(&plan, c), vec![RequisiteStatus::Invalid]);
}

#[test]
fn test_standing_counts_prior_units() {
    let mut plan = Plan::new("TEST", 6, 2024, 18.0, 60.0);
    for (catalog_id, semester) in [(1, 0), (2, 0), (3, 1), (4, 1)] {
        placed(&mut plan, catalog_id, "CMSC 1", 10.0, semester);
    }
    let c = placed(&mut plan, 9, "CMSC 190", 3.0, 3);
    with_requisite(
        &mut plan,
        c,
        RequisiteKind::Pre,
        vec![Referent::standing("JUNIOR STANDING", Standing::Junior)],
    );

    resolve_requisites(&mut plan);
    assert_eq!(units_before(&plan, plan.course(c).expect("Course missing")), 40.0);
    assert_eq!(status_of(&plan, c), vec![RequisiteStatus::Complete]);

    let junior = plan.courses.iter().filter(|x| x.semester == 1).map(|x| x.id);
    let ids: Vec<CourseId> = junior.collect();
    for id in ids {
        plan.delete_course(id);
    }
    resolve_requisites(&mut plan);
    assert_eq!(status_of(&plan, c), vec![RequisiteStatus::Missing]);
}

#[test]
fn test_standing_ignores_admin_codes_and_same_semester() {
    let mut plan = Plan::new("TEST", 6, 2024, 18.0, 40.0);
    placed(&mut plan, 1, "NSTP 1", 20.0, 0);
    placed(&mut plan, 2, "CMSC 11", 20.0, 3);
    let c = placed(&mut plan, 3, "CMSC 21", 3.0, 3);
    with_requisite(
        &mut plan,
        c,
        RequisiteKind::Pre,
        vec![Referent::standing("SOPHOMORE STANDING", Standing::Sophomore)],
    );

    resolve_requisites(&mut plan);
    assert_eq!(status_of(&plan, c), vec![RequisiteStatus::Missing]);
}

#[test]
fn test_unmet_standing_does_not_invalidate() {
    let mut plan = Plan::new("TEST", 6, 2024, 18.0, 120.0);
    placed(&mut plan, 1, "CMSC 11", 3.0, 0);
    let c = placed(&mut plan, 2, "CMSC 198", 3.0, 1);
    with_requisite(
        &mut plan,
        c,
        RequisiteKind::Pre,
        vec![
            Referent::course("CMSC 11", 1),
            Referent::standing("SENIOR STANDING", Standing::Senior),
        ],
    );

    resolve_requisites(&mut plan);
    assert_eq!(status_of(&plan, c), vec![RequisiteStatus::Partial]);
}

#[test]
fn test_overall_status_ranking() {
    let mut plan = Plan::new("TEST", 6, 2024, 18.0, 120.0);
    placed(&mut plan, 1, "CMSC 11", 3.0, 0);
    let c = placed(&mut plan, 2, "CMSC 21", 3.0, 1);
    with_requisite(&mut plan, c, RequisiteKind::Pre, vec![Referent::course("CMSC 11", 1)]);
    with_requisite(
        &mut plan,
        c,
        RequisiteKind::Pre,
        vec![Referent::course("CMSC 11", 1), Referent::course("MATH 1", 5)],
    );
    resolve_requisites(&mut plan);
    let course = plan.course(c).expect("Course missing");
    assert_eq!(course.overall_status(), RequisiteStatus::Partial);

    with_requisite(&mut plan, c, RequisiteKind::Co, vec![Referent::course("MATH 2", 6)]);
    resolve_requisites(&mut plan);
    let course = plan.course(c).expect("Course missing");
    assert_eq!(course.overall_status(), RequisiteStatus::Missing);
}

#[test]
fn test_overall_status_first_of_equal_rank_wins() {
    let mut plan = Plan::new("TEST", 6, 2024, 18.0, 120.0);
    placed(&mut plan, 1, "CMSC 11", 3.0, 2);
    let c = placed(&mut plan, 2, "CMSC 21", 3.0, 1);
    with_requisite(&mut plan, c, RequisiteKind::Pre, vec![Referent::course("CMSC 11", 1)]);
    with_requisite(
        &mut plan,
        c,
        RequisiteKind::Unspecified,
        vec![Referent::course("CMSC 11", 1), Referent::course("MATH 1", 5)],
    );

    resolve_requisites(&mut plan);
    assert_eq!(
        status_of(&plan, c),
        vec![RequisiteStatus::Invalid, RequisiteStatus::Partial]
    );
    let course = plan.course(c).expect("Course missing");
    assert_eq!(course.overall_status(), RequisiteStatus::Invalid);
}

fn bscs_template() -> (DegreeProgram, CurriculumTemplate, Catalog) {
    let program = DegreeProgram {
        id: 1,
        title: "BS Computer Science".to_string(),
        max_units: 18.0,
    };
    let template: CurriculumTemplate = serde_json::from_value(json!({
        "code": "BSCS",
        "program_id": 1,
        "total_units": 120,
        "curriculum_structure": [
            {"year": 1, "sem": 1, "major_count": 2, "ge_elective_count": 1, "total_count": 3},
            {"year": 1, "sem": 2, "major_count": 1},
            {"year": 2, "sem": 1, "elective_count": 0}
        ],
        "curriculum_courses": [
            {"id": 10, "year": 1, "sem": 1, "type": "MAJOR", "code": "CMSC 11"},
            {"id": 11, "year": 1, "sem": 2, "type": "REQUIRED", "code": "MATH 27"},
            {"id": 12, "year": 0, "sem": 0, "type": "MAJOR", "code": "CMSC 12"},
            {"id": 404, "year": 1, "sem": 1, "type": "MAJOR", "code": "GONE"},
            {"id": 13, "year": 5, "sem": 1, "type": "MAJOR", "code": "CMSC 200"}
        ]
    }))
    .expect("Template should parse");

    let mut intro = catalog_course(10, "CMSC 11", 3.0);
    intro.requisites.push(CatalogRequisite {
        req_id: 7,
        kind: RequisiteKind::Pre,
        courses: vec!["JUNIOR STANDING".to_string()],
        course_ids: vec![100_004],
    });
    let catalog = Catalog::new(
        vec![
            intro,
            catalog_course(11, "MATH 27", 3.0),
            catalog_course(12, "CMSC 12", 3.0),
            catalog_course(13, "CMSC 200", 3.0),
        ],
        vec![template.clone()],
        vec![program.clone()],
    );
    (program, template, catalog)
}

#[test]
fn test_instantiate_materializes_placeholders_and_pins() {
    let (program, template, catalog) = bscs_template();
    let plan = instantiate(&program, &template, &catalog, 2024);

    assert_eq!(plan.sems, 4);
    assert_eq!(plan.max_units, 18.0);
    assert_eq!(plan.total_units, 120.0);
    assert_eq!(plan.year, 2024);

    let first: Vec<(&str, u32)> = plan
        .courses_in_semester(0)
        .iter()
        .map(|c| (c.code.as_str(), c.position))
        .collect();
    assert_eq!(first, vec![("CMSC 11", 0), ("MAJOR", 1), ("GE ELECTIVE", 2)]);

    let filled = plan.courses_in_semester(0)[0];
    assert_eq!(filled.catalog_id, Some(10));
    assert_eq!(filled.requisites.len(), 1);
    assert_eq!(
        filled.requisites[0].referents[0],
        Referent::standing("JUNIOR STANDING", Standing::Junior)
    );

    let second: Vec<(&str, u32)> = plan
        .courses_in_semester(1)
        .iter()
        .map(|c| (c.code.as_str(), c.position))
        .collect();
    assert_eq!(second, vec![("MAJOR", 0), ("MATH 27", 1)]);

    assert!(plan.courses_in_semester(2).is_empty());
    assert!(plan.courses_in_semester(3).is_empty());
    assert!(plan.courses.iter().all(|c| c.catalog_id != Some(12)));
    assert!(plan.courses.iter().all(|c| c.catalog_id != Some(13)));
}

#[test]
fn test_instantiate_placeholder_fields() {
    let (program, template, catalog) = bscs_template();
    let plan = instantiate(&program, &template, &catalog, 2024);
    let placeholder = plan
        .courses
        .iter()
        .find(|c| c.code == "GE ELECTIVE")
        .expect("Placeholder missing");
    assert!(placeholder.is_placeholder());
    assert_eq!(placeholder.title, "-");
    assert_eq!(placeholder.description, "-");
    assert_eq!(placeholder.units, 0.0);
    assert!(placeholder.requisites.is_empty());
}

#[test]
fn test_instantiate_two_major_slots() {
    let program = DegreeProgram {
        id: 1,
        title: "BS Computer Science".to_string(),
        max_units: 18.0,
    };
    let template: CurriculumTemplate = serde_json::from_value(json!({
        "code": "BSCS",
        "total_units": 120,
        "curriculum_structure": [{"year": 1, "sem": 1, "major_count": 2}],
        "curriculum_courses": []
    }))
    .expect("Template should parse");

    let plan = instantiate(&program, &template, &Catalog::default(), 2024);
    let codes: Vec<(&str, u32, u32)> = plan
        .courses
        .iter()
        .map(|c| (c.code.as_str(), c.semester, c.position))
        .collect();
    assert_eq!(codes, vec![("MAJOR", 0, 0), ("MAJOR", 0, 1)]);
    assert_eq!(plan.sems, 1);
    assert!(
        plan.courses
            .iter()
            .all(|c| c.overall_status() == RequisiteStatus::Complete)
    );
}

#[test]
fn test_instantiate_float_slot_count() {
    let program = DegreeProgram {
        id: 1,
        title: "BS Computer Science".to_string(),
        max_units: 18.0,
    };
    let template: CurriculumTemplate = serde_json::from_value(json!({
        "code": "BSCS",
        "total_units": 120,
        "curriculum_structure": [{"year": 1, "sem": 1, "major_count": 2.0}],
        "curriculum_courses": []
    }))
    .expect("Template should parse");

    let plan = instantiate(&program, &template, &Catalog::default(), 2024);
    assert_eq!(plan.courses.len(), 2);
    assert!(plan.courses.iter().all(|c| c.code == "MAJOR"));
}

#[test]
fn test_instantiate_ids_and_slots_unique() {
    let (program, template, catalog) = bscs_template();
    let plan = instantiate(&program, &template, &catalog, 2024);

    let mut ids: Vec<CourseId> = plan.courses.iter().map(|c| c.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), plan.courses.len());

    let mut slots: Vec<(u32, u32)> = plan.courses.iter().map(|c| (c.semester, c.position)).collect();
    slots.sort();
    slots.dedup();
    assert_eq!(slots.len(), plan.courses.len());
    assert!(plan.courses.iter().all(|c| c.semester < plan.sems));
}

#[test]
fn test_semester_count_without_structure() {
    let template: CurriculumTemplate = serde_json::from_value(json!({
        "code": "BSCS",
        "total_units": 120,
        "curriculum_courses": [
            {"id": 1, "year": 4, "sem": 2, "type": "REQUIRED"},
            {"id": 2, "year": 1, "sem": 1, "type": "REQUIRED"}
        ]
    }))
    .expect("Template should parse");
    assert_eq!(semester_count(&template), 11);
    assert_eq!(semester_index(4, 2), Some(10));
    assert_eq!(semester_index(0, 1), None);
}

#[test]
fn test_semester_count_empty_template() {
    let template: CurriculumTemplate = serde_json::from_value(json!({
        "code": "EMPTY",
        "total_units": 0
    }))
    .expect("Template should parse");
    assert_eq!(semester_count(&template), 0);
}

#[test]
fn test_overloaded_semester_is_invalid() {
    let mut plan = Plan::new("TEST", 3, 2024, 18.0, 120.0);
    for catalog_id in 0..7 {
        placed(&mut plan, catalog_id, "CMSC 1", 3.0, 0);
    }
    let load = semester_load(&plan, 0);
    assert_eq!(load.req_units, 21.0);
    assert!(!load.valid);
    assert_eq!(load.issue(), Some(LoadIssue::Overloaded));
}

#[test]
fn test_semester_loads_cover_axis() {
    let plan = Plan::new("TEST", 5, 2024, 18.0, 120.0);
    let loads = semester_loads(&plan);
    let semesters: Vec<u32> = loads.iter().map(|l| l.semester).collect();
    assert_eq!(semesters, vec![0, 1, 2, 3, 4]);
    assert_eq!(loads[2].max_units, MIDYEAR_MAX_UNITS);
    assert_eq!(loads[3].min_units, REGULAR_MIN_UNITS);
}
