//! Tests for the planner module.

use std::{path::PathBuf, time::Duration};

use tempfile::TempDir;

use super::*;
use crate::{
    error::PlanError,
    models::{CourseId, RequisiteKind, RequisiteStatus, SpecialCategory},
    params::{
        AddCourse, AddPlaceholder, CreateCustomCourse, EditCourse, Id, InstantiatePlan,
        ListCurricula, MoveCourse, ReplacePlaceholder, SearchCatalog, Semester, UpdateSettings,
    },
};

fn demo_catalog_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/catalog")
}

/// Helper function to create a test planner
async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_catalog_dir(Some(demo_catalog_dir()))
        .with_debounce(Duration::from_millis(10))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

async fn create_bscs_planner() -> (TempDir, Planner) {
    let (temp_dir, mut planner) = create_test_planner().await;
    planner
        .instantiate_plan(&InstantiatePlan {
            program_id: 1,
            curriculum_code: "BSCS-2018".to_string(),
            start_year: 2024,
        })
        .expect("Failed to instantiate plan");
    (temp_dir, planner)
}

fn status_of(planner: &Planner, id: u64) -> Vec<RequisiteStatus> {
    planner
        .course(&Id { id })
        .expect("Course missing")
        .requisites
        .iter()
        .map(|r| r.status)
        .collect()
}

#[tokio::test]
async fn test_new_planner_has_no_plan() {
    let (_temp_dir, planner) = create_test_planner().await;
    assert!(!planner.has_plan());
    assert!(matches!(planner.plan(), Err(PlanError::NotFound { .. })));
    assert_eq!(planner.user(), "default");
    assert!(planner.saved_at().is_none());
}

#[tokio::test]
async fn test_mutation_without_plan_fails() {
    let (_temp_dir, mut planner) = create_test_planner().await;
    let result = planner.add_course(&AddCourse {
        catalog_id: 101,
        semester: 0,
    });
    assert!(matches!(result, Err(PlanError::NotFound { .. })));
    assert!(matches!(planner.add_semester(), Err(PlanError::NotFound { .. })));
}

#[tokio::test]
async fn test_instantiate_resolves_statuses() {
    let (_temp_dir, planner) = create_bscs_planner().await;
    let plan = planner.plan().expect("Plan missing");

    assert_eq!(plan.code, "BSCS-2018");
    assert_eq!(plan.sems, 9);
    assert_eq!(plan.max_units, 18.0);
    assert_eq!(plan.total_units, 72.0);

    // CMSC 12 follows CMSC 11
    assert_eq!(status_of(&planner, 6), vec![RequisiteStatus::Complete]);
    // CMSC 142: data structures taken, junior standing not yet reached
    assert_eq!(
        status_of(&planner, 21),
        vec![RequisiteStatus::Complete, RequisiteStatus::Missing]
    );
}

#[tokio::test]
async fn test_instantiate_unknown_references() {
    let (_temp_dir, mut planner) = create_test_planner().await;

    let result = planner.instantiate_plan(&InstantiatePlan {
        program_id: 99,
        curriculum_code: "BSCS-2018".to_string(),
        start_year: 2024,
    });
    assert!(matches!(result, Err(PlanError::NotFound { kind: "Program", .. })));

    let result = planner.instantiate_plan(&InstantiatePlan {
        program_id: 1,
        curriculum_code: "NOPE".to_string(),
        start_year: 2024,
    });
    assert!(matches!(result, Err(PlanError::NotFound { kind: "Curriculum", .. })));

    let result = planner.instantiate_plan(&InstantiatePlan {
        program_id: 1,
        curriculum_code: "BSAM-2019".to_string(),
        start_year: 2024,
    });
    assert!(matches!(result, Err(PlanError::InvalidInput { .. })));
    assert!(!planner.has_plan());
}

#[tokio::test]
async fn test_standing_reached_after_adding_units() {
    let (_temp_dir, mut planner) = create_bscs_planner().await;

    let ai = planner
        .add_course(&AddCourse {
            catalog_id: 210,
            semester: 4,
        })
        .expect("Failed to add course");
    assert_eq!((ai.semester, ai.position), (4, 4));
    // CMSC 123 sits in the same semester
    assert_eq!(ai.overall_status(), RequisiteStatus::Invalid);

    assert_eq!(
        status_of(&planner, 21),
        vec![RequisiteStatus::Complete, RequisiteStatus::Complete]
    );
}

#[tokio::test]
async fn test_add_course_rejects_bad_input() {
    let (_temp_dir, mut planner) = create_bscs_planner().await;
    let before = planner.plan().expect("Plan missing").clone();

    let result = planner.add_course(&AddCourse {
        catalog_id: 9999,
        semester: 0,
    });
    assert!(matches!(result, Err(PlanError::NotFound { .. })));

    let result = planner.add_course(&AddCourse {
        catalog_id: 101,
        semester: 9,
    });
    assert!(matches!(result, Err(PlanError::InvalidInput { .. })));

    assert_eq!(planner.plan().expect("Plan missing"), &before);
}

#[tokio::test]
async fn test_move_course() {
    let (_temp_dir, mut planner) = create_bscs_planner().await;

    // CMSC 11 onto CMSC 56's slot
    let result = planner.move_course(&MoveCourse {
        id: 1,
        semester: 0,
        position: Some(1),
    });
    assert!(matches!(result, Err(PlanError::InvalidInput { .. })));

    // Moving onto its own slot is allowed
    let course = planner
        .move_course(&MoveCourse {
            id: 1,
            semester: 0,
            position: Some(0),
        })
        .expect("Failed to move course");
    assert_eq!((course.semester, course.position), (0, 0));

    // CMSC 11 after CMSC 12 breaks the prerequisite
    let course = planner
        .move_course(&MoveCourse {
            id: 1,
            semester: 1,
            position: None,
        })
        .expect("Failed to move course");
    assert_eq!((course.semester, course.position), (1, 5));
    assert_eq!(status_of(&planner, 6), vec![RequisiteStatus::Invalid]);

    let result = planner.move_course(&MoveCourse {
        id: 404,
        semester: 0,
        position: None,
    });
    assert!(matches!(result, Err(PlanError::NotFound { .. })));
}

#[tokio::test]
async fn test_delete_course_leaves_gap() {
    let (_temp_dir, mut planner) = create_bscs_planner().await;

    let deleted = planner.delete_course(&Id { id: 2 }).expect("Failed to delete course");
    assert_eq!(deleted.code, "CMSC 56");
    // CMSC 57 loses its prerequisite
    assert_eq!(status_of(&planner, 7), vec![RequisiteStatus::Missing]);

    let placeholder = planner
        .add_placeholder(&AddPlaceholder {
            code: "major".to_string(),
            semester: 0,
        })
        .expect("Failed to add placeholder");
    assert_eq!(placeholder.code, "MAJOR");
    assert_eq!(placeholder.position, 1);

    let result = planner.delete_course(&Id { id: 2 });
    assert!(matches!(result, Err(PlanError::NotFound { .. })));
}

#[tokio::test]
async fn test_replace_placeholder() {
    let (_temp_dir, mut planner) = create_bscs_planner().await;

    let course = planner
        .replace_placeholder(&ReplacePlaceholder {
            id: 19,
            catalog_id: 212,
        })
        .expect("Failed to replace placeholder");
    assert_eq!(course.code, "CMSC 173");
    assert_eq!((course.semester, course.position), (4, 2));

    let plan = planner.plan().expect("Plan missing");
    assert!(plan.course(CourseId(19)).is_none());
    assert_eq!(plan.special.get(SpecialCategory::Major), &[course.id]);

    // Not a placeholder
    let result = planner.replace_placeholder(&ReplacePlaceholder {
        id: 1,
        catalog_id: 212,
    });
    assert!(matches!(result, Err(PlanError::InvalidInput { .. })));

    // GE ELECTIVE fills are not tracked
    planner
        .replace_placeholder(&ReplacePlaceholder {
            id: 5,
            catalog_id: 119,
        })
        .expect("Failed to replace placeholder");
    let plan = planner.plan().expect("Plan missing");
    assert_eq!(plan.special.major.len(), 1);
    assert!(plan.special.elective.is_empty());
}

#[tokio::test]
async fn test_create_custom_course() {
    let (_temp_dir, mut planner) = create_bscs_planner().await;

    let course = planner
        .create_custom_course(&CreateCustomCourse {
            code: "CMSC 190".to_string(),
            title: "Special Problem".to_string(),
            description: None,
            units: 3.0,
            semester: 7,
            requisite_kind: Some(RequisiteKind::Pre),
            requisites: vec![109, 110],
        })
        .expect("Failed to create course");

    assert_eq!(course.catalog_id, Some(20_001));
    assert_eq!(course.requisites.len(), 1);
    assert_eq!(course.requisites[0].id, 999_999);
    assert_eq!(
        course.requisites[0].codes().collect::<Vec<_>>(),
        vec!["CMSC 123", "CMSC 142"]
    );
    assert_eq!(course.overall_status(), RequisiteStatus::Complete);
    assert!(course.is_offered());

    // Referents must already be in the plan
    let result = planner.create_custom_course(&CreateCustomCourse {
        code: "CMSC 191".to_string(),
        title: "Topics".to_string(),
        units: 3.0,
        semester: 7,
        requisites: vec![211],
        ..Default::default()
    });
    assert!(matches!(result, Err(PlanError::NotFound { .. })));

    let result = planner.create_custom_course(&CreateCustomCourse {
        code: "CMSC 191".to_string(),
        title: "Topics".to_string(),
        units: -1.0,
        semester: 7,
        ..Default::default()
    });
    assert!(matches!(result, Err(PlanError::InvalidInput { .. })));
}

#[tokio::test]
async fn test_edit_course() {
    let (_temp_dir, mut planner) = create_bscs_planner().await;

    let course = planner
        .edit_course(&EditCourse {
            id: 11,
            title: Some("Free slot".to_string()),
            units: Some(3.0),
            semester: Some(5),
            ..Default::default()
        })
        .expect("Failed to edit course");
    assert_eq!(course.title, "Free slot");
    assert_eq!((course.semester, course.position), (5, 0));
    assert_eq!(course.units, 3.0);

    let result = planner.edit_course(&EditCourse {
        id: 11,
        ..Default::default()
    });
    assert!(matches!(result, Err(PlanError::InvalidInput { .. })));

    let result = planner.edit_course(&EditCourse {
        id: 11,
        semester: Some(42),
        ..Default::default()
    });
    assert!(matches!(result, Err(PlanError::InvalidInput { .. })));
}

#[tokio::test]
async fn test_edit_custom_requisite() {
    let (_temp_dir, mut planner) = create_bscs_planner().await;
    let course = planner
        .create_custom_course(&CreateCustomCourse {
            code: "CMSC 190".to_string(),
            title: "Special Problem".to_string(),
            units: 3.0,
            semester: 7,
            requisites: vec![109],
            ..Default::default()
        })
        .expect("Failed to create course");
    assert_eq!(course.overall_status(), RequisiteStatus::Complete);
    let id = course.id.0;

    // CMSC 123 sits in an earlier semester, so a corequisite is misplaced
    let course = planner
        .edit_course(&EditCourse {
            id,
            requisite_kind: Some(RequisiteKind::Co),
            ..Default::default()
        })
        .expect("Failed to edit course");
    assert_eq!(course.requisites.len(), 1);
    assert_eq!(course.requisites[0].kind, RequisiteKind::Co);
    assert_eq!(status_of(&planner, id), vec![RequisiteStatus::Invalid]);

    let course = planner
        .edit_course(&EditCourse {
            id,
            requisite_kind: Some(RequisiteKind::Pre),
            requisites: Some(vec![109, 110]),
            ..Default::default()
        })
        .expect("Failed to edit course");
    assert_eq!(course.requisites[0].id, 999_999);
    assert_eq!(
        course.requisites[0].codes().collect::<Vec<_>>(),
        vec!["CMSC 123", "CMSC 142"]
    );
    assert_eq!(status_of(&planner, id), vec![RequisiteStatus::Complete]);

    // Unknown referents leave the course untouched
    let result = planner.edit_course(&EditCourse {
        id,
        requisites: Some(vec![211]),
        ..Default::default()
    });
    assert!(matches!(result, Err(PlanError::NotFound { .. })));
    assert_eq!(status_of(&planner, id), vec![RequisiteStatus::Complete]);

    let course = planner
        .edit_course(&EditCourse {
            id,
            requisites: Some(Vec::new()),
            ..Default::default()
        })
        .expect("Failed to edit course");
    assert!(course.requisites.is_empty());

    let result = planner.edit_course(&EditCourse {
        id,
        requisite_kind: Some(RequisiteKind::Co),
        ..Default::default()
    });
    assert!(matches!(result, Err(PlanError::InvalidInput { .. })));
}

#[tokio::test]
async fn test_semester_add_remove() {
    let (_temp_dir, mut planner) = create_bscs_planner().await;

    assert_eq!(planner.add_semester().expect("Failed to add semester"), 10);
    assert_eq!(planner.remove_semester().expect("Failed to remove semester"), 9);

    // Semester 8 holds CMSC 198
    let result = planner.remove_semester();
    assert!(matches!(result, Err(PlanError::InvalidInput { .. })));
    assert_eq!(planner.plan().expect("Plan missing").sems, 9);
}

#[tokio::test]
async fn test_semester_loads() {
    let (_temp_dir, planner) = create_bscs_planner().await;

    let load = planner
        .semester_load(&Semester { semester: 0 })
        .expect("Failed to compute load");
    assert_eq!(load.req_units, 9.0);
    assert_eq!(load.total_units, 14.0);
    assert!(!load.valid);

    let midyear = planner
        .semester_load(&Semester { semester: 2 })
        .expect("Failed to compute load");
    assert!(midyear.valid);

    assert!(planner.semester_load(&Semester { semester: 9 }).is_err());
    assert_eq!(planner.semester_loads().expect("Failed to compute loads").len(), 9);

    let units = planner.curriculum_units().expect("Failed to compute units");
    assert_eq!(units.req_units, 42.0);
    assert!(!units.is_met());
}

#[tokio::test]
async fn test_catalog_queries() {
    let (_temp_dir, planner) = create_test_planner().await;

    let hits = planner.search_catalog(&SearchCatalog {
        query: "physics".to_string(),
    });
    let codes: Vec<&str> = hits.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["PHYS 71", "PHYS 71.1"]);

    assert_eq!(planner.programs().len(), 2);
    let curricula = planner
        .curricula(&ListCurricula { program_id: 1 })
        .expect("Failed to list curricula");
    assert_eq!(curricula.len(), 2);
    assert!(planner.curricula(&ListCurricula { program_id: 7 }).is_err());
}

#[tokio::test]
async fn test_update_settings() {
    let (_temp_dir, mut planner) = create_test_planner().await;

    let settings = planner.update_settings(&UpdateSettings {
        ignore_offer: Some(false),
        animate: Some(false),
        ..Default::default()
    });
    assert!(!settings.ignore_offer);
    assert!(!settings.animate);
    assert!(settings.show_arrows);
    assert_eq!(planner.settings(), &settings);
}

#[tokio::test]
async fn test_delete_plan() {
    let (_temp_dir, mut planner) = create_bscs_planner().await;
    let plan = planner.delete_plan().expect("Failed to delete plan");
    assert_eq!(plan.code, "BSCS-2018");
    assert!(!planner.has_plan());
    assert!(planner.delete_plan().is_err());
}
