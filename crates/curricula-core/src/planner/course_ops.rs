//! Course operations for the Planner.
//!
//! Every mutating operation validates its destination first and leaves the
//! plan untouched on error. Successful mutations return the affected course
//! with freshly resolved requisite statuses.

use super::{Planner, check_semester};
use crate::{
    error::{PlanError, Result},
    models::{
        CUSTOM_REQUISITE_ID, Course, CourseId, Plan, Referent, Requisite, RequisiteKind,
    },
    params::{AddCourse, AddPlaceholder, CreateCustomCourse, EditCourse, Id, MoveCourse, ReplacePlaceholder},
};

impl Planner {
    /// Looks up a course of the current plan.
    pub fn course(&self, params: &Id) -> Result<&Course> {
        self.plan()?
            .course(CourseId(params.id))
            .ok_or_else(|| PlanError::not_found("Course", params.id))
    }

    /// Adds a catalog course at the first free position of a semester.
    pub fn add_course(&mut self, params: &AddCourse) -> Result<Course> {
        let plan = self.plan.as_mut().ok_or_else(PlanError::no_plan)?;
        check_semester(plan, params.semester)?;
        let entry = self
            .catalog
            .course(params.catalog_id)
            .ok_or_else(|| PlanError::not_found("Catalog course", params.catalog_id))?;

        let id = plan.allocate_id();
        let position = plan.next_free_position(params.semester);
        plan.add_course(Course::from_catalog(id, entry, params.semester, position));
        self.committed(id)
    }

    /// Adds an open-category placeholder at the first free position.
    pub fn add_placeholder(&mut self, params: &AddPlaceholder) -> Result<Course> {
        let code = params.code.trim();
        if code.is_empty() {
            return Err(PlanError::invalid_input("code").with_reason("Placeholder code cannot be empty"));
        }
        let plan = self.plan_mut()?;
        check_semester(plan, params.semester)?;

        let id = plan.allocate_id();
        let position = plan.next_free_position(params.semester);
        plan.add_course(Course::placeholder(id, code.to_uppercase(), params.semester, position));
        self.committed(id)
    }

    /// Creates a freeform course with an optional custom requisite group.
    ///
    /// Requisite referents must be catalog-linked courses already in the
    /// plan; the group kind defaults to prerequisite.
    pub fn create_custom_course(&mut self, params: &CreateCustomCourse) -> Result<Course> {
        let code = params.code.trim();
        if code.is_empty() {
            return Err(PlanError::invalid_input("code").with_reason("Course code cannot be empty"));
        }
        if params.title.trim().is_empty() {
            return Err(PlanError::invalid_input("title").with_reason("Course title cannot be empty"));
        }
        check_units(params.units)?;

        let plan = self.plan_mut()?;
        check_semester(plan, params.semester)?;

        let referents = plan_referents(plan, &params.requisites)?;

        let id = plan.allocate_id();
        let position = plan.next_free_position(params.semester);
        let mut course = Course::placeholder(id, code, params.semester, position);
        course.catalog_id = Some(plan.allocate_custom_catalog_id());
        course.title = params.title.trim().to_string();
        course.description = params.description.clone().unwrap_or_default();
        course.units = params.units;
        if !referents.is_empty() {
            let kind = params.requisite_kind.unwrap_or(RequisiteKind::Pre);
            course.requisites.push(Requisite::new(CUSTOM_REQUISITE_ID, kind, referents));
        }

        plan.add_course(course);
        self.committed(id)
    }

    /// Rewrites the descriptive fields of a course. A semester change
    /// re-slots the course at the first free position of its new semester.
    ///
    /// `requisites` replaces the custom requisite group, and an empty list
    /// drops it. `requisite_kind` alone changes the kind of the existing
    /// group.
    pub fn edit_course(&mut self, params: &EditCourse) -> Result<Course> {
        if params.is_empty() {
            return Err(PlanError::invalid_input("id").with_reason("No fields to update"));
        }
        if let Some(code) = &params.code
            && code.trim().is_empty()
        {
            return Err(PlanError::invalid_input("code").with_reason("Course code cannot be empty"));
        }
        if let Some(units) = params.units {
            check_units(units)?;
        }

        let plan = self.plan_mut()?;
        let id = CourseId(params.id);
        let mut course = plan
            .course(id)
            .cloned()
            .ok_or_else(|| PlanError::not_found("Course", params.id))?;

        if let Some(semester) = params.semester
            && semester != course.semester
        {
            check_semester(plan, semester)?;
            course.semester = semester;
            course.position = plan.next_free_position(semester);
        }
        if let Some(code) = &params.code {
            course.code = code.trim().to_string();
        }
        if let Some(title) = &params.title {
            course.title = title.clone();
        }
        if let Some(description) = &params.description {
            course.description = description.clone();
        }
        if let Some(units) = params.units {
            course.units = units;
        }

        let existing = course
            .requisites
            .iter()
            .position(|r| r.id == CUSTOM_REQUISITE_ID);
        match (&params.requisites, existing) {
            (Some(catalog_ids), _) => {
                let referents = plan_referents(plan, catalog_ids)?;
                let kind = params
                    .requisite_kind
                    .or_else(|| existing.map(|i| course.requisites[i].kind))
                    .unwrap_or(RequisiteKind::Pre);
                let group = Requisite::new(CUSTOM_REQUISITE_ID, kind, referents);
                match existing {
                    Some(i) if group.referents.is_empty() => {
                        course.requisites.remove(i);
                    }
                    Some(i) => course.requisites[i] = group,
                    None if group.referents.is_empty() => {}
                    None => course.requisites.push(group),
                }
            }
            (None, Some(i)) => {
                if let Some(kind) = params.requisite_kind {
                    course.requisites[i].kind = kind;
                }
            }
            (None, None) => {
                if params.requisite_kind.is_some() {
                    return Err(PlanError::invalid_input("requisite_kind").with_reason(format!(
                        "Course {} has no custom requisite",
                        params.id
                    )));
                }
            }
        }

        plan.update_course(course);
        self.committed(id)
    }

    /// Moves a course to a slot. Without a position the course goes to the
    /// first free position of the destination semester.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` if the semester is out of range or
    /// the slot is held by another course.
    pub fn move_course(&mut self, params: &MoveCourse) -> Result<Course> {
        let plan = self.plan_mut()?;
        let id = CourseId(params.id);
        if plan.course(id).is_none() {
            return Err(PlanError::not_found("Course", params.id));
        }
        check_semester(plan, params.semester)?;

        let position = match params.position {
            Some(position) => position,
            None => plan.next_free_position(params.semester),
        };
        if plan.is_slot_taken(params.semester, position, Some(id)) {
            return Err(PlanError::invalid_input("position").with_reason(format!(
                "Position {position} of semester {} is occupied",
                params.semester
            )));
        }

        plan.move_course(id, params.semester, position);
        self.committed(id)
    }

    /// Removes a course and returns it.
    pub fn delete_course(&mut self, params: &Id) -> Result<Course> {
        let plan = self.plan_mut()?;
        let course = plan
            .delete_course(CourseId(params.id))
            .ok_or_else(|| PlanError::not_found("Course", params.id))?;
        self.commit();
        Ok(course)
    }

    /// Swaps a placeholder for a catalog course in the same slot.
    pub fn replace_placeholder(&mut self, params: &ReplacePlaceholder) -> Result<Course> {
        let plan = self.plan.as_mut().ok_or_else(PlanError::no_plan)?;
        let placeholder = plan
            .course(CourseId(params.id))
            .ok_or_else(|| PlanError::not_found("Course", params.id))?;
        if !placeholder.is_placeholder() {
            return Err(PlanError::invalid_input("id").with_reason(format!(
                "Course {} ({}) is not a placeholder",
                params.id, placeholder.code
            )));
        }
        let entry = self
            .catalog
            .course(params.catalog_id)
            .ok_or_else(|| PlanError::not_found("Catalog course", params.catalog_id))?;

        let id = plan
            .replace_placeholder(CourseId(params.id), entry)
            .ok_or_else(|| PlanError::not_found("Course", params.id))?;
        self.committed(id)
    }

    /// Commits the pending mutation and returns the resolved course.
    fn committed(&mut self, id: CourseId) -> Result<Course> {
        self.commit();
        self.plan()?
            .course(id)
            .cloned()
            .ok_or_else(|| PlanError::not_found("Course", id))
    }
}

/// Referents for catalog-linked courses already in the plan.
fn plan_referents(plan: &Plan, catalog_ids: &[u64]) -> Result<Vec<Referent>> {
    catalog_ids
        .iter()
        .map(|catalog_id| {
            plan.courses
                .iter()
                .find(|c| c.catalog_id == Some(*catalog_id))
                .map(|c| Referent::course(c.code.clone(), *catalog_id))
                .ok_or_else(|| PlanError::not_found("Plan course with catalog id", catalog_id))
        })
        .collect()
}

fn check_units(units: f64) -> Result<()> {
    if !units.is_finite() || units < 0.0 {
        return Err(PlanError::invalid_input("units").with_reason(format!(
            "Units must be a non-negative number, got {units}"
        )));
    }
    Ok(())
}
