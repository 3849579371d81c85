//! Plan, semester, catalog and settings operations for the Planner.

use log::info;

use super::{Planner, check_semester};
use crate::{
    catalog::{CatalogCourse, CurriculumTemplate, DegreeProgram},
    engine::{self, CurriculumUnits, SemesterLoad},
    error::{PlanError, Result},
    models::{Plan, Settings},
    params::{InstantiatePlan, ListCurricula, SearchCatalog, Semester, UpdateSettings},
};

impl Planner {
    /// Instantiates a fresh plan from a curriculum, replacing the user's
    /// current plan.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::NotFound` for an unknown program or curriculum and
    /// `PlanError::InvalidInput` when the curriculum belongs to another
    /// program.
    pub fn instantiate_plan(&mut self, params: &InstantiatePlan) -> Result<&Plan> {
        let program = self
            .catalog
            .program(params.program_id)
            .ok_or_else(|| PlanError::not_found("Program", params.program_id))?;
        let template = self
            .catalog
            .curriculum(&params.curriculum_code)
            .ok_or_else(|| PlanError::not_found("Curriculum", &params.curriculum_code))?;

        if template.program_id.is_some_and(|id| id != program.id) {
            return Err(PlanError::invalid_input("curriculum_code").with_reason(format!(
                "Curriculum {} does not belong to program {}",
                template.code, program.id
            )));
        }

        let plan = engine::instantiate(program, template, &self.catalog, params.start_year);
        info!(
            "Instantiated {} for {} starting {}",
            plan.code, self.user, plan.year
        );
        self.plan = Some(plan);
        self.commit();
        self.plan()
    }

    /// Deletes the user's plan and returns it.
    pub fn delete_plan(&mut self) -> Result<Plan> {
        let plan = self.plan.take().ok_or_else(PlanError::no_plan)?;
        self.writer.schedule_delete();
        Ok(plan)
    }

    /// Appends an empty semester. Returns the new semester count.
    pub fn add_semester(&mut self) -> Result<u32> {
        let plan = self.plan_mut()?;
        plan.add_semester();
        let sems = plan.sems;
        self.commit();
        Ok(sems)
    }

    /// Drops the last semester. Returns the new semester count.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` if the plan has no semesters or
    /// the last one still holds courses.
    pub fn remove_semester(&mut self) -> Result<u32> {
        let plan = self.plan_mut()?;
        let Some(last) = plan.sems.checked_sub(1) else {
            return Err(PlanError::invalid_input("semester").with_reason("The plan has no semesters"));
        };
        if !plan.is_semester_empty(last) {
            return Err(PlanError::invalid_input("semester").with_reason(format!(
                "{} still holds courses",
                plan.semester_label(last)
            )));
        }

        plan.remove_semester();
        let sems = plan.sems;
        self.commit();
        Ok(sems)
    }

    /// Unit load of one semester.
    pub fn semester_load(&self, params: &Semester) -> Result<SemesterLoad> {
        let plan = self.plan()?;
        check_semester(plan, params.semester)?;
        Ok(engine::semester_load(plan, params.semester))
    }

    /// Unit loads of every semester.
    pub fn semester_loads(&self) -> Result<Vec<SemesterLoad>> {
        Ok(engine::semester_loads(self.plan()?))
    }

    /// Plan-wide units against the curriculum's requirement.
    pub fn curriculum_units(&self) -> Result<CurriculumUnits> {
        Ok(engine::curriculum_units(self.plan()?))
    }

    /// Searches catalog courses by code or title.
    pub fn search_catalog(&self, params: &SearchCatalog) -> Vec<&CatalogCourse> {
        self.catalog.search(&params.query)
    }

    pub fn programs(&self) -> &[DegreeProgram] {
        self.catalog.programs()
    }

    /// Curricula offered under a degree program.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::NotFound` for an unknown program.
    pub fn curricula(&self, params: &ListCurricula) -> Result<Vec<&CurriculumTemplate>> {
        self.catalog
            .program(params.program_id)
            .ok_or_else(|| PlanError::not_found("Program", params.program_id))?;
        Ok(self.catalog.curricula_for_program(params.program_id))
    }

    /// Applies the given flags and persists the settings.
    pub fn update_settings(&mut self, params: &UpdateSettings) -> Settings {
        let settings = &mut self.settings;
        let updates = [
            (&mut settings.show_arrows, params.show_arrows),
            (&mut settings.animate, params.animate),
            (&mut settings.show_select, params.show_select),
            (&mut settings.ignore_units, params.ignore_units),
            (&mut settings.ignore_reqs, params.ignore_reqs),
            (&mut settings.ignore_offer, params.ignore_offer),
        ];
        for (flag, value) in updates {
            if let Some(value) = value {
                *flag = value;
            }
        }

        self.writer.save_settings(self.settings);
        self.settings
    }
}
