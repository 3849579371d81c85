//! MCP tool handlers implementation

use std::sync::Arc;

use curricula_core::{
    Planner,
    display::{
        CatalogCourses, CreateResult, Curricula, DeleteResult, OperationStatus, PlanBoard,
        PlanReport, Programs, SemesterLoads, UpdateResult,
    },
    engine::{curriculum_units, semester_loads},
    params as core,
};
use log::debug;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types
///
/// Deserializes transparently into the wrapped core type and forwards its
/// JSON schema, so the core params need no MCP-specific derives of their own.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type InstantiatePlan = McpParams<core::InstantiatePlan>;
pub type AddCourse = McpParams<core::AddCourse>;
pub type AddPlaceholder = McpParams<core::AddPlaceholder>;
pub type CreateCustomCourse = McpParams<core::CreateCustomCourse>;
pub type EditCourse = McpParams<core::EditCourse>;
pub type MoveCourse = McpParams<core::MoveCourse>;
pub type ReplacePlaceholder = McpParams<core::ReplacePlaceholder>;
pub type Semester = McpParams<core::Semester>;
pub type SearchCatalog = McpParams<core::SearchCatalog>;
pub type ListCurricula = McpParams<core::ListCurricula>;
pub type UpdateSettings = McpParams<core::UpdateSettings>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(output: impl ToString) -> CallToolResult {
    CallToolResult::success(vec![Content::text(output.to_string())])
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Mutex<Planner>>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Mutex<Planner>>) -> Self {
        Self { planner }
    }

    pub async fn instantiate_plan(
        &self,
        Parameters(params): Parameters<InstantiatePlan>,
    ) -> McpResult {
        debug!("instantiate_plan: {params:?}");

        let mut planner = self.planner.lock().await;
        let plan = planner
            .instantiate_plan(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to create plan", &e))?;
        Ok(text(CreateResult::new(plan.clone())))
    }

    pub async fn show_plan(&self) -> McpResult {
        let planner = self.planner.lock().await;
        let plan = planner
            .plan()
            .map_err(|e| to_mcp_error("Failed to show plan", &e))?;
        let board = PlanBoard::new(plan, planner.settings()).with_saved_at(planner.saved_at());
        Ok(text(board))
    }

    pub async fn plan_report(&self) -> McpResult {
        let planner = self.planner.lock().await;
        let plan = planner
            .plan()
            .map_err(|e| to_mcp_error("Failed to report plan", &e))?;
        Ok(text(PlanReport(plan)))
    }

    pub async fn delete_plan(&self) -> McpResult {
        let plan = self
            .planner
            .lock()
            .await
            .delete_plan()
            .map_err(|e| to_mcp_error("Failed to delete plan", &e))?;
        Ok(text(DeleteResult::new(plan)))
    }

    pub async fn add_semester(&self) -> McpResult {
        let sems = self
            .planner
            .lock()
            .await
            .add_semester()
            .map_err(|e| to_mcp_error("Failed to add semester", &e))?;
        let status = OperationStatus::success(format!("Added semester {}", sems - 1))
            .with_detail(format!("The plan now has {sems} semesters"));
        Ok(text(status))
    }

    pub async fn remove_semester(&self) -> McpResult {
        let sems = self
            .planner
            .lock()
            .await
            .remove_semester()
            .map_err(|e| to_mcp_error("Failed to remove semester", &e))?;
        let status = OperationStatus::success(format!("Removed semester {sems}"))
            .with_detail(format!("The plan now has {sems} semesters"));
        Ok(text(status))
    }

    pub async fn semester_load(&self, Parameters(params): Parameters<Semester>) -> McpResult {
        debug!("semester_load: {params:?}");

        let planner = self.planner.lock().await;
        let load = planner
            .semester_load(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to compute semester load", &e))?;
        Ok(text(load))
    }

    pub async fn semester_loads(&self) -> McpResult {
        let planner = self.planner.lock().await;
        let plan = planner
            .plan()
            .map_err(|e| to_mcp_error("Failed to compute loads", &e))?;
        let loads = SemesterLoads {
            start_year: plan.year,
            loads: semester_loads(plan),
        };
        Ok(text(format!("{loads}\n{}\n", curriculum_units(plan))))
    }

    pub async fn add_course(&self, Parameters(params): Parameters<AddCourse>) -> McpResult {
        debug!("add_course: {params:?}");

        let course = self
            .planner
            .lock()
            .await
            .add_course(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to add course", &e))?;
        Ok(text(CreateResult::new(course)))
    }

    pub async fn add_placeholder(
        &self,
        Parameters(params): Parameters<AddPlaceholder>,
    ) -> McpResult {
        debug!("add_placeholder: {params:?}");

        let course = self
            .planner
            .lock()
            .await
            .add_placeholder(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to add placeholder", &e))?;
        Ok(text(CreateResult::new(course)))
    }

    pub async fn create_custom_course(
        &self,
        Parameters(params): Parameters<CreateCustomCourse>,
    ) -> McpResult {
        debug!("create_custom_course: {params:?}");

        let course = self
            .planner
            .lock()
            .await
            .create_custom_course(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to create course", &e))?;
        Ok(text(CreateResult::new(course)))
    }

    pub async fn edit_course(&self, Parameters(params): Parameters<EditCourse>) -> McpResult {
        debug!("edit_course: {params:?}");

        let course = self
            .planner
            .lock()
            .await
            .edit_course(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to edit course", &e))?;
        Ok(text(UpdateResult::new(course)))
    }

    pub async fn move_course(&self, Parameters(params): Parameters<MoveCourse>) -> McpResult {
        debug!("move_course: {params:?}");

        let course = self
            .planner
            .lock()
            .await
            .move_course(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to move course", &e))?;
        let change = format!(
            "Moved to semester {}, position {}",
            course.semester, course.position
        );
        Ok(text(UpdateResult::with_changes(course, vec![change])))
    }

    pub async fn delete_course(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("delete_course: {params:?}");

        let course = self
            .planner
            .lock()
            .await
            .delete_course(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to delete course", &e))?;
        Ok(text(DeleteResult::new(course)))
    }

    pub async fn replace_placeholder(
        &self,
        Parameters(params): Parameters<ReplacePlaceholder>,
    ) -> McpResult {
        debug!("replace_placeholder: {params:?}");

        let course = self
            .planner
            .lock()
            .await
            .replace_placeholder(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to replace placeholder", &e))?;
        let change = format!("Replaced placeholder {}", params.as_ref().id);
        Ok(text(UpdateResult::with_changes(course, vec![change])))
    }

    pub async fn show_course(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_course: {params:?}");

        let planner = self.planner.lock().await;
        let course = planner
            .course(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to show course", &e))?;
        Ok(text(course))
    }

    pub async fn search_catalog(
        &self,
        Parameters(params): Parameters<SearchCatalog>,
    ) -> McpResult {
        debug!("search_catalog: {params:?}");

        let planner = self.planner.lock().await;
        Ok(text(CatalogCourses(planner.search_catalog(params.as_ref()))))
    }

    pub async fn list_programs(&self) -> McpResult {
        let planner = self.planner.lock().await;
        Ok(text(Programs(planner.programs())))
    }

    pub async fn list_curricula(
        &self,
        Parameters(params): Parameters<ListCurricula>,
    ) -> McpResult {
        debug!("list_curricula: {params:?}");

        let planner = self.planner.lock().await;
        let curricula = planner
            .curricula(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to list curricula", &e))?;
        Ok(text(Curricula(curricula)))
    }

    pub async fn show_settings(&self) -> McpResult {
        let planner = self.planner.lock().await;
        Ok(text(planner.settings()))
    }

    pub async fn update_settings(
        &self,
        Parameters(params): Parameters<UpdateSettings>,
    ) -> McpResult {
        debug!("update_settings: {params:?}");

        let settings = self
            .planner
            .lock()
            .await
            .update_settings(params.as_ref());
        Ok(text(UpdateResult::new(settings)))
    }
}
