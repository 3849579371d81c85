//! MCP server implementation for Curricula
//!
//! Exposes the planner's plan, course, semester, catalog and settings
//! operations as Model Context Protocol tools over stdio. Tool calls are
//! serialized through one mutex, which keeps the planner the single writer
//! of the plan.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use curricula_core::Planner;
use log::{debug, error, info};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use tokio::{
    signal::unix::{SignalKind, signal},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{
    AddCourse, AddPlaceholder, CreateCustomCourse, EditCourse, Id, InstantiatePlan,
    ListCurricula, McpResult, MoveCourse, ReplacePlaceholder, SearchCatalog, Semester,
    UpdateSettings,
};

/// MCP server for Curricula
#[derive(Clone)]
pub struct CurriculaMcpServer {
    planner: Arc<Mutex<Planner>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CurriculaMcpServer {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(Mutex::new(planner)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "instantiate_plan",
        description = "Start a new plan from a degree program's curriculum, replacing the current plan. Provide program_id, curriculum_code (see list_programs and list_curricula) and the start_year of the first semester. Courses are laid out as the curriculum prescribes and their requisite statuses are resolved."
    )]
    async fn instantiate_plan(&self, params: Parameters<InstantiatePlan>) -> McpResult {
        self.handlers().instantiate_plan(params).await
    }

    #[tool(
        name = "show_plan",
        description = "Show the plan semester by semester: each course's plan-local ID, slot position, units and requisite status, each semester's unit load, and warnings for underloaded or overloaded semesters, unmet requisites and unoffered courses (subject to the user's settings)."
    )]
    async fn show_plan(&self) -> McpResult {
        self.handlers().show_plan().await
    }

    #[tool(
        name = "plan_report",
        description = "Summarize the plan by semester, list the courses used to fill MAJOR, ELECTIVE, SPECIALIZED, TRACK and COGNATE slots, and compare counted units with the curriculum's requirement."
    )]
    async fn plan_report(&self) -> McpResult {
        self.handlers().plan_report().await
    }

    #[tool(
        name = "delete_plan",
        description = "Permanently delete the current plan. This cannot be undone."
    )]
    async fn delete_plan(&self) -> McpResult {
        self.handlers().delete_plan().await
    }

    #[tool(
        name = "add_semester",
        description = "Append an empty semester at the end of the plan."
    )]
    async fn add_semester(&self) -> McpResult {
        self.handlers().add_semester().await
    }

    #[tool(
        name = "remove_semester",
        description = "Remove the last semester of the plan. Fails if that semester still holds courses; move or delete them first."
    )]
    async fn remove_semester(&self) -> McpResult {
        self.handlers().remove_semester().await
    }

    #[tool(
        name = "semester_load",
        description = "Show the unit load of one semester (zero-based index): counted units against the allowed range. Regular semesters need at least 15 units and at most the program's maximum; midyear semesters allow up to 6."
    )]
    async fn semester_load(&self, params: Parameters<Semester>) -> McpResult {
        self.handlers().semester_load(params).await
    }

    #[tool(
        name = "semester_loads",
        description = "Show the unit load of every semester and the plan's counted units against the curriculum's requirement."
    )]
    async fn semester_loads(&self) -> McpResult {
        self.handlers().semester_loads().await
    }

    #[tool(
        name = "add_course",
        description = "Add a catalog course (by catalog_id, see search_catalog) to a zero-based semester, at the first free position. Returns the course with its plan-local ID and requisite statuses."
    )]
    async fn add_course(&self, params: Parameters<AddCourse>) -> McpResult {
        self.handlers().add_course(params).await
    }

    #[tool(
        name = "add_placeholder",
        description = "Add an open-category placeholder (e.g. MAJOR, ELECTIVE, GE ELECTIVE) to a semester. Fill it later with replace_placeholder."
    )]
    async fn add_placeholder(&self, params: Parameters<AddPlaceholder>) -> McpResult {
        self.handlers().add_placeholder(params).await
    }

    #[tool(
        name = "create_custom_course",
        description = "Create a course that is not in the catalog, with code, title, units and semester. It may carry one requisite group (requisite_kind PRE, CO or \"-\", default PRE) whose requisites are catalog IDs of courses already in the plan."
    )]
    async fn create_custom_course(&self, params: Parameters<CreateCustomCourse>) -> McpResult {
        self.handlers().create_custom_course(params).await
    }

    #[tool(
        name = "edit_course",
        description = "Edit a placed course by plan-local ID. Only the given fields (code, title, description, units, semester, requisite_kind, requisites) change; a new semester puts the course at the first free position there. requisites replaces the custom requisite group with catalog IDs of courses already in the plan, and an empty list removes it."
    )]
    async fn edit_course(&self, params: Parameters<EditCourse>) -> McpResult {
        self.handlers().edit_course(params).await
    }

    #[tool(
        name = "move_course",
        description = "Move a course to a semester and optional position. Fails if another course occupies that position. Requisite statuses of every course are recomputed after the move."
    )]
    async fn move_course(&self, params: Parameters<MoveCourse>) -> McpResult {
        self.handlers().move_course(params).await
    }

    #[tool(
        name = "delete_course",
        description = "Remove a course from the plan by plan-local ID. Courses that required it become partial or missing."
    )]
    async fn delete_course(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().delete_course(params).await
    }

    #[tool(
        name = "replace_placeholder",
        description = "Replace a placeholder (by plan-local ID) with a catalog course in the same slot. Fills of MAJOR, ELECTIVE, SPECIALIZED, TRACK and COGNATE slots are recorded for the plan report."
    )]
    async fn replace_placeholder(&self, params: Parameters<ReplacePlaceholder>) -> McpResult {
        self.handlers().replace_placeholder(params).await
    }

    #[tool(
        name = "show_course",
        description = "Show one placed course with its offering and each requisite group's kind, referents and status."
    )]
    async fn show_course(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_course(params).await
    }

    #[tool(
        name = "search_catalog",
        description = "Search catalog courses by code or title (case-insensitive). Returns catalog IDs, units, offerings and requisites."
    )]
    async fn search_catalog(&self, params: Parameters<SearchCatalog>) -> McpResult {
        self.handlers().search_catalog(params).await
    }

    #[tool(
        name = "list_programs",
        description = "List the degree programs of the catalog with their IDs and maximum units per semester."
    )]
    async fn list_programs(&self) -> McpResult {
        self.handlers().list_programs().await
    }

    #[tool(
        name = "list_curricula",
        description = "List the curricula of one degree program, with their codes and required units."
    )]
    async fn list_curricula(&self, params: Parameters<ListCurricula>) -> McpResult {
        self.handlers().list_curricula(params).await
    }

    #[tool(
        name = "show_settings",
        description = "Show the user's display settings, including which warnings are suppressed."
    )]
    async fn show_settings(&self) -> McpResult {
        self.handlers().show_settings().await
    }

    #[tool(
        name = "update_settings",
        description = "Change display settings. Only the given flags change: show_arrows, animate, show_select, ignore_units, ignore_reqs and ignore_offer."
    )]
    async fn update_settings(&self, params: Parameters<UpdateSettings>) -> McpResult {
        self.handlers().update_settings(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for CurriculaMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "curricula".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::default()
            },
            instructions: Some(r#"Curricula builds a semester-by-semester degree plan from a curriculum and keeps each course's requisite status current.

## Core Concepts
- **Plan**: One per user. Semesters are zero-based; index % 3 gives 1st sem, 2nd sem and midyear.
- **Courses**: Each has a plan-local ID and a (semester, position) slot. Placeholders (MAJOR, ELECTIVE, ...) have no catalog link.
- **Requisites**: PRE groups must sit in earlier semesters, CO groups in the same semester. Standing requisites (SOPHOMORE, JUNIOR, SENIOR) need a share of the curriculum's units before the course's semester.
- **Statuses**: COMPLETE, PARTIAL (some referents missing), MISSING (none found), INVALID (found but badly placed).

## Workflow
1. `list_programs` and `list_curricula` to pick a curriculum
2. `instantiate_plan` to lay it out
3. `show_plan` to review statuses and load warnings
4. `search_catalog`, `add_course`, `replace_placeholder` and `move_course` to fix gaps
5. `plan_report` for the summary

Changes are saved automatically."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: CurriculaMcpServer) -> Result<()> {
    use rmcp::{ServiceExt, transport::stdio};

    info!("Starting Curricula MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let planner = server.planner.clone();
    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    planner.lock().await.flush().await;
    info!("MCP server shutdown complete");
    Ok(())
}
