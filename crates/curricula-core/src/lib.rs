//! Core library for the Curricula degree planner.
//!
//! This crate turns a degree program's curriculum template into an editable
//! semester-by-semester plan and keeps every course's requisite status
//! current as the plan is edited. It provides the catalog loader, the plan
//! models, the instantiation and requisite resolution engine, SQLite
//! persistence and markdown display types.
//!
//! # Layers
//!
//! - **Catalog** ([`catalog`]): Read-only courses, curricula and programs
//!   loaded from JSON files
//! - **Engine** ([`engine`]): Pure functions over a [`models::Plan`]:
//!   instantiation, placement, requisite resolution and unit loads
//! - **Planner** ([`planner`]): The single writer of a user's plan, which
//!   validates edits, resolves after each one and persists in the background
//! - **Display** ([`display`]): Markdown views rendered by the CLI's terminal
//!   renderer or returned to MCP clients
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use curricula_core::{PlannerBuilder, display::PlanBoard, params::InstantiatePlan};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut planner = PlannerBuilder::new()
//!     .with_database_path(Some("plans.db"))
//!     .with_catalog_dir(Some("data/catalog"))
//!     .build()
//!     .await?;
//!
//! planner.instantiate_plan(&InstantiatePlan {
//!     program_id: 1,
//!     curriculum_code: "BSCS-2018".to_string(),
//!     start_year: 2024,
//! })?;
//!
//! let plan = planner.plan()?;
//! println!("{}", PlanBoard::new(plan, planner.settings()));
//!
//! planner.shutdown().await;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;

// Re-export commonly used types
pub use catalog::Catalog;
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, OperationStatus, PlanBoard, PlanReport, UpdateResult,
};
pub use error::{PlanError, Result};
pub use models::{Course, CourseId, Plan, RequisiteKind, RequisiteStatus, Settings};
pub use planner::{Planner, PlannerBuilder};
