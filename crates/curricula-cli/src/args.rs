use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CatalogCommands, CourseCommands, PlanCommands, SemesterCommands, SettingsCommands};

/// Semester-by-semester academic plan builder
///
/// Curricula instantiates a degree program's curriculum into an editable
/// plan of semesters and courses, and keeps every course's requisite status
/// (prerequisites, corequisites and class standing) current as the plan is
/// edited. The same operations are available to AI assistants through an
/// MCP server.
#[derive(Parser)]
#[command(version, about, name = "curricula")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/curricula/curricula.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Directory holding courses.json, curricula.json and programs.json.
    /// Defaults to $XDG_DATA_HOME/curricula/catalog
    #[arg(long, global = true)]
    pub catalog_dir: Option<PathBuf>,

    /// Identity whose plan is edited. Defaults to "default"
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Curricula CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Create, show and report on the plan
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Place and edit courses
    #[command(alias = "c")]
    Course {
        #[command(subcommand)]
        command: CourseCommands,
    },
    /// Add, remove and inspect semesters
    #[command(alias = "s")]
    Sem {
        #[command(subcommand)]
        command: SemesterCommands,
    },
    /// Browse the course catalog and degree programs
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Show or change display settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
    /// Start the MCP server
    Serve,
}
