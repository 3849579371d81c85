//! Command-line subcommands and their handlers.
//!
//! Each subcommand's clap argument struct converts into the matching core
//! parameter type via `From`, so the core params stay free of clap derives:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! The [`Cli`] handler runs one command against the planner and prints the
//! markdown result through the terminal renderer.

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use curricula_core::{
    Planner,
    display::{
        CatalogCourses, CreateResult, Curricula, DeleteResult, OperationStatus, PlanBoard,
        PlanReport, Programs, SemesterLoads, UpdateResult,
    },
    models::RequisiteKind,
    params::*,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Plan commands
// ============================================================================

/// Start a new plan from a degree program's curriculum
///
/// Replaces the current plan, if any. Courses are laid out as the curriculum
/// prescribes and their requisite statuses resolved immediately.
#[derive(Args)]
pub struct NewPlanArgs {
    #[arg(help = "ID of the degree program (see `curricula catalog programs`)")]
    pub program_id: u64,
    #[arg(help = "Code of the curriculum (see `curricula catalog curricula`)")]
    pub curriculum_code: String,
    #[arg(short, long, help = "Calendar year the first semester starts in")]
    pub year: i32,
}

impl From<NewPlanArgs> for InstantiatePlan {
    fn from(val: NewPlanArgs) -> Self {
        InstantiatePlan {
            program_id: val.program_id,
            curriculum_code: val.curriculum_code,
            start_year: val.year,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Start a new plan from a curriculum
    #[command(alias = "n")]
    New(NewPlanArgs),
    /// Show the plan semester by semester
    #[command(alias = "s")]
    Show,
    /// Delete the plan
    Delete,
    /// Summarize the plan and its open-category fills
    #[command(alias = "r")]
    Report,
    /// Show unit loads per semester and for the whole curriculum
    #[command(alias = "u")]
    Units,
}

// ============================================================================
// Course commands
// ============================================================================

/// Add a catalog course to a semester
#[derive(Args)]
pub struct AddCourseArgs {
    #[arg(help = "Catalog ID of the course (see `curricula catalog search`)")]
    pub catalog_id: u64,
    #[arg(short, long, help = "Zero-based semester index")]
    pub semester: u32,
}

impl From<AddCourseArgs> for AddCourse {
    fn from(val: AddCourseArgs) -> Self {
        AddCourse {
            catalog_id: val.catalog_id,
            semester: val.semester,
        }
    }
}

/// Add an open-category placeholder such as MAJOR or GE ELECTIVE
#[derive(Args)]
pub struct AddPlaceholderArgs {
    #[arg(help = "Category code of the placeholder")]
    pub code: String,
    #[arg(short, long, help = "Zero-based semester index")]
    pub semester: u32,
}

impl From<AddPlaceholderArgs> for AddPlaceholder {
    fn from(val: AddPlaceholderArgs) -> Self {
        AddPlaceholder {
            code: val.code,
            semester: val.semester,
        }
    }
}

/// Create a course that is not in the catalog
///
/// The course may carry one requisite group referring to catalog-linked
/// courses already in the plan.
#[derive(Args)]
pub struct CreateCourseArgs {
    pub code: String,
    pub title: String,
    #[arg(short, long)]
    pub units: f64,
    #[arg(short, long, help = "Zero-based semester index")]
    pub semester: u32,
    #[arg(short, long)]
    pub description: Option<String>,
    #[arg(short, long, help = "Kind of the requisite group (defaults to pre)")]
    pub kind: Option<RequisiteKindArg>,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Catalog IDs of plan courses the requisite refers to, comma-separated"
    )]
    pub requisites: Vec<u64>,
}

impl From<CreateCourseArgs> for CreateCustomCourse {
    fn from(val: CreateCourseArgs) -> Self {
        CreateCustomCourse {
            code: val.code,
            title: val.title,
            description: val.description,
            units: val.units,
            semester: val.semester,
            requisite_kind: val.kind.map(Into::into),
            requisites: val.requisites,
        }
    }
}

/// Edit a placed course
///
/// Only the given fields change. Moving to another semester puts the course
/// at the first free position there.
#[derive(Args)]
pub struct EditCourseArgs {
    #[arg(help = "Plan-local ID of the course")]
    pub id: u64,
    #[arg(short, long)]
    pub code: Option<String>,
    #[arg(short, long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    #[arg(short, long)]
    pub units: Option<f64>,
    #[arg(short, long)]
    pub semester: Option<u32>,
    #[arg(short, long, help = "Kind of the custom requisite group")]
    pub kind: Option<RequisiteKindArg>,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Catalog IDs of plan courses for the custom requisite, comma-separated"
    )]
    pub requisites: Option<Vec<u64>>,
    #[arg(long, conflicts_with = "requisites", help = "Remove the custom requisite group")]
    pub clear_requisites: bool,
}

impl From<EditCourseArgs> for EditCourse {
    fn from(val: EditCourseArgs) -> Self {
        let requisites = if val.clear_requisites {
            Some(Vec::new())
        } else {
            val.requisites
        };
        EditCourse {
            id: val.id,
            code: val.code,
            title: val.title,
            description: val.description,
            units: val.units,
            semester: val.semester,
            requisite_kind: val.kind.map(Into::into),
            requisites,
        }
    }
}

/// Move a course to a semester slot
#[derive(Args)]
pub struct MoveCourseArgs {
    #[arg(help = "Plan-local ID of the course")]
    pub id: u64,
    #[arg(short, long, help = "Zero-based semester index")]
    pub semester: u32,
    #[arg(short, long, help = "Target position; the first free one when omitted")]
    pub position: Option<u32>,
}

impl From<MoveCourseArgs> for MoveCourse {
    fn from(val: MoveCourseArgs) -> Self {
        MoveCourse {
            id: val.id,
            semester: val.semester,
            position: val.position,
        }
    }
}

/// Replace a placeholder with a catalog course in the same slot
#[derive(Args)]
pub struct ReplacePlaceholderArgs {
    #[arg(help = "Plan-local ID of the placeholder")]
    pub id: u64,
    #[arg(help = "Catalog ID of the course taking its slot")]
    pub catalog_id: u64,
}

impl From<ReplacePlaceholderArgs> for ReplacePlaceholder {
    fn from(val: ReplacePlaceholderArgs) -> Self {
        ReplacePlaceholder {
            id: val.id,
            catalog_id: val.catalog_id,
        }
    }
}

/// Select a placed course by its plan-local ID
#[derive(Args)]
pub struct CourseIdArgs {
    #[arg(help = "Plan-local ID of the course")]
    pub id: u64,
}

impl From<CourseIdArgs> for Id {
    fn from(val: CourseIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum CourseCommands {
    /// Add a catalog course to a semester
    #[command(alias = "a")]
    Add(AddCourseArgs),
    /// Add an open-category placeholder
    #[command(alias = "p")]
    Placeholder(AddPlaceholderArgs),
    /// Create a course that is not in the catalog
    #[command(alias = "c")]
    Create(CreateCourseArgs),
    /// Edit a placed course
    #[command(alias = "e")]
    Edit(EditCourseArgs),
    /// Move a course to a semester slot
    #[command(alias = "m")]
    Move(MoveCourseArgs),
    /// Remove a course from the plan
    #[command(alias = "d")]
    Delete(CourseIdArgs),
    /// Replace a placeholder with a catalog course
    #[command(alias = "r")]
    Replace(ReplacePlaceholderArgs),
    /// Show a course with its requisites
    #[command(alias = "s")]
    Show(CourseIdArgs),
}

/// Command-line representation of requisite kinds
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum RequisiteKindArg {
    /// Taken in an earlier semester
    Pre,
    /// Taken in the same semester
    Co,
    /// Only needs to be in the plan
    Unspecified,
}

impl From<RequisiteKindArg> for RequisiteKind {
    fn from(val: RequisiteKindArg) -> Self {
        match val {
            RequisiteKindArg::Pre => RequisiteKind::Pre,
            RequisiteKindArg::Co => RequisiteKind::Co,
            RequisiteKindArg::Unspecified => RequisiteKind::Unspecified,
        }
    }
}

// ============================================================================
// Semester, catalog and settings commands
// ============================================================================

/// Show unit loads
#[derive(Args)]
pub struct LoadArgs {
    #[arg(help = "Zero-based semester index; all semesters when omitted")]
    pub semester: Option<u32>,
}

#[derive(Subcommand)]
pub enum SemesterCommands {
    /// Append an empty semester
    #[command(alias = "a")]
    Add,
    /// Remove the last semester, which must be empty
    #[command(alias = "r")]
    Remove,
    /// Show unit loads
    #[command(alias = "l")]
    Load(LoadArgs),
}

/// Search the course catalog
#[derive(Args)]
pub struct SearchArgs {
    #[arg(help = "Text matched against course codes and titles")]
    pub query: String,
}

impl From<SearchArgs> for SearchCatalog {
    fn from(val: SearchArgs) -> Self {
        SearchCatalog { query: val.query }
    }
}

/// List the curricula of a degree program
#[derive(Args)]
pub struct CurriculaArgs {
    pub program_id: u64,
}

impl From<CurriculaArgs> for ListCurricula {
    fn from(val: CurriculaArgs) -> Self {
        ListCurricula {
            program_id: val.program_id,
        }
    }
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// Search courses by code or title
    #[command(alias = "s")]
    Search(SearchArgs),
    /// List degree programs
    Programs,
    /// List the curricula of a degree program
    Curricula(CurriculaArgs),
}

/// Change display settings
#[derive(Args)]
pub struct SetSettingsArgs {
    #[arg(long, value_name = "BOOL")]
    pub show_arrows: Option<bool>,
    #[arg(long, value_name = "BOOL")]
    pub animate: Option<bool>,
    #[arg(long, value_name = "BOOL")]
    pub show_select: Option<bool>,
    #[arg(long, value_name = "BOOL", help = "Hide semester load warnings")]
    pub ignore_units: Option<bool>,
    #[arg(long, value_name = "BOOL", help = "Hide requisite warnings")]
    pub ignore_reqs: Option<bool>,
    #[arg(long, value_name = "BOOL", help = "Hide course offering warnings")]
    pub ignore_offer: Option<bool>,
}

impl From<SetSettingsArgs> for UpdateSettings {
    fn from(val: SetSettingsArgs) -> Self {
        UpdateSettings {
            show_arrows: val.show_arrows,
            animate: val.animate,
            show_select: val.show_select,
            ignore_units: val.ignore_units,
            ignore_reqs: val.ignore_reqs,
            ignore_offer: val.ignore_offer,
        }
    }
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show the current settings
    Show,
    /// Change one or more settings
    Set(SetSettingsArgs),
}

// ============================================================================
// Handler
// ============================================================================

/// Runs commands against one planner session.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Writes pending changes before the process exits.
    pub async fn shutdown(self) {
        self.planner.shutdown().await;
    }

    /// Shows the plan board, or how to start one when there is no plan.
    pub fn overview(&self) -> Result<()> {
        if self.planner.has_plan() {
            return self.show_plan();
        }
        let status = OperationStatus::failure("No plan yet")
            .with_detail("Start one with `curricula plan new <PROGRAM_ID> <CURRICULUM> --year <YEAR>`");
        self.renderer.render(&status.to_string())?;
        self.renderer
            .render(&Programs(self.planner.programs()).to_string())
    }

    pub fn handle_plan_command(&mut self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::New(args) => {
                let plan = self
                    .planner
                    .instantiate_plan(&args.into())
                    .context("Failed to create plan")?;
                self.renderer
                    .render(&CreateResult::new(plan.clone()).to_string())
            }
            PlanCommands::Show => self.show_plan(),
            PlanCommands::Delete => {
                let plan = self.planner.delete_plan().context("Failed to delete plan")?;
                self.renderer.render(&DeleteResult::new(plan).to_string())
            }
            PlanCommands::Report => {
                let plan = self.planner.plan()?;
                self.renderer.render(&PlanReport(plan).to_string())
            }
            PlanCommands::Units => {
                let plan = self.planner.plan()?;
                let loads = SemesterLoads {
                    start_year: plan.year,
                    loads: self.planner.semester_loads()?,
                };
                let units = self.planner.curriculum_units()?;
                self.renderer.render(&format!("{loads}\n{units}\n"))
            }
        }
    }

    pub fn handle_course_command(&mut self, command: CourseCommands) -> Result<()> {
        let output = match command {
            CourseCommands::Add(args) => {
                let course = self
                    .planner
                    .add_course(&args.into())
                    .context("Failed to add course")?;
                CreateResult::new(course).to_string()
            }
            CourseCommands::Placeholder(args) => {
                let course = self
                    .planner
                    .add_placeholder(&args.into())
                    .context("Failed to add placeholder")?;
                CreateResult::new(course).to_string()
            }
            CourseCommands::Create(args) => {
                let course = self
                    .planner
                    .create_custom_course(&args.into())
                    .context("Failed to create course")?;
                CreateResult::new(course).to_string()
            }
            CourseCommands::Edit(args) => {
                let params: EditCourse = args.into();
                let changes = edit_changes(&params);
                let course = self
                    .planner
                    .edit_course(&params)
                    .context("Failed to edit course")?;
                UpdateResult::with_changes(course, changes).to_string()
            }
            CourseCommands::Move(args) => {
                let course = self
                    .planner
                    .move_course(&args.into())
                    .context("Failed to move course")?;
                let change = format!(
                    "Moved to semester {}, position {}",
                    course.semester, course.position
                );
                UpdateResult::with_changes(course, vec![change]).to_string()
            }
            CourseCommands::Delete(args) => {
                let course = self
                    .planner
                    .delete_course(&args.into())
                    .context("Failed to delete course")?;
                DeleteResult::new(course).to_string()
            }
            CourseCommands::Replace(args) => {
                let params: ReplacePlaceholder = args.into();
                let course = self
                    .planner
                    .replace_placeholder(&params)
                    .context("Failed to replace placeholder")?;
                let change = format!("Replaced placeholder {}", params.id);
                UpdateResult::with_changes(course, vec![change]).to_string()
            }
            CourseCommands::Show(args) => self.planner.course(&args.into())?.to_string(),
        };
        self.renderer.render(&output)
    }

    pub fn handle_semester_command(&mut self, command: SemesterCommands) -> Result<()> {
        let output = match command {
            SemesterCommands::Add => {
                let sems = self.planner.add_semester().context("Failed to add semester")?;
                OperationStatus::success(format!("Added semester {}", sems - 1))
                    .with_detail(format!("The plan now has {sems} semesters"))
                    .to_string()
            }
            SemesterCommands::Remove => {
                let sems = self
                    .planner
                    .remove_semester()
                    .context("Failed to remove semester")?;
                OperationStatus::success(format!("Removed semester {sems}"))
                    .with_detail(format!("The plan now has {sems} semesters"))
                    .to_string()
            }
            SemesterCommands::Load(LoadArgs { semester: Some(semester) }) => {
                let load = self.planner.semester_load(&Semester { semester })?;
                let label = self.planner.plan()?.semester_label(semester);
                format!("## {label}\n\n{load}\n")
            }
            SemesterCommands::Load(LoadArgs { semester: None }) => SemesterLoads {
                start_year: self.planner.plan()?.year,
                loads: self.planner.semester_loads()?,
            }
            .to_string(),
        };
        self.renderer.render(&output)
    }

    pub fn handle_catalog_command(&self, command: CatalogCommands) -> Result<()> {
        let output = match command {
            CatalogCommands::Search(args) => {
                CatalogCourses(self.planner.search_catalog(&args.into())).to_string()
            }
            CatalogCommands::Programs => Programs(self.planner.programs()).to_string(),
            CatalogCommands::Curricula(args) => {
                Curricula(self.planner.curricula(&args.into())?).to_string()
            }
        };
        self.renderer.render(&output)
    }

    pub fn handle_settings_command(&mut self, command: SettingsCommands) -> Result<()> {
        let output = match command {
            SettingsCommands::Show => self.planner.settings().to_string(),
            SettingsCommands::Set(args) => {
                let params: UpdateSettings = args.into();
                let changes = settings_changes(&params);
                let settings = self.planner.update_settings(&params);
                UpdateResult::with_changes(settings, changes).to_string()
            }
        };
        self.renderer.render(&output)
    }

    fn show_plan(&self) -> Result<()> {
        let board = PlanBoard::new(self.planner.plan()?, self.planner.settings())
            .with_saved_at(self.planner.saved_at());
        self.renderer.render(&board.to_string())
    }
}

fn edit_changes(params: &EditCourse) -> Vec<String> {
    let mut changes = Vec::new();
    if let Some(code) = &params.code {
        changes.push(format!("Code set to {code}"));
    }
    if let Some(title) = &params.title {
        changes.push(format!("Title set to {title}"));
    }
    if params.description.is_some() {
        changes.push("Description updated".to_string());
    }
    if let Some(units) = params.units {
        changes.push(format!("Units set to {units}"));
    }
    if let Some(semester) = params.semester {
        changes.push(format!("Moved to semester {semester}"));
    }
    match &params.requisites {
        Some(ids) if ids.is_empty() => changes.push("Custom requisite removed".to_string()),
        Some(ids) => {
            let ids: Vec<String> = ids.iter().map(u64::to_string).collect();
            changes.push(format!("Custom requisite set to {}", ids.join(", ")));
        }
        None => {}
    }
    if let Some(kind) = params.requisite_kind {
        changes.push(format!("Requisite kind set to {}", kind.as_str()));
    }
    changes
}

fn settings_changes(params: &UpdateSettings) -> Vec<String> {
    [
        ("show_arrows", params.show_arrows),
        ("animate", params.animate),
        ("show_select", params.show_select),
        ("ignore_units", params.ignore_units),
        ("ignore_reqs", params.ignore_reqs),
        ("ignore_offer", params.ignore_offer),
    ]
    .into_iter()
    .filter_map(|(name, value)| value.map(|value| format!("{name} set to {value}")))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_changes_lists_given_fields() {
        let params = EditCourse {
            id: 3,
            title: Some("Data Structures".to_string()),
            units: Some(4.0),
            ..EditCourse::default()
        };
        assert_eq!(
            edit_changes(&params),
            vec!["Title set to Data Structures", "Units set to 4"]
        );
    }

    #[test]
    fn test_edit_changes_lists_requisites() {
        let params = EditCourse {
            id: 40,
            requisites: Some(vec![109, 110]),
            ..EditCourse::default()
        };
        assert_eq!(edit_changes(&params), vec!["Custom requisite set to 109, 110"]);

        let params = EditCourse {
            id: 40,
            requisites: Some(Vec::new()),
            ..EditCourse::default()
        };
        assert_eq!(edit_changes(&params), vec!["Custom requisite removed"]);
    }

    #[test]
    fn test_settings_changes() {
        let params = UpdateSettings {
            ignore_offer: Some(false),
            ..UpdateSettings::default()
        };
        assert_eq!(settings_changes(&params), vec!["ignore_offer set to false"]);
    }

    #[test]
    fn test_requisite_kind_conversion() {
        assert_eq!(RequisiteKind::from(RequisiteKindArg::Co), RequisiteKind::Co);
        assert_eq!(
            RequisiteKind::from(RequisiteKindArg::Unspecified),
            RequisiteKind::Unspecified
        );
    }
}
