use crate::filter::{FilterCriteria, Selection, parse_date_selection};
use crate::model::{Category, Status};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "nexus")]
#[command(
    author,
    version,
    about = "A terminal roadmap board with filtering and AI-assisted feature suggestions"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .nexus.toml by default)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// JSON or YAML file with the initial roadmap items (overrides config)
    #[arg(long, global = true)]
    pub seed: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write JSON logs to this file (daily rotation)
    #[arg(long, global = true, env = "NEXUS_LOG_FILE")]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .nexus.toml in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show roadmap items as a table
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show roadmap items as a kanban board grouped by status
    #[command(visible_alias = "kanban")]
    Board {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the distinct target dates available for filtering
    Dates {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask the AI assistant for feature ideas
    Suggest {
        /// Describe your product or current focus
        context: String,

        /// Accept the suggestion at this position (1-based, repeatable)
        #[arg(short, long)]
        accept: Vec<usize>,

        /// Accept every suggestion
        #[arg(long, conflicts_with = "accept")]
        accept_all: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open the interactive TUI
    Tui,
}

/// Filter flags shared by `list` and `board`.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Case-insensitive text matched against title and description
    #[arg(short = 'q', long, default_value = "")]
    pub search: String,

    /// Only show this category
    #[arg(short, long, value_enum, default_value = "all")]
    pub category: CategoryArg,

    /// Only show this status
    #[arg(short, long, value_enum, default_value = "all")]
    pub status: StatusArg,

    /// Only show this exact target date (e.g. "Q1 2024")
    #[arg(short, long, default_value = "ALL")]
    pub date: String,
}

impl From<FilterArgs> for FilterCriteria {
    fn from(args: FilterArgs) -> Self {
        FilterCriteria {
            search: args.search,
            category: args.category.into(),
            status: args.status.into(),
            date: parse_date_selection(&args.date),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StatusArg {
    All,
    Backlog,
    Planned,
    InProgress,
    Released,
}

impl From<StatusArg> for Selection<Status> {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::All => Selection::All,
            StatusArg::Backlog => Selection::Only(Status::Backlog),
            StatusArg::Planned => Selection::Only(Status::Planned),
            StatusArg::InProgress => Selection::Only(Status::InProgress),
            StatusArg::Released => Selection::Only(Status::Released),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CategoryArg {
    All,
    #[value(alias = "core")]
    CorePlatform,
    Integrations,
    #[value(alias = "uiux")]
    UiUx,
    Security,
    Analytics,
}

impl From<CategoryArg> for Selection<Category> {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::All => Selection::All,
            CategoryArg::CorePlatform => Selection::Only(Category::CorePlatform),
            CategoryArg::Integrations => Selection::Only(Category::Integrations),
            CategoryArg::UiUx => Selection::Only(Category::UiUx),
            CategoryArg::Security => Selection::Only(Category::Security),
            CategoryArg::Analytics => Selection::Only(Category::Analytics),
        }
    }
}
