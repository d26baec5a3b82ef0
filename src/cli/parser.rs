use crate::config::Config;
use crate::export::ExportFormat;
use crate::models::preferences::{NotificationTiming, Switch, Theme};
use crate::models::{SubType, SubjectColor};
use crate::utils::path::expand_tilde;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rPlanner
/// CLI application to track school assignments with SQLite
#[derive(Parser)]
#[command(
    name = "rplanner",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple assignment planner CLI: subjects, due dates and a month/week calendar, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Config file in use: `--config` or the platform default.
    pub fn config_path(&self) -> PathBuf {
        match &self.config {
            Some(p) => expand_tilde(p),
            None => Config::config_file(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show or change preferences (theme, notifications, completed style)
    Settings {
        #[arg(long, value_enum)]
        theme: Option<Theme>,

        #[arg(long, value_enum, help = "Enable or disable reminders")]
        notifications: Option<Switch>,

        #[arg(long, value_enum, help = "When reminders fire")]
        timing: Option<NotificationTiming>,

        #[arg(long = "notify-class-work", value_enum)]
        notify_class_work: Option<Switch>,

        #[arg(long = "notify-homework", value_enum)]
        notify_homework: Option<Switch>,

        #[arg(long = "notify-assessments", value_enum, help = "Reminders for quizzes and tests")]
        notify_assessments: Option<Switch>,

        #[arg(long = "completed-green", value_enum, help = "Show completed assignments in green")]
        completed_green: Option<Switch>,

        #[arg(long = "completed-strike", value_enum, help = "Strike through completed assignments")]
        completed_strike: Option<Switch>,

        #[arg(long = "month-preview", help = "Assignments shown per day in month view")]
        month_preview: Option<usize>,

        #[arg(long = "due-time", help = "Default due time for new assignments (HH:MM)")]
        default_due_time: Option<String>,
    },

    /// Manage subjects and their colors
    Subject {
        #[command(subcommand)]
        action: SubjectAction,
    },

    /// Add a new assignment
    Add {
        /// Assignment name
        name: String,

        #[arg(long, short = 's', help = "Subject (must exist, see `subject list`)")]
        subject: String,

        #[arg(long, short = 'd', help = "Due date (YYYY-MM-DD), default today")]
        due: Option<String>,

        #[arg(long = "at", help = "Due time (HH:MM), default from configuration")]
        at: Option<String>,

        #[arg(long = "type", short = 't', value_enum, default_value = "class-work")]
        sub_type: SubType,

        #[arg(long, short = 'n', default_value = "")]
        notes: String,
    },

    /// Edit an existing assignment
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, short = 's')]
        subject: Option<String>,

        #[arg(long, short = 'd', help = "New due date (YYYY-MM-DD), keeps the time")]
        due: Option<String>,

        #[arg(long = "at", help = "New due time (HH:MM), keeps the date")]
        at: Option<String>,

        #[arg(long = "type", short = 't', value_enum)]
        sub_type: Option<SubType>,

        #[arg(long, short = 'n')]
        notes: Option<String>,
    },

    /// Toggle the completion flag of an assignment
    Done { id: i64 },

    /// Delete an assignment by ID
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List assignments grouped by subject and type
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long, help = "Hide completed assignments")]
        pending: bool,
    },

    /// Show the month (default) or week calendar
    Calendar {
        #[arg(long, short = 'd', help = "Reference date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long, short = 'w', help = "Show a single week")]
        week: bool,

        #[arg(
            long,
            short = 'o',
            allow_hyphen_values = true,
            default_value_t = 0,
            help = "Move by N months (or weeks with --week); negative goes back"
        )]
        offset: i32,
    },

    /// Today's assignments and quick stats
    Dashboard {
        #[arg(long, short = 'd', help = "Day to show (YYYY-MM-DD), default today")]
        date: Option<String>,
    },

    /// List upcoming reminders according to the notification settings
    Reminders {
        #[arg(long, help = "Reference instant (RFC3339), default now")]
        now: Option<String>,
    },

    /// Export assignments
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum SubjectAction {
    /// Add a subject or change its color
    Add {
        name: String,

        #[arg(long, short = 'c', value_enum, default_value = "blue")]
        color: SubjectColor,
    },

    /// Remove a subject (its assignments are kept)
    Del { name: String },

    /// List subjects and colors
    List,
}
