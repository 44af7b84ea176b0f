//! Command-line argument definitions using clap's derive API.
//!
//! Argument types stay on the CLI side; `From` conversions turn them into
//! core types before anything reaches the assistant.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use waypoint_core::{Language, ModelTier};

/// Turn goals into short, motivating step-by-step plans.
///
/// Submitting a goal asks a generative model for a polished description, a
/// motivational insight and three to five concrete steps. Any step can then
/// be expanded into a detailed guide. Every plan is kept in a local history
/// that can be exported and imported as JSON.
#[derive(Parser)]
#[command(version, about, name = "waypoint")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waypoint/waypoint.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, the history is listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Turn a goal into a plan
    #[command(alias = "g")]
    Goal(GoalArgs),
    /// Get a detailed guide for one step of a plan
    #[command(alias = "s")]
    Step(StepArgs),
    /// Browse, export and import past plans
    #[command(alias = "h")]
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Show or change model, language and persona
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

impl Commands {
    /// Whether the command talks to the generative model.
    pub fn needs_model(&self) -> bool {
        matches!(self, Commands::Goal(_) | Commands::Step(_))
    }
}

/// Submit a goal
#[derive(ClapArgs)]
pub struct GoalArgs {
    /// The goal, in your own words
    #[arg(help = "The goal to plan, e.g. \"Learn to play the piano\"")]
    pub goal: String,
}

/// Solve a step of a plan
#[derive(ClapArgs)]
pub struct StepArgs {
    /// Step number, starting at 1
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub number: u64,

    /// History record the step belongs to. Defaults to the latest plan
    #[arg(short, long)]
    pub record: Option<String>,
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List past plans, most recent first
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a past plan with its solved steps
    #[command(alias = "s")]
    Show {
        /// ID of the history record
        id: String,
    },
    /// Write the whole history to a JSON file
    #[command(alias = "e")]
    Export {
        /// Output file. Defaults to goal_crafter_history_<date>.json
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Add the records of an exported JSON file to the history
    #[command(alias = "i")]
    Import {
        /// File written by `history export`
        path: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show the current settings
    Show,
    /// Change one or more settings
    Set(SetSettingsArgs),
}

/// Settings to change; anything omitted keeps its current value
#[derive(ClapArgs)]
pub struct SetSettingsArgs {
    /// Model tier used for plans and step guides
    #[arg(short, long, value_enum)]
    pub model: Option<ModelArg>,

    /// Language every answer is written in
    #[arg(short, long, value_enum)]
    pub language: Option<LanguageArg>,

    /// Persona instructions added to every request (empty to clear)
    #[arg(short, long)]
    pub instructions: Option<String>,
}

impl SetSettingsArgs {
    pub fn is_empty(&self) -> bool {
        self.model.is_none() && self.language.is_none() && self.instructions.is_none()
    }
}

/// Command-line representation of the model tier
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ModelArg {
    /// Quick, inexpensive responses
    Fast,
    /// Slower, more thorough responses
    Complex,
}

impl From<ModelArg> for ModelTier {
    fn from(val: ModelArg) -> Self {
        match val {
            ModelArg::Fast => ModelTier::Fast,
            ModelArg::Complex => ModelTier::Complex,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
    English,
    Chinese,
    Japanese,
    Spanish,
    French,
}

impl From<LanguageArg> for Language {
    fn from(val: LanguageArg) -> Self {
        match val {
            LanguageArg::English => Language::English,
            LanguageArg::Chinese => Language::Chinese,
            LanguageArg::Japanese => Language::Japanese,
            LanguageArg::Spanish => Language::Spanish,
            LanguageArg::French => Language::French,
        }
    }
}
