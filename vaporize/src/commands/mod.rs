mod completions;
mod controller;
mod model;
mod view;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use controller::ControllerCommand;
use eyre::Result;
use model::ModelCommand;
use vaporize_manifest::Project;
use view::ViewCommand;

/// Extension trait for exiting on diagnostic errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for vaporize_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for vaporize_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "vaporize")]
#[command(version)]
#[command(about = "Scaffold Fluent models, controllers and views in a Vapor project")]
pub(crate) struct Cli {
    /// Log debug output to stderr (VAPORIZE_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    project: ProjectArgs,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// `--verbose` before the subcommand, or among the model tokens.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Commands::Model(cmd) => self.verbose || cmd.verbose(),
            _ => self.verbose,
        }
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Model(cmd) => cmd.run(&self.project),
            Commands::Controller(cmd) => cmd.run(&self.project),
            Commands::View(cmd) => cmd.run(&self.project),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

/// Options locating the project being scaffolded.
#[derive(Args)]
pub(crate) struct ProjectArgs {
    /// Root of the Vapor project (defaults to current directory)
    #[arg(short, long, global = true, default_value = ".")]
    pub project: PathBuf,

    /// Directory of templates replacing the built-in ones
    #[arg(long, global = true)]
    pub templates: Option<PathBuf>,
}

impl ProjectArgs {
    /// Open the project, exiting with a diagnostic when it is not a Vapor project.
    pub fn open(&self) -> Project {
        let project = Project::open(&self.project).unwrap_or_exit();
        match &self.templates {
            // Relative to the working directory, not the project root.
            Some(dir) => {
                project.with_templates(std::path::absolute(dir).unwrap_or_else(|_| dir.clone()))
            }
            None => project,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Fluent model and register its preparation
    Model(ModelCommand),

    /// Generate a controller stub
    Controller(ControllerCommand),

    /// Generate a Leaf view
    View(ViewCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
