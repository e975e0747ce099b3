use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use vaporize_manifest::parse;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ModelCommand {
    /// Model name followed by fields, e.g. `User name:string age:int!`.
    /// Also accepts `--node=true` and `--viewdata=true`. Command and global
    /// options may follow the fields.
    #[arg(
        value_name = "NAME FIELD",
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub tokens: Vec<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite the model file if it already exists
    #[arg(long)]
    pub force: bool,
}

impl ModelCommand {
    pub fn run(&self, project: &ProjectArgs) -> Result<()> {
        let (tokens, switches) = split_switches(&self.tokens);
        let project = ProjectArgs {
            project: switches.project.unwrap_or_else(|| project.project.clone()),
            templates: switches.templates.or_else(|| project.templates.clone()),
        };

        // Parse before touching the filesystem so bad tokens fail fast.
        let spec = parse(&tokens).unwrap_or_exit();
        let project = project.open();
        let spec = spec.with_policy(project.naming());

        let report = ops::model(
            &project,
            &spec,
            ops::model::ModelOptions {
                dry_run: self.dry_run || switches.dry_run,
                force: self.force || switches.force,
            },
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Whether `-v`/`--verbose` was given after the model name.
    pub fn verbose(&self) -> bool {
        split_switches(&self.tokens).1.verbose
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Switches {
    dry_run: bool,
    force: bool,
    verbose: bool,
    project: Option<PathBuf>,
    templates: Option<PathBuf>,
}

/// Pull command and global options out of the trailing tokens, where clap
/// leaves them when they follow the model name.
fn split_switches(tokens: &[String]) -> (Vec<&str>, Switches) {
    let mut switches = Switches::default();
    let mut rest = Vec::with_capacity(tokens.len());
    let mut tokens = tokens.iter().map(String::as_str).peekable();

    while let Some(token) = tokens.next() {
        match token {
            "--dry-run" => switches.dry_run = true,
            "--force" => switches.force = true,
            "-v" | "--verbose" => switches.verbose = true,
            "-p" | "--project" if tokens.peek().is_some() => {
                switches.project = tokens.next().map(PathBuf::from);
            }
            "--templates" if tokens.peek().is_some() => {
                switches.templates = tokens.next().map(PathBuf::from);
            }
            other => {
                if let Some(dir) = other.strip_prefix("--project=") {
                    switches.project = Some(PathBuf::from(dir));
                } else if let Some(dir) = other.strip_prefix("--templates=") {
                    switches.templates = Some(PathBuf::from(dir));
                } else {
                    rest.push(other);
                }
            }
        }
    }
    (rest, switches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_switches() {
        let tokens: Vec<String> = ["User", "name:string", "--force", "--node=true"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let (rest, switches) = split_switches(&tokens);
        assert_eq!(rest, vec!["User", "name:string", "--node=true"]);
        assert_eq!(
            switches,
            Switches {
                force: true,
                ..Switches::default()
            }
        );
    }

    #[test]
    fn test_global_options_after_fields() {
        let tokens: Vec<String> = [
            "User",
            "name:string",
            "-v",
            "-p",
            "../App",
            "--templates=tpl",
            "age:int!",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let (rest, switches) = split_switches(&tokens);
        assert_eq!(rest, vec!["User", "name:string", "age:int!"]);
        assert_eq!(
            switches,
            Switches {
                verbose: true,
                project: Some(PathBuf::from("../App")),
                templates: Some(PathBuf::from("tpl")),
                ..Switches::default()
            }
        );
    }

    #[test]
    fn test_option_without_value_stays_a_token() {
        let tokens: Vec<String> = ["User", "name:string", "--project"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let (rest, switches) = split_switches(&tokens);
        assert_eq!(rest, vec!["User", "name:string", "--project"]);
        assert_eq!(switches.project, None);
    }
}
