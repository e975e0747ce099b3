use clap::Args;
use dialoguer::{Select, theme::ColorfulTheme};
use eyre::{Context, Result};
use vaporize_codegen::files::ControllerKind;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ControllerCommand {
    /// Controller type name, e.g. `UserController`
    pub name: String,

    /// Controllers folder: `view` (Views/) or `api` (API/). Prompts when omitted.
    #[arg(short, long)]
    pub kind: Option<ControllerKind>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl ControllerCommand {
    pub fn run(&self, project: &ProjectArgs) -> Result<()> {
        let project = project.open();
        let kind = match self.kind {
            Some(kind) => kind,
            None => Self::prompt_kind()?,
        };

        let report = ops::controller(
            &project,
            ops::controller::ControllerOptions {
                name: &self.name,
                kind,
                dry_run: self.dry_run,
            },
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn prompt_kind() -> Result<ControllerKind> {
        let folders = ["Views", "API"];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Create in Views folder or API folder?")
            .items(&folders)
            .default(0)
            .interact()
            .wrap_err("Failed to get controller folder selection")?;

        Ok(match selection {
            0 => ControllerKind::View,
            _ => ControllerKind::Api,
        })
    }
}
