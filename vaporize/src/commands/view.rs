use clap::Args;
use eyre::Result;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ViewCommand {
    /// View file name without extension, e.g. `index`
    pub name: String,

    /// Page title substituted into the view
    pub title: String,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl ViewCommand {
    pub fn run(&self, project: &ProjectArgs) -> Result<()> {
        let project = project.open();
        let report = ops::view(
            &project,
            ops::view::ViewOptions {
                name: &self.name,
                title: &self.title,
                dry_run: self.dry_run,
            },
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
