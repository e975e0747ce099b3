//! View operation - generate a Leaf view.

use vaporize_codegen::{Result, ViewGenerator};
use vaporize_manifest::Project;

use super::written;
use crate::reports::{GenerateReport, GenerationResult, PreviewResult};

/// Options for the view operation.
pub struct ViewOptions<'a> {
    pub name: &'a str,
    pub title: &'a str,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the view operation.
pub fn view(project: &Project, opts: ViewOptions) -> Result<GenerateReport> {
    let generator = ViewGenerator::new(project, opts.name, opts.title);

    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewResult {
            files: generator.preview()?,
        })
    } else {
        GenerationResult::Written(written(project, &generator.generate()?, &[]))
    };

    Ok(GenerateReport {
        subject: format!("view {}", opts.name),
        warnings: Vec::new(),
        result,
    })
}
