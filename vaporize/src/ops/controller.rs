//! Controller operation - generate a controller stub.

use vaporize_codegen::{ControllerGenerator, Result, files::ControllerKind};
use vaporize_manifest::Project;

use super::written;
use crate::reports::{GenerateReport, GenerationResult, PreviewResult};

/// Options for the controller operation.
pub struct ControllerOptions<'a> {
    pub name: &'a str,
    pub kind: ControllerKind,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the controller operation.
pub fn controller(project: &Project, opts: ControllerOptions) -> Result<GenerateReport> {
    let generator = ControllerGenerator::new(project, opts.name, opts.kind);

    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewResult {
            files: generator.preview()?,
        })
    } else {
        GenerationResult::Written(written(project, &generator.generate()?, &[]))
    };

    Ok(GenerateReport {
        subject: format!("{} controller {}", opts.kind, opts.name),
        warnings: Vec::new(),
        result,
    })
}
