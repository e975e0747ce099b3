//! Report data for the generating commands.

use super::output::{Output, Report};

/// Report data from one generation request.
#[derive(Debug)]
pub struct GenerateReport {
    /// What was generated, e.g. "model User".
    pub subject: String,

    /// Non-fatal problems with the request.
    pub warnings: Vec<String>,

    /// Files written or previewed.
    pub result: GenerationResult,
}

/// Result of a generation request.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug, Default)]
pub struct WrittenResult {
    pub files: Vec<WrittenFile>,
    /// Registration statement and the file it went into.
    pub registered: Option<(String, String)>,
    /// Registration file that already held the statement.
    pub already_registered: Option<String>,
}

/// One file touched by a request, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WrittenFile {
    Created(String),
    Updated(String),
    Kept(String),
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    pub files: Vec<vaporize_codegen::PreviewFile>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.section(&format!("Generated {}", self.subject));
        for file in &written.files {
            match file {
                WrittenFile::Created(path) => out.added_item(path),
                WrittenFile::Updated(path) => out.changed_item(path),
                WrittenFile::Kept(path) => out.list_item(&format!("{path} (exists, kept)")),
            }
        }

        if let Some((statement, path)) = &written.registered {
            out.newline();
            out.key_value("Registered", &format!("{statement} in {path}"));
        }
        if let Some(path) = &written.already_registered {
            out.newline();
            out.key_value("Already registered", path);
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} file(s) would be written for {}",
            preview.files.len(),
            self.subject
        ));
    }
}
