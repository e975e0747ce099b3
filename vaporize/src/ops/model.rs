//! Model operation - generate a Fluent model and register it.

use std::path::Path;

use vaporize_codegen::{ModelGenerator, Registration, Result, registration};
use vaporize_manifest::{ModelSpec, Project};

use super::{relative, written};
use crate::reports::{GenerateReport, GenerationResult, PreviewResult};

/// Options for the model operation.
pub struct ModelOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to overwrite an existing model file.
    pub force: bool,
}

/// Execute the model operation.
pub fn model(project: &Project, spec: &ModelSpec, opts: ModelOptions) -> Result<GenerateReport> {
    let warnings = spec
        .duplicate_names()
        .into_iter()
        .map(|name| {
            tracing::debug!(field = name, "duplicate field name");
            format!("field '{name}' is declared more than once")
        })
        .collect();

    let generator = ModelGenerator::new(project, spec).force(opts.force);

    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewResult {
            files: generator.preview()?,
        })
    } else {
        let plan = generator.plan()?;
        let existing = plan
            .files()
            .map(|file| file.path())
            .filter(|path| path.exists())
            .map(Path::to_path_buf)
            .collect::<Vec<_>>();

        let result = plan.commit()?;
        let mut summary = written(project, &result, &existing);
        match &result.registration {
            Some(Registration::Appended(path)) => {
                summary.registered = Some((
                    registration::statement(spec.name()),
                    relative(project, path),
                ));
            }
            Some(Registration::AlreadyPresent(path)) => {
                summary.already_registered = Some(relative(project, path));
            }
            None => {}
        }
        GenerationResult::Written(summary)
    };

    Ok(GenerateReport {
        subject: format!("model {}", spec.name()),
        warnings,
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use vaporize_manifest::parse;

    use super::*;
    use crate::reports::WrittenFile;

    fn vapor_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Package.swift"), "").unwrap();
        let setup = temp.path().join("Sources/App/Config+Setup.swift");
        fs::create_dir_all(setup.parent().unwrap()).unwrap();
        fs::write(&setup, "extension Config {\n    func setup() {\n    }\n}\n").unwrap();
        temp
    }

    #[test]
    fn test_model_report_classifies_files() {
        let temp = vapor_project();
        let project = Project::open(temp.path()).unwrap();
        let spec = parse(&["User", "name:string", "name:string"]).unwrap();

        let report = model(
            &project,
            &spec,
            ModelOptions {
                dry_run: false,
                force: false,
            },
        )
        .unwrap();

        assert_eq!(report.subject, "model User");
        assert_eq!(report.warnings, vec!["field 'name' is declared more than once"]);
        let GenerationResult::Written(written) = report.result else {
            panic!("expected written result");
        };
        assert_eq!(
            written.files,
            vec![
                WrittenFile::Created("Sources/App/Models/User.swift".to_string()),
                WrittenFile::Updated("Sources/App/Config+Setup.swift".to_string()),
            ]
        );
        assert_eq!(
            written.registered,
            Some((
                "preparations.append(User.self)".to_string(),
                "Sources/App/Config+Setup.swift".to_string()
            ))
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = vapor_project();
        let project = Project::open(temp.path()).unwrap();
        let spec = parse(&["User", "name:string"]).unwrap();

        let report = model(
            &project,
            &spec,
            ModelOptions {
                dry_run: true,
                force: false,
            },
        )
        .unwrap();

        assert!(matches!(report.result, GenerationResult::Preview(ref p) if p.files.len() == 2));
        assert!(!temp.path().join("Sources/App/Models").exists());
    }
}
