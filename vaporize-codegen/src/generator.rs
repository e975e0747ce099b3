//! Planning and writing generated files for one request.
//!
//! Every generator reads what it needs (templates, the registration file)
//! while planning, without touching the project. Writing goes through a
//! single [`Transaction`], so a failure leaves no partial update behind.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use vaporize_core::{File, GeneratedFile, Transaction, WriteResult};
use vaporize_manifest::{ModelSpec, Project};

use crate::{
    Assembler, Error, Result, Template, TemplateKind,
    files::{ControllerFile, ControllerKind, ModelFile, ViewFile},
    registration::{self, Splice},
};

/// A file shown by `--dry-run`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Path relative to the project root.
    pub path: String,
    pub content: String,
}

/// What happened to the registration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// The preparation statement was appended.
    Appended(PathBuf),
    /// The model was already registered; the file is unchanged.
    AlreadyPresent(PathBuf),
}

impl Registration {
    pub fn path(&self) -> &Path {
        match self {
            Self::Appended(path) | Self::AlreadyPresent(path) => path,
        }
    }
}

/// Result of a committed generation request.
#[derive(Debug)]
pub struct GenerateResult {
    /// Files in write order with their outcome.
    pub files: Vec<(PathBuf, WriteResult)>,
    /// Set by model generation only.
    pub registration: Option<Registration>,
}

/// Files a model request would write.
#[derive(Debug)]
pub struct ModelPlan {
    pub model: File,
    pub registration: Registration,
    registration_file: Option<File>,
}

impl ModelPlan {
    /// Files that will be written, in order.
    pub fn files(&self) -> impl Iterator<Item = &File> {
        std::iter::once(&self.model).chain(self.registration_file.as_ref())
    }

    /// Write the model file and the registration change together.
    pub fn commit(self) -> Result<GenerateResult> {
        let mut transaction = Transaction::new().stage(self.model);
        if let Some(file) = self.registration_file {
            transaction = transaction.stage(file);
        }
        let files = transaction.commit().map_err(Error::write_failed)?;
        log_written(&files);
        Ok(GenerateResult {
            files,
            registration: Some(self.registration),
        })
    }
}

/// Generates a model file and registers its preparation.
pub struct ModelGenerator<'a> {
    project: &'a Project,
    spec: &'a ModelSpec,
    assembler: Assembler,
    force: bool,
}

impl<'a> ModelGenerator<'a> {
    pub fn new(project: &'a Project, spec: &'a ModelSpec) -> Self {
        Self {
            project,
            spec,
            assembler: Assembler::default(),
            force: false,
        }
    }

    pub fn assembler(mut self, assembler: Assembler) -> Self {
        self.assembler = assembler;
        self
    }

    /// Overwrite an existing model file instead of failing.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Render the model and splice the registration file, without writing.
    pub fn plan(&self) -> Result<ModelPlan> {
        let template =
            Template::resolve(self.project.templates_dir().as_deref(), TemplateKind::Model)?;
        let model = ModelFile::new(self.spec, template, &self.assembler)
            .to_file(&self.project.models_dir());

        if model.exists() && !self.force {
            return Err(Box::new(Error::ModelExists {
                path: model.path().to_path_buf(),
            }));
        }

        let target = self.project.registration_file();
        let content = read_target(&target)?;
        let statement = registration::statement(self.spec.name());

        let (registration, registration_file) =
            match registration::splice(&target, &content, &statement, self.assembler.policy().unit)? {
                Splice::Inserted(spliced) => (
                    Registration::Appended(target.clone()),
                    Some(File::new(&target, spliced)),
                ),
                Splice::Present => (Registration::AlreadyPresent(target), None),
            };

        tracing::debug!(
            model = %model.path().display(),
            registration = ?registration,
            "planned model generation"
        );

        Ok(ModelPlan {
            model,
            registration,
            registration_file,
        })
    }

    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        let plan = self.plan()?;
        Ok(plan
            .files()
            .map(|file| preview_file(self.project, file))
            .collect())
    }

    pub fn generate(&self) -> Result<GenerateResult> {
        self.plan()?.commit()
    }
}

/// Generates a controller stub.
pub struct ControllerGenerator<'a> {
    project: &'a Project,
    name: String,
    kind: ControllerKind,
}

impl<'a> ControllerGenerator<'a> {
    pub fn new(project: &'a Project, name: impl Into<String>, kind: ControllerKind) -> Self {
        Self {
            project,
            name: name.into(),
            kind,
        }
    }

    pub fn plan(&self) -> Result<File> {
        let template = Template::resolve(
            self.project.templates_dir().as_deref(),
            TemplateKind::Controller,
        )?;
        Ok(ControllerFile::new(&self.name, self.kind, template)
            .to_file(&self.project.controllers_dir()))
    }

    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        Ok(vec![preview_file(self.project, &self.plan()?)])
    }

    pub fn generate(&self) -> Result<GenerateResult> {
        commit(self.plan()?)
    }
}

/// Generates a Leaf view.
pub struct ViewGenerator<'a> {
    project: &'a Project,
    name: String,
    title: String,
}

impl<'a> ViewGenerator<'a> {
    pub fn new(project: &'a Project, name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            project,
            name: name.into(),
            title: title.into(),
        }
    }

    pub fn plan(&self) -> Result<File> {
        let template =
            Template::resolve(self.project.templates_dir().as_deref(), TemplateKind::View)?;
        Ok(ViewFile::new(&self.name, &self.title, template).to_file(&self.project.views_dir()))
    }

    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        Ok(vec![preview_file(self.project, &self.plan()?)])
    }

    pub fn generate(&self) -> Result<GenerateResult> {
        commit(self.plan()?)
    }
}

fn read_target(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(Box::new(Error::TargetNotFound {
                path: path.to_path_buf(),
            }))
        }
        Err(err) => Err(Error::read(path, err)),
    }
}

/// Write a single planned file.
pub fn commit(file: File) -> Result<GenerateResult> {
    let files = Transaction::new()
        .stage(file)
        .commit()
        .map_err(Error::write_failed)?;
    log_written(&files);
    Ok(GenerateResult {
        files,
        registration: None,
    })
}

fn log_written(files: &[(PathBuf, WriteResult)]) {
    for (path, result) in files {
        match result {
            WriteResult::Written => tracing::info!(path = %path.display(), "wrote file"),
            WriteResult::Skipped => tracing::info!(path = %path.display(), "kept existing file"),
        }
    }
}

fn preview_file(project: &Project, file: &File) -> PreviewFile {
    let path = file.path();
    let relative = path.strip_prefix(project.root()).unwrap_or(path);
    PreviewFile {
        path: relative.display().to_string(),
        content: file.content().to_string(),
    }
}
