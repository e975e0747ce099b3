use std::path::{Path, PathBuf};

use crate::{Error, NamePolicy, ProjectConfig, Result};

/// File whose presence marks the root of a Vapor project.
pub const PROJECT_MARKER: &str = "Package.swift";

/// A Vapor project on disk plus its vaporize configuration.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    config: ProjectConfig,
}

impl Project {
    /// Open the project rooted at `root`.
    ///
    /// Fails with [`Error::NotAProject`] when `root` has no `Package.swift`.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.join(PROJECT_MARKER).is_file() {
            return Err(Box::new(Error::NotAProject { path: root }));
        }
        let config = ProjectConfig::load(&root)?;
        Ok(Self { root, config })
    }

    /// Use `dir` for templates instead of the configured directory.
    pub fn with_templates(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.paths.templates = Some(dir.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn naming(&self) -> &NamePolicy {
        &self.config.naming
    }

    pub fn models_dir(&self) -> PathBuf {
        self.resolve(&self.config.paths.models)
    }

    pub fn registration_file(&self) -> PathBuf {
        self.resolve(&self.config.paths.registration)
    }

    pub fn controllers_dir(&self) -> PathBuf {
        self.resolve(&self.config.paths.controllers)
    }

    pub fn views_dir(&self) -> PathBuf {
        self.resolve(&self.config.paths.views)
    }

    /// User template directory, if one is configured.
    pub fn templates_dir(&self) -> Option<PathBuf> {
        self.config.paths.templates.as_deref().map(|dir| self.resolve(dir))
    }

    /// Paths are relative to the project root; `~/` expands to `$HOME`.
    fn resolve(&self, path: &Path) -> PathBuf {
        match (path.strip_prefix("~"), std::env::var_os("HOME")) {
            (Ok(rest), Some(home)) => PathBuf::from(home).join(rest),
            _ => self.root.join(path),
        }
    }
}
