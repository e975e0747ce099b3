//! Project configuration read from `vaporize.toml`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, NamePolicy, Result};

/// File name of the optional project configuration.
pub const CONFIG_FILE: &str = "vaporize.toml";

/// Root of `vaporize.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Where generated files go, relative to the project root
    #[serde(default)]
    pub paths: PathsConfig,

    /// Model naming policy
    #[serde(default)]
    pub naming: NamePolicy,
}

/// The `[paths]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    #[serde(default = "default_models")]
    pub models: PathBuf,

    /// File receiving `preparations.append(...)` for each new model
    #[serde(default = "default_registration")]
    pub registration: PathBuf,

    #[serde(default = "default_controllers")]
    pub controllers: PathBuf,

    #[serde(default = "default_views")]
    pub views: PathBuf,

    /// Directory of user templates replacing the built-in ones
    pub templates: Option<PathBuf>,
}

fn default_models() -> PathBuf {
    PathBuf::from("Sources/App/Models")
}

fn default_registration() -> PathBuf {
    PathBuf::from("Sources/App/Config+Setup.swift")
}

fn default_controllers() -> PathBuf {
    PathBuf::from("Sources/App/Controllers")
}

fn default_views() -> PathBuf {
    PathBuf::from("Resources/Views")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            models: default_models(),
            registration: default_registration(),
            controllers: default_controllers(),
            views: default_views(),
            templates: None,
        }
    }
}

impl ProjectConfig {
    /// Parse a config from a string with a filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e, content, filename))
    }

    /// Load `vaporize.toml` from `root`, falling back to defaults when absent
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let config = Self::from_str_with_filename(&content, &path.display().to_string())?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{EntityName, ModelCase};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ProjectConfig::from_str_with_filename("", CONFIG_FILE).unwrap();
        assert_eq!(config, ProjectConfig::default());
        assert_eq!(config.paths.models, PathBuf::from("Sources/App/Models"));
    }

    #[test]
    fn test_partial_config() {
        let config = ProjectConfig::from_str_with_filename(
            r#"
            [paths]
            models = "Sources/AppLogic/Models"
            templates = "templates"

            [naming]
            model = "capitalize"
            entity = "plural"
            "#,
            CONFIG_FILE,
        )
        .unwrap();

        assert_eq!(config.paths.models, PathBuf::from("Sources/AppLogic/Models"));
        assert_eq!(config.paths.templates, Some(PathBuf::from("templates")));
        assert_eq!(config.paths.views, PathBuf::from("Resources/Views"));
        assert_eq!(config.naming.model, ModelCase::Capitalize);
        assert_eq!(config.naming.entity, EntityName::Plural);
    }

    #[test]
    fn test_unknown_key_is_reported_with_span() {
        let err = ProjectConfig::from_str_with_filename("[paths]\nmodel = \"x\"\n", CONFIG_FILE)
            .unwrap_err();
        match err.as_ref() {
            Error::Config { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let config = ProjectConfig::load(temp.path()).unwrap();
        assert_eq!(config, ProjectConfig::default());
    }

    #[test]
    fn test_load_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE),
            "[paths]\nviews = \"Views\"\n",
        )
        .unwrap();

        let config = ProjectConfig::load(temp.path()).unwrap();
        assert_eq!(config.paths.views, PathBuf::from("Views"));
    }
}
