//! Placeholder templates and the single-pass renderer.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use vaporize_core::line_ending;

use crate::{Error, FragmentBundle, Placeholder, Result};

/// Prefix shared by every placeholder token.
const TOKEN_PREFIX: &str = "VAR_";

/// The templates vaporize knows how to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Model,
    Controller,
    View,
}

impl TemplateKind {
    /// File name looked up inside a templates directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Model => "model.swift",
            Self::Controller => "controller.swift",
            Self::View => "view.leaf",
        }
    }

    fn builtin_source(&self) -> &'static str {
        match self {
            Self::Model => include_str!("../templates/model.swift"),
            Self::Controller => include_str!("../templates/controller.swift"),
            Self::View => include_str!("../templates/view.leaf"),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Where a template's text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOrigin {
    Builtin,
    File(PathBuf),
    Inline,
}

/// A text template with `VAR_*` placeholder tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    origin: TemplateOrigin,
}

impl Template {
    /// The template embedded in the binary.
    pub fn builtin(kind: TemplateKind) -> Self {
        Self {
            source: kind.builtin_source().to_string(),
            origin: TemplateOrigin::Builtin,
        }
    }

    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            origin: TemplateOrigin::Inline,
        }
    }

    /// Load `kind` from a templates directory.
    pub fn load(dir: &Path, kind: TemplateKind) -> Result<Self> {
        let path = dir.join(kind.file_name());
        let source = match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(Box::new(Error::TemplateNotFound { path }));
            }
            Err(err) => return Err(Error::read(path, err)),
        };
        tracing::debug!(path = %path.display(), "loaded template");
        Ok(Self {
            source,
            origin: TemplateOrigin::File(path),
        })
    }

    /// Load from `dir` when given, otherwise use the embedded template.
    pub fn resolve(dir: Option<&Path>, kind: TemplateKind) -> Result<Self> {
        match dir {
            Some(dir) => Self::load(dir, kind),
            None => Ok(Self::builtin(kind)),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn origin(&self) -> &TemplateOrigin {
        &self.origin
    }

    /// Placeholders occurring in the template, in order of first appearance.
    pub fn placeholders(&self) -> Vec<Placeholder> {
        let mut found = Vec::new();
        let mut rest = self.source.as_str();
        while let Some(at) = rest.find(TOKEN_PREFIX) {
            rest = &rest[at..];
            match Placeholder::match_prefix(rest) {
                Some(placeholder) => {
                    if !found.contains(&placeholder) {
                        found.push(placeholder);
                    }
                    rest = &rest[placeholder.token().len()..];
                }
                None => rest = &rest[TOKEN_PREFIX.len()..],
            }
        }
        found
    }

    /// Substitute every placeholder with its fragment from `bundle`.
    ///
    /// Placeholders missing from the bundle render as empty text. A line
    /// holding nothing but an empty placeholder is dropped, together with the
    /// blank line above it when that blank would otherwise be doubled or end
    /// the file. Lines keep the source's line ending.
    pub fn render(&self, bundle: &FragmentBundle) -> String {
        let ending = line_ending(&self.source);
        let lines: Vec<&str> = self.source.lines().collect();
        let mut out: Vec<String> = Vec::with_capacity(lines.len());

        for (i, line) in lines.iter().enumerate() {
            if let Some(placeholder) = Placeholder::from_token(line.trim()) {
                if bundle.text(placeholder).is_empty() {
                    let next_is_blank = lines.get(i + 1).is_none_or(|next| next.trim().is_empty());
                    let prev_is_blank = out.last().is_some_and(|prev| prev.trim().is_empty());
                    if prev_is_blank && next_is_blank {
                        out.pop();
                    }
                    continue;
                }
            }
            out.push(substitute(line, bundle, ending));
        }

        let mut rendered = out.join(ending);
        if self.source.ends_with('\n') {
            rendered.push_str(ending);
        }
        rendered
    }
}

fn substitute(line: &str, bundle: &FragmentBundle, ending: &str) -> String {
    let mut result = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(at) = rest.find(TOKEN_PREFIX) {
        result.push_str(&rest[..at]);
        rest = &rest[at..];
        match Placeholder::match_prefix(rest) {
            Some(placeholder) => {
                let text = bundle.text(placeholder);
                if ending == "\n" {
                    result.push_str(&text);
                } else {
                    result.push_str(&text.replace('\n', ending));
                }
                rest = &rest[placeholder.token().len()..];
            }
            None => {
                result.push_str(TOKEN_PREFIX);
                rest = &rest[TOKEN_PREFIX.len()..];
            }
        }
    }
    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::builder::Fragment;

    fn bundle(pairs: &[(Placeholder, &str)]) -> FragmentBundle {
        let mut bundle = FragmentBundle::new();
        for (placeholder, text) in pairs {
            bundle.insert(*placeholder, Fragment::text(*text));
        }
        bundle
    }

    #[test]
    fn test_inline_substitution() {
        let template = Template::from_source("final class VAR_MODEL_NAME: Model {}\n");
        let out = template.render(&bundle(&[(Placeholder::ModelName, "User")]));
        assert_eq!(out, "final class User: Model {}\n");
    }

    #[test]
    fn test_substituted_text_is_not_rescanned() {
        let template = Template::from_source("VAR_MODEL_NAME VAR_TITLE");
        let out = template.render(&bundle(&[
            (Placeholder::ModelName, "VAR_TITLE"),
            (Placeholder::Title, "Home"),
        ]));
        assert_eq!(out, "VAR_TITLE Home");
    }

    #[test]
    fn test_unknown_tokens_are_kept() {
        let template = Template::from_source("let x = VAR_UNKNOWN + VAR_MODEL_NAME");
        let out = template.render(&bundle(&[(Placeholder::ModelName, "User")]));
        assert_eq!(out, "let x = VAR_UNKNOWN + User");
    }

    #[test]
    fn test_empty_placeholder_line_between_blanks() {
        let template = Template::from_source("a\n\nVAR_PARENTS\n\nb\n");
        assert_eq!(template.render(&FragmentBundle::new()), "a\n\nb\n");
    }

    #[test]
    fn test_empty_trailing_placeholders() {
        let template = Template::from_source("a\n\nVAR_NODE\nVAR_VIEW_DATA\n");
        assert_eq!(template.render(&FragmentBundle::new()), "a\n");
    }

    #[test]
    fn test_empty_placeholder_after_content() {
        let template = Template::from_source("class A {\n    let s = 1\n    VAR_ENTITY\n\n    x\n}\n");
        assert_eq!(
            template.render(&FragmentBundle::new()),
            "class A {\n    let s = 1\n\n    x\n}\n"
        );
    }

    #[test]
    fn test_crlf_template_keeps_line_endings() {
        let template = Template::from_source("class A {\r\n    x\r\n}\r\n");
        assert_eq!(template.render(&FragmentBundle::new()), "class A {\r\n    x\r\n}\r\n");

        let template = Template::from_source("class VAR_MODEL_NAME {\r\n    VAR_PROPERTIES\r\n\r\n    VAR_ENTITY\r\n}\r\n");
        let mut properties = Fragment::lines("    ");
        properties.push("var a: Int");
        properties.push("var b: Int");
        let bundle = bundle(&[(Placeholder::ModelName, "User")]).with(Placeholder::Properties, properties);
        assert_eq!(
            template.render(&bundle),
            "class User {\r\n    var a: Int\r\n    var b: Int\r\n\r\n}\r\n"
        );
    }

    #[test]
    fn test_placeholders_in_order() {
        let template = Template::from_source("VAR_TITLE VAR_MODEL_NAME\nVAR_TITLE VAR_NOPE");
        assert_eq!(
            template.placeholders(),
            vec![Placeholder::Title, Placeholder::ModelName]
        );
    }

    #[test]
    fn test_builtin_model_has_every_model_slot() {
        let placeholders = Template::builtin(TemplateKind::Model).placeholders();
        for placeholder in Placeholder::FIELD_INDEXED {
            assert!(placeholders.contains(&placeholder), "{placeholder}");
        }
        for placeholder in [
            Placeholder::ModelName,
            Placeholder::Entity,
            Placeholder::Parents,
            Placeholder::Node,
            Placeholder::ViewData,
        ] {
            assert!(placeholders.contains(&placeholder), "{placeholder}");
        }
    }

    #[test]
    fn test_load_missing_template() {
        let temp = TempDir::new().unwrap();
        let err = Template::load(temp.path(), TemplateKind::View).unwrap_err();
        assert!(matches!(*err, Error::TemplateNotFound { .. }));
    }

    #[test]
    fn test_resolve_prefers_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("controller.swift"), "class VAR_CONTROLLER_NAME {}").unwrap();

        let template = Template::resolve(Some(temp.path()), TemplateKind::Controller).unwrap();
        assert_eq!(template.source(), "class VAR_CONTROLLER_NAME {}");
        assert_eq!(
            template.origin(),
            &TemplateOrigin::File(temp.path().join("controller.swift"))
        );

        let builtin = Template::resolve(None, TemplateKind::Controller).unwrap();
        assert_eq!(builtin.origin(), &TemplateOrigin::Builtin);
    }
}
