use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use vaporize_core::{FileRules, GeneratedFile};

use crate::{FragmentBundle, Placeholder, Template, builder::Fragment};

/// Which controllers folder a controller belongs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerKind {
    /// Renders views, lives in `Views/`.
    View,
    /// Serves JSON, lives in `API/`.
    Api,
}

impl ControllerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Api => "api",
        }
    }

    /// Subdirectory of the controllers directory.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::View => "Views",
            Self::Api => "API",
        }
    }
}

impl fmt::Display for ControllerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControllerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "view" | "views" => Ok(Self::View),
            "api" => Ok(Self::Api),
            _ => Err(format!("unknown controller kind '{s}', expected 'view' or 'api'")),
        }
    }
}

/// A controller stub, `<controllers>/<Views|API>/<Name>.swift` (never overwritten).
pub struct ControllerFile {
    pub name: String,
    pub kind: ControllerKind,
    template: Template,
}

impl ControllerFile {
    pub fn new(name: impl Into<String>, kind: ControllerKind, template: Template) -> Self {
        Self {
            name: name.into(),
            kind,
            template,
        }
    }
}

impl GeneratedFile for ControllerFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.kind.dir_name())
            .join(format!("{}.swift", self.name))
    }

    fn rules(&self) -> FileRules {
        FileRules::create_only()
    }

    fn render(&self) -> String {
        let bundle = FragmentBundle::new()
            .with(Placeholder::ControllerName, Fragment::text(&self.name));
        self.template.render(&bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TemplateKind;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("view".parse::<ControllerKind>().unwrap(), ControllerKind::View);
        assert_eq!("API".parse::<ControllerKind>().unwrap(), ControllerKind::Api);
        assert!("web".parse::<ControllerKind>().is_err());
    }

    #[test]
    fn test_path_by_kind() {
        let base = Path::new("Sources/App/Controllers");
        let template = Template::builtin(TemplateKind::Controller);
        let api = ControllerFile::new("UserController", ControllerKind::Api, template.clone());
        let view = ControllerFile::new("HomeController", ControllerKind::View, template);
        assert_eq!(api.path(base), base.join("API/UserController.swift"));
        assert_eq!(view.path(base), base.join("Views/HomeController.swift"));
    }

    #[test]
    fn test_render_builtin() {
        let file = ControllerFile::new(
            "UserController",
            ControllerKind::Api,
            Template::builtin(TemplateKind::Controller),
        );
        insta::assert_snapshot!(file.render(), @r"
        import Vapor
        import HTTP

        final class UserController {
            func addRoutes(_ builder: RouteBuilder) {

            }
        }
        ");
    }
}
