use std::path::{Path, PathBuf};

use vaporize_core::{FileRules, GeneratedFile};

use crate::{FragmentBundle, Placeholder, Template, builder::Fragment};

/// A Leaf view, `<views>/<name>.leaf` (never overwritten).
pub struct ViewFile {
    pub name: String,
    pub title: String,
    template: Template,
}

impl ViewFile {
    pub fn new(name: impl Into<String>, title: impl Into<String>, template: Template) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            template,
        }
    }
}

impl GeneratedFile for ViewFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.leaf", self.name))
    }

    fn rules(&self) -> FileRules {
        FileRules::create_only()
    }

    fn render(&self) -> String {
        let bundle = FragmentBundle::new().with(Placeholder::Title, Fragment::text(&self.title));
        self.template.render(&bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TemplateKind;

    #[test]
    fn test_render_builtin() {
        let file = ViewFile::new("index", "Home", Template::builtin(TemplateKind::View));
        assert_eq!(file.path(Path::new("Resources/Views")), Path::new("Resources/Views/index.leaf"));
        insta::assert_snapshot!(file.render(), @r#"
        #extend("base")

        #export("title") { Home }

        #export("content") {

        }
        "#);
    }
}
