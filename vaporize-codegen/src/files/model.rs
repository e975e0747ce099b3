use std::path::{Path, PathBuf};

use vaporize_core::GeneratedFile;
use vaporize_manifest::ModelSpec;

use crate::{Assembler, FragmentBundle, Template};

/// A Fluent model source file, `<models>/<Model>.swift`.
pub struct ModelFile {
    pub name: String,
    template: Template,
    bundle: FragmentBundle,
}

impl ModelFile {
    pub fn new(spec: &ModelSpec, template: Template, assembler: &Assembler) -> Self {
        Self {
            name: spec.name().to_string(),
            template,
            bundle: assembler.assemble(spec),
        }
    }

    pub fn bundle(&self) -> &FragmentBundle {
        &self.bundle
    }
}

impl GeneratedFile for ModelFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.swift", self.name))
    }

    fn render(&self) -> String {
        self.template.render(&self.bundle)
    }
}
