//! Model and storage naming policy.

use serde::Deserialize;
use vaporize_core::{capitalize_first, pluralize};

/// How the model name given on the command line becomes the Swift type name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelCase {
    /// Use the name exactly as typed.
    #[default]
    Verbatim,
    /// Uppercase the first letter ("user" -> "User").
    Capitalize,
}

/// Whether the generated model declares an explicit storage entity name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityName {
    /// Let Fluent derive the entity name.
    #[default]
    Omit,
    /// Lowercased, pluralized model name ("User" -> "users").
    Plural,
}

/// Naming configuration, read from the `[naming]` table of vaporize.toml.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamePolicy {
    #[serde(default)]
    pub model: ModelCase,
    #[serde(default)]
    pub entity: EntityName,
}

impl NamePolicy {
    /// Capitalized model names with plural table names.
    pub const CAPITALIZED: Self = Self {
        model: ModelCase::Capitalize,
        entity: EntityName::Plural,
    };

    pub fn model_name(&self, raw: &str) -> String {
        match self.model {
            ModelCase::Verbatim => raw.to_string(),
            ModelCase::Capitalize => capitalize_first(raw),
        }
    }

    pub fn entity_name(&self, model_name: &str) -> Option<String> {
        match self.entity {
            EntityName::Omit => None,
            EntityName::Plural => Some(pluralize(&model_name.to_lowercase())),
        }
    }
}
