use std::collections::HashSet;

use crate::{FieldSpec, NamePolicy};

/// Optional conformances generated alongside the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelFlags {
    /// Emit a `NodeRepresentable` extension.
    pub node: bool,
    /// Emit a `ViewDataRepresentable` extension.
    pub view_data: bool,
}

/// The full specification for one generated model.
///
/// Always holds at least one field; build it with [`crate::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSpec {
    pub(crate) name: String,
    pub(crate) entity: Option<String>,
    pub(crate) fields: Vec<FieldSpec>,
    pub(crate) flags: ModelFlags,
}

impl ModelSpec {
    /// Swift type name of the model.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Explicit storage entity name, if the naming policy asks for one.
    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    /// Re-apply `policy` to a spec parsed with the default (verbatim) policy.
    pub fn with_policy(mut self, policy: &NamePolicy) -> Self {
        self.name = policy.model_name(&self.name);
        self.entity = policy.entity_name(&self.name);
        self
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn flags(&self) -> ModelFlags {
        self.flags
    }

    /// Relation fields, in declaration order.
    pub fn relations(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|field| field.is_relation())
    }

    /// Field names declared more than once, in first-repeat order.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for field in &self.fields {
            let name = field.name.as_str();
            if !seen.insert(name) && !duplicates.contains(&name) {
                duplicates.push(name);
            }
        }
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use crate::{NamePolicy, parse};

    #[test]
    fn test_with_policy_matches_parse_with_policy() {
        let tokens = ["blogPost", "title:string"];
        let late = parse(&tokens).unwrap().with_policy(&NamePolicy::CAPITALIZED);
        let early = crate::parse_with_policy(&tokens, &NamePolicy::CAPITALIZED).unwrap();
        assert_eq!(late, early);
        assert_eq!(late.name(), "BlogPost");
        assert_eq!(late.entity(), Some("blogposts"));
    }
}
