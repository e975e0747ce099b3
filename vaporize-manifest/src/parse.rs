//! Token parser: raw command-line tokens to a [`ModelSpec`].

use crate::{ArgsSource, FieldError, FieldSpec, ModelFlags, ModelSpec, NamePolicy, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    Node,
    ViewData,
}

/// Recognize `--node=<bool>` / `--viewdata=<bool>`, keys in any case.
fn parse_flag(token: &str) -> Option<(Flag, bool)> {
    let (key, value) = token.strip_prefix("--")?.split_once('=')?;
    let flag = match key.to_ascii_lowercase().as_str() {
        "node" => Flag::Node,
        "viewdata" => Flag::ViewData,
        _ => return None,
    };
    let value = match value.to_ascii_lowercase().as_str() {
        "true" => true,
        "false" => false,
        _ => return None,
    };
    Some((flag, value))
}

/// Parse tokens with the default naming policy.
///
/// ```
/// let spec = vaporize_manifest::parse(&["User", "name:string", "age:int!"]).unwrap();
/// assert_eq!(spec.name(), "User");
/// assert_eq!(spec.fields().len(), 2);
/// ```
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<ModelSpec> {
    parse_with_policy(tokens, &NamePolicy::default())
}

/// Parse `<Name> <field>... [--node=true] [--viewdata=true]`.
///
/// Flags may appear anywhere. The first remaining token is the model name;
/// every other token must be a `name:type[!]` field.
pub fn parse_with_policy<S: AsRef<str>>(tokens: &[S], policy: &NamePolicy) -> Result<ModelSpec> {
    let source = ArgsSource::new(tokens);
    let mut flags = ModelFlags::default();
    let mut positional = Vec::with_capacity(tokens.len());

    for (index, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        match parse_flag(token) {
            Some((Flag::Node, value)) => flags.node = value,
            Some((Flag::ViewData, value)) => flags.view_data = value,
            None => positional.push((index, token)),
        }
    }

    let [(_, raw_name), field_tokens @ ..] = positional.as_slice() else {
        return Err(source.insufficient_arguments(positional.len()));
    };
    if field_tokens.is_empty() {
        return Err(source.insufficient_arguments(positional.len()));
    }

    let fields = field_tokens
        .iter()
        .map(|&(index, token)| {
            token.parse::<FieldSpec>().map_err(|err| match err {
                FieldError::Malformed { token } => source.malformed_field(token, index),
                FieldError::MissingType { name } => source.unsupported_type(name, index),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let name = policy.model_name(raw_name);
    let entity = policy.entity_name(&name);

    tracing::debug!(
        model = %name,
        fields = fields.len(),
        relations = fields.iter().filter(|f| f.is_relation()).count(),
        node = flags.node,
        view_data = flags.view_data,
        "parsed model specification"
    );

    Ok(ModelSpec {
        name,
        entity,
        fields,
        flags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, FieldType, ScalarType};

    #[test]
    fn test_parse_flag_variants() {
        assert_eq!(parse_flag("--node=true"), Some((Flag::Node, true)));
        assert_eq!(parse_flag("--viewdata=true"), Some((Flag::ViewData, true)));
        assert_eq!(parse_flag("--viewData=TRUE"), Some((Flag::ViewData, true)));
        assert_eq!(parse_flag("--Node=false"), Some((Flag::Node, false)));
        assert_eq!(parse_flag("--node"), None);
        assert_eq!(parse_flag("--node=yes"), None);
        assert_eq!(parse_flag("node=true"), None);
        assert_eq!(parse_flag("--json=true"), None);
    }

    #[test]
    fn test_flags_are_removed_anywhere() {
        let spec = parse(&["--node=true", "User", "name:string", "--viewdata=true"]).unwrap();
        assert_eq!(spec.name(), "User");
        assert_eq!(spec.fields().len(), 1);
        assert_eq!(
            spec.flags(),
            ModelFlags {
                node: true,
                view_data: true
            }
        );
    }

    #[test]
    fn test_policy_applies_to_name() {
        let spec = parse_with_policy(&["user", "name:string"], &NamePolicy::CAPITALIZED).unwrap();
        assert_eq!(spec.name(), "User");
        assert_eq!(spec.entity(), Some("users"));
    }

    #[test]
    fn test_relation_subset_keeps_order() {
        let spec = parse(&["Comment", "author:User", "body:string", "post:Post!"]).unwrap();
        let relations: Vec<_> = spec.relations().map(|f| f.name.as_str()).collect();
        assert_eq!(relations, ["author", "post"]);
        assert_eq!(spec.fields()[1].ty, FieldType::Scalar(ScalarType::String));
    }

    #[test]
    fn test_only_flags_is_insufficient() {
        let err = parse(&["User", "--node=true"]).unwrap_err();
        assert!(matches!(*err, Error::InsufficientArguments { found: 1, .. }));
    }

    #[test]
    fn test_malformed_field_labels_token() {
        let err = parse(&["Post", "title:string", "body"]).unwrap_err();
        match err.as_ref() {
            Error::MalformedField { span, token, .. } => {
                assert_eq!(token, "body");
                assert_eq!(span.offset(), 18);
                assert_eq!(span.len(), 4);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_type_is_unsupported() {
        let err = parse(&["Post", "title:"]).unwrap_err();
        assert!(matches!(*err, Error::UnsupportedType { ref name, .. } if name == "title"));
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let spec = parse(&["User", "name:string", "name:int", "age:int", "name:bool"]).unwrap();
        assert_eq!(spec.fields().len(), 4);
        assert_eq!(spec.duplicate_names(), ["name"]);
    }
}
