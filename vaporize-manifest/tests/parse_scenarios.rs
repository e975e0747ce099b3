//! End-to-end parsing of `vaporize model` argument lists.

use vaporize_manifest::{Error, FieldSpec, FieldType, ScalarType, parse};

#[test]
fn test_user_with_optional_age() {
    let spec = parse(&["User", "name:string", "age:int!"]).unwrap();

    assert_eq!(spec.name(), "User");
    assert_eq!(
        spec.fields(),
        [
            FieldSpec::new("name", FieldType::Scalar(ScalarType::String), false),
            FieldSpec::new("age", FieldType::Scalar(ScalarType::Int), true),
        ]
    );
    assert_eq!(spec.relations().count(), 0);
}

#[test]
fn test_post_with_author_relation() {
    let spec = parse(&["Post", "title:string", "author:User"]).unwrap();

    let author = &spec.fields()[1];
    assert!(author.is_relation());
    assert_eq!(author.ty.target().as_deref(), Some("User"));
    assert_eq!(spec.relations().count(), 1);
}

#[test]
fn test_missing_colon_is_malformed() {
    let err = parse(&["Post", "title-string"]).unwrap_err();
    assert!(matches!(*err, Error::MalformedField { ref token, .. } if token == "title-string"));
}

#[test]
fn test_name_alone_is_insufficient() {
    let err = parse(&["User"]).unwrap_err();
    assert!(matches!(*err, Error::InsufficientArguments { found: 1, .. }));

    let err = parse::<&str>(&[]).unwrap_err();
    assert!(matches!(*err, Error::InsufficientArguments { found: 0, .. }));
}

#[test]
fn test_too_many_colons_is_malformed() {
    let err = parse(&["Post", "title:string:extra"]).unwrap_err();
    assert!(matches!(*err, Error::MalformedField { .. }));
}

#[test]
fn test_model_name_is_not_parsed_as_field() {
    let spec = parse(&["Weird:Name", "x:int"]).unwrap();
    assert_eq!(spec.name(), "Weird:Name");
}

#[test]
fn test_tokens_round_trip() {
    let tokens = [
        "name:string",
        "age:int!",
        "height:double",
        "ratio:float!",
        "admin:bool",
        "team:team",
        "mentor:User!",
    ];
    let mut args = vec!["Member"];
    args.extend(tokens);

    let spec = parse(&args).unwrap();
    let rendered: Vec<String> = spec.fields().iter().map(ToString::to_string).collect();
    assert_eq!(rendered, tokens);
}
