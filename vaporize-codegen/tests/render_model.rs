use vaporize_codegen::{Placeholder, Template, TemplateKind, assemble};
use vaporize_manifest::{NamePolicy, parse, parse_with_policy};

fn render(tokens: &[&str]) -> String {
    let spec = parse(tokens).unwrap();
    Template::builtin(TemplateKind::Model).render(&assemble(&spec))
}

#[test]
fn test_user_model() {
    insta::assert_snapshot!(render(&["User", "name:string", "age:int!"]), @r#"
    import Vapor
    import FluentProvider
    import HTTP

    final class User: Model {
        let storage = Storage()

        var name: String
        var age: Int?

        init(name: String, age: Int?) {
            self.name = name
            self.age = age
        }

        init(row: Row) throws {
            name = try row.get(User.Field.name.rawValue)
            age = try row.get(User.Field.age.rawValue)
        }

        func makeRow() throws -> Row {
            var row = Row()
            try row.set(User.Field.name.rawValue, name)
            try row.set(User.Field.age.rawValue, age)
            return row
        }

        init(json: JSON) throws {
            name = try json.get(User.Field.name.rawValue)
            age = try json.get(User.Field.age.rawValue)
        }
    }

    extension User {
        enum Field: String {
            case name
            case age
        }
    }

    extension User: Preparation {
        static func prepare(_ database: Database) throws {
            try database.create(self) { builder in
                builder.id()
                builder.string(User.Field.name.rawValue)
                builder.int(User.Field.age.rawValue, optional: true)
            }
        }

        static func revert(_ database: Database) throws {
            try database.delete(self)
        }
    }

    extension User: JSONConvertible {
        func makeJSON() throws -> JSON {
            var json = JSON()
            try json.set(User.idKey, id)
            try json.set(User.Field.name.rawValue, name)
            try json.set(User.Field.age.rawValue, age)
            return json
        }
    }

    extension User: ResponseRepresentable { }
    "#);
}

#[test]
fn test_relation_accessor_and_conformances() {
    let rendered = render(&[
        "Post",
        "title:string",
        "author:User",
        "--node=true",
        "--viewdata=true",
    ]);

    assert!(rendered.contains(
        "\n}\n\nextension Post {\n    var authorParent: Parent<Post, User> {\n        return parent(id: author)\n    }\n}\n\nextension Post: Preparation {\n"
    ));
    assert!(rendered.contains(
        "            builder.parent(User.self, foreignIdKey: Post.Field.author.rawValue)\n"
    ));
    assert!(rendered.ends_with(
        "extension Post: ResponseRepresentable { }\n\nextension Post: NodeRepresentable {\n    func makeNode(in context: Context?) throws -> Node {\n        return try makeJSON().makeNode(in: context)\n    }\n}\n\nextension Post: ViewDataRepresentable {\n    func makeViewData() throws -> ViewData {\n        return try makeJSON().makeViewData()\n    }\n}\n"
    ));
}

#[test]
fn test_each_flag_toggles_only_its_block() {
    let neither = render(&["User", "name:string"]);
    let node = render(&["User", "name:string", "--node=true"]);
    let view = render(&["User", "name:string", "--viewData=true"]);

    assert!(!neither.contains("NodeRepresentable"));
    assert!(!neither.contains("ViewDataRepresentable"));
    assert!(neither.ends_with("extension User: ResponseRepresentable { }\n"));

    assert!(node.contains("NodeRepresentable"));
    assert!(!node.contains("ViewDataRepresentable"));
    assert!(node.ends_with("}\n}\n"));

    assert!(!view.contains("NodeRepresentable"));
    assert!(view.contains("{ }\n\nextension User: ViewDataRepresentable {\n"));
    assert!(!view.contains("\n\n\n"));
}

#[test]
fn test_no_relations_no_accessor_text() {
    let rendered = render(&["User", "name:string", "age:int!"]);
    assert!(!rendered.contains("Parent<"));
    assert!(!rendered.contains("\n\n\n"));
}

#[test]
fn test_rendering_is_idempotent() {
    let tokens = ["Comment", "body:string", "post:Post", "editor:user!", "--node=true"];
    assert_eq!(render(&tokens), render(&tokens));
}

#[test]
fn test_field_indexed_slots_follow_field_order() {
    let spec = parse(&["Item", "a:int", "b:string", "c:double!", "d:float", "e:bool", "f:Owner"]).unwrap();
    let bundle = assemble(&spec);

    for placeholder in Placeholder::FIELD_INDEXED {
        let fragment = bundle.get(placeholder).unwrap();
        assert_eq!(fragment.len(), 6, "{placeholder}");
        for (contribution, name) in fragment.contributions().iter().zip(["a", "b", "c", "d", "e", "f"]) {
            assert!(contribution.contains(name), "{placeholder}: {contribution}");
        }
    }
    assert_eq!(bundle.get(Placeholder::Parents).unwrap().len(), 1);
    assert!(bundle.text(Placeholder::Builder).contains("builder.double(Item.Field.d.rawValue)"));
}

#[test]
fn test_capitalized_naming_adds_entity() {
    let spec = parse_with_policy(&["user", "name:string"], &NamePolicy::CAPITALIZED).unwrap();
    let rendered = Template::builtin(TemplateKind::Model).render(&assemble(&spec));
    assert!(rendered.contains(
        "final class User: Model {\n    let storage = Storage()\n    static let entity = \"users\"\n\n    var name: String\n"
    ));
}
