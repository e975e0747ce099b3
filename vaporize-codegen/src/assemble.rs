//! Model assembler: [`ModelSpec`] to [`FragmentBundle`].
//!
//! One pass over the fields fills every field-indexed slot (and collects the
//! relation subset); a second pass over the relations fills the accessor
//! slot. Conformance blocks are added last, driven by the model flags.

use vaporize_manifest::{FieldSpec, FieldType, ModelSpec};

use crate::{
    FragmentBundle, Placeholder,
    builder::{CodeBuilder, Fragment, IndentPolicy},
};

/// Assemble with the default Swift indentation.
pub fn assemble(spec: &ModelSpec) -> FragmentBundle {
    Assembler::default().assemble(spec)
}

/// Derives every template fragment from a model specification.
#[derive(Debug, Clone, Copy, Default)]
pub struct Assembler {
    policy: IndentPolicy,
}

impl Assembler {
    pub fn new(policy: IndentPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> IndentPolicy {
        self.policy
    }

    fn stacked(&self, placeholder: Placeholder) -> Fragment {
        Fragment::lines(self.policy.continuation(placeholder.depth()))
    }

    pub fn assemble(&self, spec: &ModelSpec) -> FragmentBundle {
        let model = spec.name();

        let mut entity = self.stacked(Placeholder::Entity);
        if let Some(name) = spec.entity() {
            entity.push(format!("static let entity = \"{name}\""));
        }

        let mut properties = self.stacked(Placeholder::Properties);
        let mut init_params = Fragment::inline(", ");
        let mut init_body = self.stacked(Placeholder::InitBody);
        let mut row_init = self.stacked(Placeholder::RowInit);
        let mut make_row = self.stacked(Placeholder::MakeRow);
        let mut json_init = self.stacked(Placeholder::JsonInit);
        let mut make_json = self.stacked(Placeholder::MakeJson);
        let mut builder = self.stacked(Placeholder::Builder);
        let mut keys = self.stacked(Placeholder::Keys);
        let mut relations = Vec::new();

        for field in spec.fields() {
            let name = &field.name;
            let declared = field.declared_type();
            let key = field_key(model, name);

            properties.push(format!("var {name}: {declared}"));
            init_params.push(format!("{name}: {declared}"));
            init_body.push(format!("self.{name} = {name}"));
            row_init.push(format!("{name} = try row.get({key})"));
            make_row.push(format!("try row.set({key}, {name})"));
            json_init.push(format!("{name} = try json.get({key})"));
            make_json.push(format!("try json.set({key}, {name})"));
            builder.push(schema_call(field, &key));
            keys.push(format!("case {name}"));

            if field.is_relation() {
                relations.push(field);
            }
        }

        let mut parents = Fragment::blocks();
        for field in relations {
            parents.push(self.parent_accessor(model, field));
        }

        let flags = spec.flags();
        let mut node = Fragment::blocks();
        if flags.node {
            node.push(self.conformance(
                model,
                "NodeRepresentable",
                "func makeNode(in context: Context?) throws -> Node",
                "return try makeJSON().makeNode(in: context)",
            ));
        }
        let mut view_data = Fragment::blocks();
        if flags.view_data {
            view_data.push(self.conformance(
                model,
                "ViewDataRepresentable",
                "func makeViewData() throws -> ViewData",
                "return try makeJSON().makeViewData()",
            ));
        }
        view_data.set_leading_blank(!node.is_empty());

        tracing::debug!(
            model,
            fields = spec.fields().len(),
            relations = parents.len(),
            "assembled fragments"
        );

        FragmentBundle::new()
            .with(Placeholder::ModelName, Fragment::text(model))
            .with(Placeholder::Entity, entity)
            .with(Placeholder::Properties, properties)
            .with(Placeholder::InitParams, init_params)
            .with(Placeholder::InitBody, init_body)
            .with(Placeholder::RowInit, row_init)
            .with(Placeholder::MakeRow, make_row)
            .with(Placeholder::JsonInit, json_init)
            .with(Placeholder::MakeJson, make_json)
            .with(Placeholder::Builder, builder)
            .with(Placeholder::Keys, keys)
            .with(Placeholder::Parents, parents)
            .with(Placeholder::Node, node)
            .with(Placeholder::ViewData, view_data)
    }

    fn parent_accessor(&self, model: &str, field: &FieldSpec) -> String {
        let name = &field.name;
        let target = field.ty.target().unwrap_or_default();
        let optional = if field.optional { "?" } else { "" };

        CodeBuilder::new(self.policy.unit)
            .block_with_close(&format!("extension {model} {{"), "}", |b| {
                b.block_with_close(
                    &format!("var {name}Parent: Parent<{model}, {target}>{optional} {{"),
                    "}",
                    |b| {
                        b.when(field.optional, |b| {
                            b.line(&format!("guard let {name} = {name} else {{ return nil }}"))
                        })
                        .line(&format!("return parent(id: {name})"))
                    },
                )
            })
            .build()
    }

    fn conformance(&self, model: &str, protocol: &str, signature: &str, body: &str) -> String {
        CodeBuilder::new(self.policy.unit)
            .block_with_close(&format!("extension {model}: {protocol} {{"), "}", |b| {
                b.block_with_close(&format!("{signature} {{"), "}", |b| b.line(body))
            })
            .build()
    }
}

/// Column key expression for a field (e.g., `User.Field.name.rawValue`).
fn field_key(model: &str, name: &str) -> String {
    format!("{model}.Field.{name}.rawValue")
}

fn schema_call(field: &FieldSpec, key: &str) -> String {
    let optional = if field.optional { ", optional: true" } else { "" };
    match &field.ty {
        FieldType::Scalar(scalar) => {
            format!("builder.{}({key}{optional})", scalar.builder_method())
        }
        FieldType::Relation { .. } => {
            let target = field.ty.target().unwrap_or_default();
            format!("builder.parent({target}.self{optional}, foreignIdKey: {key})")
        }
    }
}
