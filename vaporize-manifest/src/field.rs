//! Field descriptors parsed from `name:type[!]` tokens.

use std::{fmt, str::FromStr};

use thiserror::Error;
use vaporize_core::capitalize_first;

/// Marker appended to a type to make the field optional.
pub const OPTIONAL_MARKER: char = '!';

/// Separator between the field name and its type.
pub const TYPE_SEPARATOR: char = ':';

/// Scalar column types understood by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Int,
    String,
    Double,
    Float,
    Bool,
}

impl ScalarType {
    pub const ALL: [Self; 5] = [
        Self::Int,
        Self::String,
        Self::Double,
        Self::Float,
        Self::Bool,
    ];

    /// The keyword used on the command line.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::String => "string",
            Self::Double => "double",
            Self::Float => "float",
            Self::Bool => "bool",
        }
    }

    /// Exact, case-sensitive keyword lookup.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.keyword() == keyword)
    }

    /// The Swift type declared for this column.
    pub fn swift_type(&self) -> &'static str {
        match self {
            Self::Int => "Int",
            Self::String => "String",
            Self::Double => "Double",
            Self::Float => "Float",
            Self::Bool => "Bool",
        }
    }

    /// The Fluent schema builder method creating this column.
    pub fn builder_method(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::String => "string",
            // Fluent has no single-precision column type.
            Self::Double | Self::Float => "double",
            Self::Bool => "bool",
        }
    }
}

/// The declared type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Scalar(ScalarType),
    /// Reference to another model, stored as its identifier.
    Relation { reference: String },
}

impl FieldType {
    /// Swift type used to store relation fields.
    pub const IDENTIFIER: &'static str = "Identifier";

    /// Resolve a type keyword; anything that is not a scalar is a relation.
    pub fn resolve(keyword: &str) -> Self {
        match ScalarType::from_keyword(keyword) {
            Some(scalar) => Self::Scalar(scalar),
            None => Self::Relation {
                reference: keyword.to_string(),
            },
        }
    }

    /// The keyword as written on the command line.
    pub fn keyword(&self) -> &str {
        match self {
            Self::Scalar(scalar) => scalar.keyword(),
            Self::Relation { reference } => reference,
        }
    }

    /// The Swift storage type.
    pub fn swift_type(&self) -> &str {
        match self {
            Self::Scalar(scalar) => scalar.swift_type(),
            Self::Relation { .. } => Self::IDENTIFIER,
        }
    }

    /// Name of the referenced model, capitalized.
    pub fn target(&self) -> Option<String> {
        match self {
            Self::Scalar(_) => None,
            Self::Relation { reference } => Some(capitalize_first(reference)),
        }
    }

    pub fn is_relation(&self) -> bool {
        matches!(self, Self::Relation { .. })
    }
}

/// One property of a model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    pub name: String,
    pub ty: FieldType,
    pub optional: bool,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, ty: FieldType, optional: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            optional,
        }
    }

    /// Swift type including the optional suffix (e.g., "Int?").
    pub fn declared_type(&self) -> String {
        if self.optional {
            format!("{}?", self.ty.swift_type())
        } else {
            self.ty.swift_type().to_string()
        }
    }

    pub fn is_relation(&self) -> bool {
        self.ty.is_relation()
    }
}

/// Why a single field token was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("'{token}' is not of the form name:type")]
    Malformed { token: String },

    #[error("field '{name}' has no type")]
    MissingType { name: String },
}

impl FromStr for FieldSpec {
    type Err = FieldError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut parts = token.split(TYPE_SEPARATOR);
        let (Some(name), Some(ty), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(FieldError::Malformed {
                token: token.to_string(),
            });
        };

        let (keyword, optional) = match ty.strip_suffix(OPTIONAL_MARKER) {
            Some(stripped) => (stripped, true),
            None => (ty, false),
        };

        if keyword.is_empty() {
            return Err(FieldError::MissingType {
                name: name.to_string(),
            });
        }

        Ok(Self::new(name, FieldType::resolve(keyword), optional))
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, TYPE_SEPARATOR, self.ty.keyword())?;
        if self.optional {
            write!(f, "{OPTIONAL_MARKER}")?;
        }
        Ok(())
    }
}
