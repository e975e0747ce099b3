//! Placeholder tokens recognized in templates.

use std::fmt;

use crate::builder::Depth;

/// A named slot in a template, written as an all-caps `VAR_*` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placeholder {
    ModelName,
    Entity,
    Properties,
    InitParams,
    InitBody,
    RowInit,
    MakeRow,
    JsonInit,
    MakeJson,
    Builder,
    Keys,
    Parents,
    Node,
    ViewData,
    ControllerName,
    Title,
}

impl Placeholder {
    pub const ALL: [Self; 16] = [
        Self::ModelName,
        Self::Entity,
        Self::Properties,
        Self::InitParams,
        Self::InitBody,
        Self::RowInit,
        Self::MakeRow,
        Self::JsonInit,
        Self::MakeJson,
        Self::Builder,
        Self::Keys,
        Self::Parents,
        Self::Node,
        Self::ViewData,
        Self::ControllerName,
        Self::Title,
    ];

    /// Slots receiving exactly one contribution per model field.
    pub const FIELD_INDEXED: [Self; 9] = [
        Self::Properties,
        Self::InitParams,
        Self::InitBody,
        Self::RowInit,
        Self::MakeRow,
        Self::JsonInit,
        Self::MakeJson,
        Self::Builder,
        Self::Keys,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Self::ModelName => "VAR_MODEL_NAME",
            Self::Entity => "VAR_ENTITY",
            Self::Properties => "VAR_PROPERTIES",
            Self::InitParams => "VAR_INIT_PARAMS",
            Self::InitBody => "VAR_INIT_BODY",
            Self::RowInit => "VAR_ROW_INIT",
            Self::MakeRow => "VAR_MAKE_ROW",
            Self::JsonInit => "VAR_JSON_INIT",
            Self::MakeJson => "VAR_MAKE_JSON",
            Self::Builder => "VAR_BUILDER",
            Self::Keys => "VAR_KEYS",
            Self::Parents => "VAR_PARENTS",
            Self::Node => "VAR_NODE",
            Self::ViewData => "VAR_VIEW_DATA",
            Self::ControllerName => "VAR_CONTROLLER_NAME",
            Self::Title => "VAR_TITLE",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.token() == token)
    }

    /// Nesting depth of the slot in the model template.
    pub fn depth(&self) -> Depth {
        match self {
            Self::Entity | Self::Properties => Depth::Member,
            Self::InitBody
            | Self::RowInit
            | Self::MakeRow
            | Self::JsonInit
            | Self::MakeJson
            | Self::Keys => Depth::Body,
            Self::Builder => Depth::Closure,
            Self::ModelName
            | Self::InitParams
            | Self::Parents
            | Self::Node
            | Self::ViewData
            | Self::ControllerName
            | Self::Title => Depth::TopLevel,
        }
    }

    /// Find the longest placeholder token at the start of `text`.
    pub(crate) fn match_prefix(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .filter(|p| text.starts_with(p.token()))
            .max_by_key(|p| p.token().len())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
