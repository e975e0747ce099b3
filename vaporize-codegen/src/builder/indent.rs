//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation used by Swift and Vapor projects.
    pub const SWIFT: Self = Self::Spaces(4);

    /// Whitespace for `level` levels of indentation.
    pub fn repeat(&self, level: usize) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(usize::from(*width) * level),
            Self::Tab => "\t".repeat(level),
        }
    }

    /// Width of the leading whitespace of `line`, in levels of this indent.
    pub fn level_of(&self, line: &str) -> usize {
        let (unit, width) = match self {
            Self::Spaces(width) => (' ', usize::from(*width).max(1)),
            Self::Tab => ('\t', 1),
        };
        line.chars().take_while(|c| *c == unit).count() / width
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::SWIFT
    }
}

/// Nesting depth of a template slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Depth {
    /// File scope: extensions and conformances.
    TopLevel,
    /// Type body: stored properties.
    Member,
    /// Method or nested type body: assignments, row/JSON mapping, enum cases.
    Body,
    /// Closure inside a method body: schema builder calls.
    Closure,
}

impl Depth {
    pub fn level(&self) -> usize {
        match self {
            Self::TopLevel => 0,
            Self::Member => 1,
            Self::Body => 2,
            Self::Closure => 3,
        }
    }
}

/// Indentation applied to the continuation lines of every slot.
///
/// A fragment's first line inherits the placeholder's position in the
/// template; every following line is prefixed with the whitespace for the
/// slot's [`Depth`]. Slots sharing a depth therefore always line up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndentPolicy {
    pub unit: Indent,
}

impl IndentPolicy {
    pub const SWIFT: Self = Self { unit: Indent::SWIFT };

    pub fn new(unit: Indent) -> Self {
        Self { unit }
    }

    /// Prefix for continuation lines at `depth`.
    pub fn continuation(&self, depth: Depth) -> String {
        self.unit.repeat(depth.level())
    }
}
