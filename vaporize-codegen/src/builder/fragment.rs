//! Joined contributions destined for one template slot.

/// How a fragment's contributions are joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// One contribution per line. Lines after the first carry `continuation`
    /// because the first line inherits the placeholder's own indentation.
    Lines { continuation: String },
    /// All contributions on one line.
    Inline { separator: &'static str },
    /// Self-contained multi-line blocks, separated by exactly one blank line.
    Blocks,
}

/// The generated text for one slot.
///
/// Contributions are kept separately until [`Fragment::render`], so the
/// separator logic (and the "nothing before the first entry" rule) lives in
/// one place for every slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    layout: Layout,
    contributions: Vec<String>,
    leading_blank: bool,
}

impl Fragment {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            contributions: Vec::new(),
            leading_blank: false,
        }
    }

    pub fn lines(continuation: impl Into<String>) -> Self {
        Self::new(Layout::Lines {
            continuation: continuation.into(),
        })
    }

    pub fn inline(separator: &'static str) -> Self {
        Self::new(Layout::Inline { separator })
    }

    pub fn blocks() -> Self {
        Self::new(Layout::Blocks)
    }

    /// A single inline value.
    pub fn text(value: impl Into<String>) -> Self {
        let mut fragment = Self::inline("");
        fragment.push(value);
        fragment
    }

    /// Add one contribution. Trailing newlines are dropped; the layout owns separators.
    pub fn push(&mut self, contribution: impl Into<String>) {
        let mut contribution = contribution.into();
        let trimmed = contribution.trim_end_matches('\n').len();
        contribution.truncate(trimmed);
        self.contributions.push(contribution);
    }

    /// Prefix the rendered text with a blank line when it is not empty.
    pub fn set_leading_blank(&mut self, leading_blank: bool) {
        self.leading_blank = leading_blank;
    }

    pub fn contributions(&self) -> &[String] {
        &self.contributions
    }

    pub fn len(&self) -> usize {
        self.contributions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }

    pub fn render(&self) -> String {
        if self.contributions.is_empty() {
            return String::new();
        }

        let separator = match &self.layout {
            Layout::Lines { continuation } => format!("\n{continuation}"),
            Layout::Inline { separator } => (*separator).to_string(),
            Layout::Blocks => "\n\n".to_string(),
        };
        let body = self.contributions.join(&separator);

        if self.leading_blank {
            format!("\n{body}")
        } else {
            body
        }
    }
}
