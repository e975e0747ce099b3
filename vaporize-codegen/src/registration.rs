//! Registering a generated model in the project's setup file.
//!
//! The setup file must end with two closing braces: the one closing the
//! method that appends preparations, then the one closing its extension.
//! The registration statement is inserted just above the inner brace.

use std::path::Path;

use miette::SourceSpan;
use vaporize_core::line_ending;

use crate::{Error, Result, builder::Indent};

/// The statement registering `model`'s preparation.
pub fn statement(model: &str) -> String {
    format!("preparations.append({model}.self)")
}

/// Outcome of [`splice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Splice {
    /// The statement was inserted; holds the new file content.
    Inserted(String),
    /// The statement is already in the file.
    Present,
}

struct Line<'a> {
    offset: usize,
    text: &'a str,
}

/// Insert `statement` before the final two closing braces of `content`.
///
/// `path` only labels diagnostics. The content's line ending is kept.
pub fn splice(path: &Path, content: &str, statement: &str, indent: Indent) -> Result<Splice> {
    let mut offset = 0;
    let lines: Vec<Line<'_>> = content
        .split_inclusive('\n')
        .map(|raw| {
            let line = Line {
                offset,
                text: raw.trim_end_matches(['\n', '\r']),
            };
            offset += raw.len();
            line
        })
        .collect();

    if lines.iter().any(|line| line.text.trim() == statement) {
        tracing::debug!(path = %path.display(), statement, "registration already present");
        return Ok(Splice::Present);
    }

    let mut closing = lines
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, line)| !line.text.trim().is_empty());

    let outer = closing.next();
    let inner = closing.next();

    let inner_index = match (inner, outer) {
        (Some((inner_index, inner)), Some((_, outer)))
            if inner.text.trim() == "}" && outer.text.trim() == "}" =>
        {
            inner_index
        }
        (inner, outer) => {
            let offender = [outer, inner]
                .into_iter()
                .flatten()
                .find(|(_, line)| line.text.trim() != "}");
            let span = match offender {
                Some((_, line)) => SourceSpan::from((line.offset, line.text.len())),
                None => SourceSpan::from((content.len(), 0)),
            };
            return Err(Error::malformed_target(path, content, span));
        }
    };

    let level = indent.level_of(lines[inner_index].text);
    let inserted = format!("{}{statement}", indent.repeat(level + 1));

    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 1);
    out.extend(lines[..inner_index].iter().map(|line| line.text));
    out.push(&inserted);
    out.extend(lines[inner_index..].iter().map(|line| line.text));

    let ending = line_ending(content);
    let mut spliced = out.join(ending);
    if content.ends_with('\n') {
        spliced.push_str(ending);
    }
    Ok(Splice::Inserted(spliced))
}
