use std::collections::BTreeSet;
use std::fmt;

use reflow::{LineLedger, OffsetTracker, Position, Selection};

use crate::config::{FormatConfig, FormatScope};
use crate::formatter::LineFormatter;
use crate::session::FormatSession;
use crate::text_edit::{apply_line_replacements, diff_lines};

/// Result of a formatting pass: the rewritten buffer and the rebased offsets.
///
/// `offsets` has the same length and order as the tracker the pass started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOutput {
    pub source: String,
    pub offsets: Vec<usize>,
    /// Indices of the lines whose text changed, ascending.
    pub changed_lines: Vec<usize>,
    pub(crate) lines: Vec<String>,
    pub(crate) ledger: LineLedger,
}

impl FormatOutput {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_unchanged(&self) -> bool {
        self.changed_lines.is_empty()
    }

    /// Offsets paired back into selections, see [`OffsetTracker::selections`].
    pub fn selections(&self) -> Vec<Selection> {
        OffsetTracker::new(self.offsets.clone()).selections()
    }

    /// Offsets as line/column positions in the formatted buffer.
    pub fn positions(&self) -> Vec<Position> {
        self.offsets
            .iter()
            .map(|&offset| self.ledger.position_of(offset, &self.lines))
            .collect()
    }
}

/// Deterministic formatting errors. A host reports all of them as "formatting failed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    FormatterFailed,
    InvalidOffset,
    InvalidLine,
    InvalidRange,
    LineOutOfOrder,
    MultilineReplacement,
    OverlappingEdits,
    LineCountChanged,
}

impl FormatError {
    pub fn message(self) -> &'static str {
        match self {
            FormatError::FormatterFailed => "Formatter failed",
            FormatError::InvalidOffset => "Invalid offset",
            FormatError::InvalidLine => "Invalid line",
            FormatError::InvalidRange => "Invalid line range",
            FormatError::LineOutOfOrder => "Line replaced out of order",
            FormatError::MultilineReplacement => "Replacement contains a line break",
            FormatError::OverlappingEdits => "Overlapping edits",
            FormatError::LineCountChanged => "Line count changed",
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FormatError {}

/// Runs `formatter` over the lines selected by `config.scope`, in ascending order, and
/// rebases the tracked offsets after every line it rewrites.
pub fn format_lines<F>(
    source: &str,
    tracker: impl Into<OffsetTracker>,
    formatter: &mut F,
    config: &FormatConfig,
) -> Result<FormatOutput, FormatError>
where
    F: LineFormatter + ?Sized,
{
    let mut session = FormatSession::new(source, tracker, config)?;
    let targets = target_lines(&session, config.scope)?;
    tracing::debug!(
        lines = session.line_count(),
        targets = targets.len(),
        offsets = session.offsets().len(),
        "format pass"
    );

    for index in targets {
        let replacement = formatter.format_line(index, &session.lines()[index])?;
        if let Some(text) = replacement {
            session.replace_line(index, text)?;
        }
    }

    Ok(session.finish())
}

/// Rebases offsets from `original` onto `formatted`, a whole-buffer rewrite with the same
/// line count. Only lines whose text differs are treated as edited.
pub fn rebase_offsets(
    original: &str,
    formatted: &str,
    tracker: impl Into<OffsetTracker>,
    config: &FormatConfig,
) -> Result<FormatOutput, FormatError> {
    let replacements = diff_lines(original, formatted)?;
    apply_line_replacements(original, replacements, tracker, config)
}

fn target_lines(session: &FormatSession, scope: FormatScope) -> Result<Vec<usize>, FormatError> {
    let line_count = session.line_count();
    match scope {
        FormatScope::Document => Ok((0..line_count).collect()),
        FormatScope::Lines { start, end } => {
            if start > end || end > line_count {
                return Err(FormatError::InvalidRange);
            }
            Ok((start..end).collect())
        }
        FormatScope::Selections => {
            let ledger = session.ledger();
            let mut lines = BTreeSet::new();
            // A trailing unpaired offset is a bare caret.
            for bounds in session.offsets().chunks(2) {
                let first = ledger.position_of(bounds[0], session.lines()).line;
                let last = ledger.position_of(bounds[bounds.len() - 1], session.lines()).line;
                lines.extend(first.min(last)..=first.max(last));
            }
            Ok(lines.into_iter().collect())
        }
    }
}
