use reflow::{LineTerminator, OffsetTracker};

use crate::config::FormatConfig;
use crate::edit::{FormatError, FormatOutput};
use crate::session::FormatSession;

/// Replacement text for one whole line, addressed by its index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReplacement {
    pub line: usize,
    pub new_text: String,
}

impl LineReplacement {
    pub fn new(line: usize, new_text: impl Into<String>) -> Self {
        Self {
            line,
            new_text: new_text.into(),
        }
    }
}

/// Applies whole-line replacements and rebases tracked offsets through them.
///
/// Replacements may come in any order; they are applied in ascending line order. Two
/// replacements for the same line are rejected. `config.scope` is ignored.
pub fn apply_line_replacements(
    source: &str,
    mut replacements: Vec<LineReplacement>,
    tracker: impl Into<OffsetTracker>,
    config: &FormatConfig,
) -> Result<FormatOutput, FormatError> {
    replacements.sort_by_key(|replacement| replacement.line);
    if replacements.windows(2).any(|w| w[0].line == w[1].line) {
        return Err(FormatError::OverlappingEdits);
    }

    let mut session = FormatSession::new(source, tracker, config)?;
    for replacement in replacements {
        session.replace_line(replacement.line, replacement.new_text)?;
    }
    Ok(session.finish())
}

/// Lines of `formatted` that differ from `original`, as replacements.
///
/// Both buffers are split on every `\r\n`, `\r` and `\n`; only line text is compared. The
/// two buffers must have the same number of lines.
pub fn diff_lines(original: &str, formatted: &str) -> Result<Vec<LineReplacement>, FormatError> {
    let (before, _) = LineTerminator::split_mixed(original);
    let (after, _) = LineTerminator::split_mixed(formatted);
    if before.len() != after.len() {
        return Err(FormatError::LineCountChanged);
    }

    Ok(before
        .into_iter()
        .zip(after)
        .enumerate()
        .filter(|(_, (old, new))| old != new)
        .map(|(line, (_, new_text))| LineReplacement { line, new_text })
        .collect())
}
