//! One formatting pass over a buffer.
//!
//! The session owns the working line sequence and the tracked offsets. Lines are replaced
//! in ascending index order and the offsets are rebased after every replacement, so the
//! tracker always describes the buffer as it currently stands.

use reflow::{
    ClampPolicy, LineEdit, LineLedger, LineTerminator, OffsetMapper, OffsetTracker, Selection,
};

use crate::config::FormatConfig;
use crate::edit::{FormatError, FormatOutput};

#[derive(Debug, Clone)]
pub struct FormatSession {
    lines: Vec<String>,
    ledger: LineLedger,
    clamp: ClampPolicy,
    tracker: OffsetTracker,
    next_line: usize,
    changed_lines: Vec<usize>,
}

impl FormatSession {
    /// Splits `source` into lines and takes ownership of the offsets to track.
    ///
    /// Every `\r\n`, `\r` and `\n` ends a line. The working buffer is normalized to the
    /// terminator resolved by `config`, and the tracked offsets are converted to that
    /// normalized buffer, so a mixed-ending source comes out with uniform endings and
    /// offsets that point into it. Every offset must address a caret location in `source`:
    /// within bounds, not between `\r` and `\n`, and not inside a multi-unit character.
    pub fn new(
        source: &str,
        tracker: impl Into<OffsetTracker>,
        config: &FormatConfig,
    ) -> Result<Self, FormatError> {
        let ledger = config.ledger(source);
        let (lines, terminators) = LineTerminator::split_mixed(source);
        let mut tracker = tracker.into();

        for offset in tracker.offsets_mut() {
            match normalize_offset(*offset, &lines, &terminators, &ledger) {
                Some(normalized) => *offset = normalized,
                None => {
                    tracing::debug!(offset = *offset, "rejecting offset");
                    return Err(FormatError::InvalidOffset);
                }
            }
        }

        Ok(Self {
            lines,
            ledger,
            clamp: config.clamp,
            tracker,
            next_line: 0,
            changed_lines: Vec::new(),
        })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn ledger(&self) -> &LineLedger {
        &self.ledger
    }

    pub fn offsets(&self) -> &[usize] {
        self.tracker.offsets()
    }

    pub fn selections(&self) -> Vec<Selection> {
        self.tracker.selections()
    }

    /// Replaces line `index` with `text` and rebases the tracked offsets.
    ///
    /// Returns the applied edit, or `None` when `text` equals the current line. Each line
    /// can be visited once, and only after every lower index that was visited.
    pub fn replace_line(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<Option<LineEdit>, FormatError> {
        let text = text.into();
        if index >= self.lines.len() {
            return Err(FormatError::InvalidLine);
        }
        if index < self.next_line {
            return Err(FormatError::LineOutOfOrder);
        }
        if text.contains(['\n', '\r']) {
            return Err(FormatError::MultilineReplacement);
        }

        self.next_line = index + 1;
        if self.lines[index] == text {
            return Ok(None);
        }

        let old_len = self.ledger.line_len(&self.lines[index]);
        self.lines[index] = text;

        let edit = OffsetMapper::new(&self.ledger).with_clamp(self.clamp).remap(
            self.tracker.offsets_mut(),
            &self.lines,
            index,
            old_len,
        );
        self.changed_lines.push(index);
        tracing::debug!(
            line = index,
            start = edit.line_start,
            delta = edit.delta(),
            "replaced line"
        );

        Ok(Some(edit))
    }

    pub fn finish(self) -> FormatOutput {
        FormatOutput {
            source: self.ledger.terminator().join(&self.lines),
            offsets: self.tracker.into_inner(),
            changed_lines: self.changed_lines,
            lines: self.lines,
            ledger: self.ledger,
        }
    }
}

/// Converts an offset into `source` (lines ended by `terminators`) to the same location in
/// the buffer joined with the ledger's terminator.
fn normalize_offset(
    offset: usize,
    lines: &[String],
    terminators: &[LineTerminator],
    ledger: &LineLedger,
) -> Option<usize> {
    let mut start = 0usize;
    for (index, line) in lines.iter().enumerate() {
        let len = ledger.line_len(line);
        if offset <= start + len {
            let column = offset - start;
            ledger.encoding().byte_index(line, column)?;
            return Some(ledger.start_offset_of(index, lines) + column);
        }

        // The last line has no terminator, so anything past it is out of bounds.
        start += len + terminators.get(index)?.width();
        if offset < start {
            return None;
        }
    }
    None
}
