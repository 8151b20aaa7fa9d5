//! Rebases tracked offsets through a single rewritten line.
//!
//! The driver replaces lines one at a time, in ascending index order, and calls
//! [`OffsetMapper::remap`] after each replacement. Because the line start is computed from
//! the already-updated sequence, every call sees the deltas of all earlier lines in the
//! same pass. Calling out of order reads stale line starts and corrupts offsets on later
//! lines.

use crate::ledger::LineLedger;

/// Where an offset that fell inside a rewritten line is pinned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ClampPolicy {
    /// End of the replacement text; the caret follows the edit.
    #[default]
    LineEnd,
    /// Start of the rewritten line.
    LineStart,
}

/// One line replacement, expressed in absolute offsets of the current pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineEdit {
    pub line_start: usize,
    pub old_len: usize,
    pub new_len: usize,
}

impl LineEdit {
    /// End of the line before the replacement.
    pub fn old_end(&self) -> usize {
        self.line_start + self.old_len
    }

    /// End of the line after the replacement.
    pub fn new_end(&self) -> usize {
        self.line_start + self.new_len
    }

    pub fn delta(&self) -> isize {
        self.new_len as isize - self.old_len as isize
    }

    pub fn is_noop(&self) -> bool {
        self.old_len == self.new_len
    }

    /// Maps an offset taken before this edit to the equivalent offset after it.
    ///
    /// - `offset <= line_start`: unchanged.
    /// - `line_start < offset <= old_end`: pinned according to `clamp`.
    /// - `offset > old_end`: shifted by the length delta.
    ///
    /// An edit that keeps the line length leaves every offset in place. `offset` must lie
    /// within the buffer the edit was taken from; the shifted result is then bounded by the
    /// length of the rewritten buffer and cannot overflow.
    pub fn map(&self, offset: usize, clamp: ClampPolicy) -> usize {
        if self.is_noop() || offset <= self.line_start {
            return offset;
        }

        if offset <= self.old_end() {
            return match clamp {
                ClampPolicy::LineEnd => self.new_end(),
                ClampPolicy::LineStart => self.line_start,
            };
        }

        // offset > old_end >= old_len, so this never underflows.
        offset - self.old_len + self.new_len
    }
}

/// Applies line edits to a set of offsets, using an explicit ledger for line geometry.
#[derive(Debug, Clone, Copy)]
pub struct OffsetMapper<'a> {
    ledger: &'a LineLedger,
    clamp: ClampPolicy,
}

impl<'a> OffsetMapper<'a> {
    pub fn new(ledger: &'a LineLedger) -> Self {
        Self {
            ledger,
            clamp: ClampPolicy::default(),
        }
    }

    pub fn with_clamp(mut self, clamp: ClampPolicy) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn clamp(&self) -> ClampPolicy {
        self.clamp
    }

    /// Rebases `offsets` in place after `lines[edited_line_index]` has been rewritten.
    ///
    /// `old_line_len` must be the length of the text the caller just replaced. It cannot be
    /// checked here; a wrong value yields wrong but still non-negative offsets. Entries are
    /// never reordered, added or removed.
    ///
    /// Every offset must lie within the buffer as it stood before the edit.
    ///
    /// # Panics
    ///
    /// Panics if `edited_line_index >= lines.len()`. In debug builds, also panics if an
    /// offset lies past the end of the buffer before the edit.
    pub fn remap<S: AsRef<str>>(
        &self,
        offsets: &mut [usize],
        lines: &[S],
        edited_line_index: usize,
        old_line_len: usize,
    ) -> LineEdit {
        let line_start = self.ledger.start_offset_of(edited_line_index, lines);
        let new_len = self.ledger.line_len(lines[edited_line_index].as_ref());
        let edit = LineEdit {
            line_start,
            old_len: old_line_len,
            new_len,
        };
        debug_assert!(
            {
                let old_total = self.ledger.buffer_len(lines) - new_len + old_line_len;
                offsets.iter().all(|&offset| offset <= old_total)
            },
            "offset past end of buffer"
        );

        if edit.is_noop() {
            return edit;
        }

        for offset in offsets.iter_mut() {
            let mapped = edit.map(*offset, self.clamp);
            if mapped != *offset {
                tracing::trace!(
                    line = edited_line_index,
                    from = *offset,
                    to = mapped,
                    "remap offset"
                );
                *offset = mapped;
            }
        }

        edit
    }
}
