/// A caret or selection expressed as two absolute offsets.
///
/// `start` is the anchor and `end` the head; a caret has `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }
}

/// Owns the offsets that must survive a formatting pass.
///
/// The set is fixed at construction: values may change, but entries are never added,
/// removed or reordered, so index `i` keeps whatever role the caller gave it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetTracker {
    offsets: Vec<usize>,
}

impl OffsetTracker {
    pub fn new(offsets: Vec<usize>) -> Self {
        Self { offsets }
    }

    /// Tracks two offsets per selection: `[s0.start, s0.end, s1.start, s1.end, ...]`.
    pub fn from_selections(selections: &[Selection]) -> Self {
        let offsets = selections
            .iter()
            .flat_map(|selection| [selection.start, selection.end])
            .collect();
        Self { offsets }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<usize> {
        self.offsets.get(index).copied()
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Mutable view for the mapper. A slice, so the length cannot change.
    pub fn offsets_mut(&mut self) -> &mut [usize] {
        &mut self.offsets
    }

    /// Pairs the offsets back into selections. A trailing unpaired offset is ignored.
    pub fn selections(&self) -> Vec<Selection> {
        self.offsets
            .chunks_exact(2)
            .map(|pair| Selection::new(pair[0], pair[1]))
            .collect()
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.offsets
    }
}

impl From<Vec<usize>> for OffsetTracker {
    fn from(offsets: Vec<usize>) -> Self {
        Self::new(offsets)
    }
}

impl From<&[Selection]> for OffsetTracker {
    fn from(selections: &[Selection]) -> Self {
        Self::from_selections(selections)
    }
}
