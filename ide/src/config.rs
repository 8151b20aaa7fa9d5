use reflow::{ClampPolicy, LineLedger, LineTerminator, OffsetEncoding};
use serde::{Deserialize, Serialize};

/// Which lines a formatting pass hands to the line formatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum FormatScope {
    /// Every line of the buffer.
    #[default]
    Document,
    /// Lines `start..end` (half-open).
    Lines { start: usize, end: usize },
    /// Every line touched by a tracked selection or caret.
    Selections,
}

/// Options for one formatting request.
///
/// Deserializes from camelCase JSON; every field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatConfig {
    /// `None` detects the terminator from the source and falls back to `\n`.
    pub terminator: Option<LineTerminator>,
    pub encoding: OffsetEncoding,
    pub clamp: ClampPolicy,
    pub scope: FormatScope,
}

impl FormatConfig {
    pub fn resolve_terminator(&self, source: &str) -> LineTerminator {
        self.terminator
            .or_else(|| LineTerminator::detect(source))
            .unwrap_or_default()
    }

    pub fn ledger(&self, source: &str) -> LineLedger {
        LineLedger::new(self.resolve_terminator(source), self.encoding)
    }
}
