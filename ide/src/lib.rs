//! Formatting driver for editor integrations.
//!
//! Rewrites a buffer line by line through a [`LineFormatter`] and keeps carets and
//! selection bounds pointing at the same place. Offsets are absolute and counted in the
//! configured [`OffsetEncoding`]; see the `reflow` crate for the remapping rules.

mod config;
mod edit;
mod formatter;
mod session;
mod text_edit;

pub use config::{FormatConfig, FormatScope};
pub use edit::{FormatError, FormatOutput, format_lines, rebase_offsets};
pub use formatter::LineFormatter;
pub use reflow::{
    ClampPolicy, LineEdit, LineLedger, LineTerminator, OffsetEncoding, OffsetTracker, Position,
    Selection,
};
pub use session::FormatSession;
pub use text_edit::{LineReplacement, apply_line_replacements, diff_lines};

/// Formats the whole buffer and rebases the editor's selections.
///
/// Convenience over [`format_lines`] for the common caret/selection case.
pub fn format<F>(
    source: &str,
    selections: &[Selection],
    formatter: &mut F,
    config: &FormatConfig,
) -> Result<FormatOutput, FormatError>
where
    F: LineFormatter + ?Sized,
{
    format_lines(
        source,
        OffsetTracker::from_selections(selections),
        formatter,
        config,
    )
}
