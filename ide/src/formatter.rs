use crate::edit::FormatError;

/// The style engine that decides how a single line is rewritten.
///
/// Returning `Ok(None)` keeps the line as is. Closures of the form
/// `FnMut(usize, &str) -> Option<String>` implement this trait directly.
pub trait LineFormatter {
    fn format_line(&mut self, index: usize, line: &str) -> Result<Option<String>, FormatError>;
}

impl<F> LineFormatter for F
where
    F: FnMut(usize, &str) -> Option<String>,
{
    fn format_line(&mut self, index: usize, line: &str) -> Result<Option<String>, FormatError> {
        Ok(self(index, line))
    }
}
