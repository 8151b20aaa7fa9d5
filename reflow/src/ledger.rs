use crate::encoding::OffsetEncoding;

/// Separator placed between consecutive lines when the buffer is joined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LineTerminator {
    #[default]
    Lf,
    CrLf,
    Cr,
}

impl LineTerminator {
    pub fn as_str(self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
            LineTerminator::Cr => "\r",
        }
    }

    /// Width of the terminator. ASCII only, so identical in every `OffsetEncoding`.
    pub fn width(self) -> usize {
        self.as_str().len()
    }

    /// Returns the kind of the first terminator found in `source`.
    pub fn detect(source: &str) -> Option<Self> {
        let bytes = source.as_bytes();
        let idx = bytes.iter().position(|&b| b == b'\n' || b == b'\r')?;
        Some(match (bytes[idx], bytes.get(idx + 1)) {
            (b'\r', Some(b'\n')) => LineTerminator::CrLf,
            (b'\r', _) => LineTerminator::Cr,
            _ => LineTerminator::Lf,
        })
    }

    /// Splits `source` on every `\r\n`, `\r` and `\n`.
    ///
    /// Returns the lines and, for every line but the last, the terminator that ended it.
    /// A trailing terminator produces a final empty line and an empty source produces one
    /// empty line, so joining with the returned terminators yields `source` again.
    pub fn split_mixed(source: &str) -> (Vec<String>, Vec<LineTerminator>) {
        let bytes = source.as_bytes();
        let mut lines = Vec::new();
        let mut terminators = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < bytes.len() {
            let terminator = match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => LineTerminator::CrLf,
                b'\r' => LineTerminator::Cr,
                b'\n' => LineTerminator::Lf,
                _ => {
                    i += 1;
                    continue;
                }
            };
            lines.push(source[start..i].to_owned());
            terminators.push(terminator);
            i += terminator.width();
            start = i;
        }
        lines.push(source[start..].to_owned());

        (lines, terminators)
    }

    pub fn join<S: AsRef<str>>(self, lines: &[S]) -> String {
        let mut out = String::new();
        for (index, line) in lines.iter().enumerate() {
            if index > 0 {
                out.push_str(self.as_str());
            }
            out.push_str(line.as_ref());
        }
        out
    }
}

/// A line/column position, both 0-based. `column` is counted in the ledger's encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Maps line indices to absolute start offsets for a line sequence.
///
/// Nothing is cached: every query walks the lines it needs, so the ledger stays correct
/// while the driver replaces lines in place. Callers that need repeated lookups on an
/// unchanging sequence can memoize the results themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineLedger {
    terminator: LineTerminator,
    encoding: OffsetEncoding,
}

impl LineLedger {
    pub fn new(terminator: LineTerminator, encoding: OffsetEncoding) -> Self {
        Self {
            terminator,
            encoding,
        }
    }

    pub fn terminator(&self) -> LineTerminator {
        self.terminator
    }

    pub fn encoding(&self) -> OffsetEncoding {
        self.encoding
    }

    pub fn terminator_width(&self) -> usize {
        self.terminator.width()
    }

    pub fn line_len(&self, line: &str) -> usize {
        self.encoding.len_of(line)
    }

    /// Absolute offset of the first character of `lines[line_index]`.
    ///
    /// # Panics
    ///
    /// Panics if `line_index >= lines.len()`. The driver always passes an index into the
    /// sequence it owns, so an out-of-range index is a bug in the caller.
    pub fn start_offset_of<S: AsRef<str>>(&self, line_index: usize, lines: &[S]) -> usize {
        assert!(
            line_index < lines.len(),
            "line index {} out of range for {} lines",
            line_index,
            lines.len()
        );

        let text: usize = lines[..line_index]
            .iter()
            .map(|line| self.line_len(line.as_ref()))
            .sum();
        text + line_index * self.terminator_width()
    }

    /// Total length of the joined buffer.
    pub fn buffer_len<S: AsRef<str>>(&self, lines: &[S]) -> usize {
        let text: usize = lines.iter().map(|line| self.line_len(line.as_ref())).sum();
        text + lines.len().saturating_sub(1) * self.terminator_width()
    }

    /// Converts an absolute offset to a position.
    ///
    /// Offsets past the end clamp to the end of the last line. An offset that lands inside a
    /// multi-unit terminator (between `\r` and `\n`) maps to the end of its line.
    pub fn position_of<S: AsRef<str>>(&self, offset: usize, lines: &[S]) -> Position {
        let mut start = 0usize;
        for (index, line) in lines.iter().enumerate() {
            let len = self.line_len(line.as_ref());
            let next = start + len + self.terminator_width();
            if offset < next || index + 1 == lines.len() {
                return Position {
                    line: index,
                    column: offset.saturating_sub(start).min(len),
                };
            }
            start = next;
        }
        Position::default()
    }

    /// Converts a position to an absolute offset.
    ///
    /// Returns `None` if the line is out of range or the column is past the line end.
    pub fn offset_of<S: AsRef<str>>(&self, position: Position, lines: &[S]) -> Option<usize> {
        let line = lines.get(position.line)?;
        if position.column > self.line_len(line.as_ref()) {
            return None;
        }
        Some(self.start_offset_of(position.line, lines) + position.column)
    }

    /// Whether `offset` addresses a real caret location in `lines`: within the buffer, not
    /// inside a terminator, and not inside a multi-unit character.
    pub fn is_boundary<S: AsRef<str>>(&self, offset: usize, lines: &[S]) -> bool {
        if lines.is_empty() || offset > self.buffer_len(lines) {
            return false;
        }

        let position = self.position_of(offset, lines);
        if self.offset_of(position, lines) != Some(offset) {
            return false;
        }

        let line = lines[position.line].as_ref();
        self.encoding.byte_index(line, position.column).is_some()
    }
}
