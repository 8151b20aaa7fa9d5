/// Unit in which line lengths and absolute offsets are counted.
///
/// Editors disagree on what a "character" is: Xcode and CodeMirror count UTF-16 code
/// units, LSP servers usually count UTF-8 bytes. Every length the ledger reports and every
/// offset the mapper touches uses the same encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum OffsetEncoding {
    /// UTF-8 bytes.
    Utf8,
    /// UTF-16 code units.
    Utf16,
    /// Unicode scalar values.
    #[default]
    Chars,
}

impl OffsetEncoding {
    /// Length of `text` in this encoding.
    pub fn len_of(self, text: &str) -> usize {
        match self {
            OffsetEncoding::Utf8 => text.len(),
            OffsetEncoding::Utf16 => text.encode_utf16().count(),
            OffsetEncoding::Chars => text.chars().count(),
        }
    }

    /// Width of a single character in this encoding.
    pub fn char_len(self, ch: char) -> usize {
        match self {
            OffsetEncoding::Utf8 => ch.len_utf8(),
            OffsetEncoding::Utf16 => ch.len_utf16(),
            OffsetEncoding::Chars => 1,
        }
    }

    /// Converts a column in this encoding to a byte index into `text`.
    ///
    /// Returns `None` when `units` is past the end of `text` or falls inside a character
    /// (e.g. between the two halves of a surrogate pair).
    pub fn byte_index(self, text: &str, units: usize) -> Option<usize> {
        if self == OffsetEncoding::Utf8 {
            return (units <= text.len() && text.is_char_boundary(units)).then_some(units);
        }

        let mut count = 0usize;
        for (byte, ch) in text.char_indices() {
            if count == units {
                return Some(byte);
            }
            if count > units {
                return None;
            }
            count += self.char_len(ch);
        }

        (count == units).then_some(text.len())
    }
}
