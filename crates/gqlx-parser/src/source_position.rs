/// A position within GraphQL source text, with dual column tracking.
///
/// This is a pure data struct with no mutation methods. The lexer computes
/// position values as it scans input.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col_utf8`: character count within the current line
/// - `col_utf16`: optional UTF-16 code unit offset within the current line
/// - `byte_offset`: byte offset within the whole document
///
/// Response-facing locations (see [`SourceLocation`](crate::SourceLocation))
/// are 1-based; use [`SourcePosition::to_source_location`] to convert.
///
/// # Dual Column Tracking
///
/// For ASCII text both columns are equal. For characters outside the Basic
/// Multilingual Plane (e.g. emoji) `col_utf8` advances by 1 while
/// `col_utf16` advances by 2.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SourcePosition {
    /// Line number (0-based: first line is 0)
    line: usize,

    /// Character count within current line (0-based)
    col_utf8: usize,

    /// UTF-16 code unit offset within current line (0-based), if available.
    col_utf16: Option<usize>,

    /// Byte offset from start of document (0-based)
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new SourcePosition.
    ///
    /// # Arguments
    /// - `line`: 0-based line number (0 = first line)
    /// - `col_utf8`: 0-based character count within current line
    /// - `col_utf16`: 0-based UTF-16 code unit offset within current line,
    ///   or `None` if not available
    /// - `byte_offset`: 0-based byte offset from document start
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: Option<usize>,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character count within the current line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit offset within the current line,
    /// if available.
    pub fn col_utf16(&self) -> Option<usize> {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Converts to the 1-based `(line, column)` pair used in responses.
    pub fn to_source_location(&self) -> crate::SourceLocation {
        crate::SourceLocation {
            line: self.line + 1,
            column: self.col_utf8 + 1,
        }
    }
}
