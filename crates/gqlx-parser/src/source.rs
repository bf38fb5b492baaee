use std::path::PathBuf;

/// A 1-based `(line, column)` pair as it appears in GraphQL responses.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// An immutable GraphQL source text paired with a display name.
///
/// Line/column pairs are derived on demand from byte offsets, so a `Source`
/// can be shared freely between the parser and error reporting.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Source {
    body: String,
    name: String,
    file_path: Option<PathBuf>,
}

impl Source {
    pub const DEFAULT_NAME: &'static str = "GraphQL request";

    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: Self::DEFAULT_NAME.to_string(),
            file_path: None,
        }
    }

    pub fn with_name(body: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: name.into(),
            file_path: None,
        }
    }

    /// Reads a source from disk, naming it after its path.
    pub fn from_file(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        let body = std::fs::read_to_string(&path)?;
        Ok(Self {
            body,
            name: path.display().to_string(),
            file_path: Some(path),
        })
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Maps a byte offset to a 1-based line and (character) column.
    ///
    /// `\r\n`, `\n` and a lone `\r` all terminate a line. Offsets past the end
    /// of the body clamp to the end; offsets inside a multi-byte character
    /// resolve to that character.
    pub fn location_at(&self, byte_offset: usize) -> SourceLocation {
        let mut line = 1;
        let mut column = 1;
        let mut chars = self.body.char_indices().peekable();
        while let Some((idx, ch)) = chars.next() {
            if idx >= byte_offset {
                break;
            }
            match ch {
                '\n' => {
                    line += 1;
                    column = 1;
                },
                '\r' => {
                    if let Some((next_idx, '\n')) = chars.peek().copied()
                        && next_idx < byte_offset
                    {
                        chars.next();
                    }
                    line += 1;
                    column = 1;
                },
                _ => column += 1,
            }
        }
        SourceLocation { line, column }
    }
}

impl From<&str> for Source {
    fn from(body: &str) -> Self {
        Self::new(body)
    }
}

impl From<String> for Source {
    fn from(body: String) -> Self {
        Self::new(body)
    }
}
