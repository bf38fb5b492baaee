use crate::GraphQLSourceSpan;
use crate::SourceLocation;

/// The optional source range of an AST node.
///
/// `Location` always compares equal to any other `Location`: node equality
/// is structural and ignores where the node came from.
#[derive(Clone, Debug, Default)]
pub struct Location(Option<GraphQLSourceSpan>);

impl Location {
    pub fn new(span: GraphQLSourceSpan) -> Self {
        Self(Some(span))
    }

    /// A location for synthesized nodes that have no source text.
    pub fn none() -> Self {
        Self(None)
    }

    pub fn span(&self) -> Option<&GraphQLSourceSpan> {
        self.0.as_ref()
    }

    /// Byte offset of the first character of the node.
    pub fn start(&self) -> Option<usize> {
        self.0.as_ref().map(|span| span.start_inclusive.byte_offset())
    }

    /// Byte offset just past the last character of the node.
    pub fn end(&self) -> Option<usize> {
        self.0.as_ref().map(|span| span.end_exclusive.byte_offset())
    }

    /// The 1-based line/column of the start of the node.
    pub fn source_location(&self) -> Option<SourceLocation> {
        self.0
            .as_ref()
            .map(|span| span.start_inclusive.to_source_location())
    }
}

impl PartialEq for Location {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl From<GraphQLSourceSpan> for Location {
    fn from(span: GraphQLSourceSpan) -> Self {
        Self::new(span)
    }
}
