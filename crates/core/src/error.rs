use thiserror::Error;

/// Source location information for markup error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Error raised when raw markup cannot be serialized into a document.
///
/// Triggered by malformed constructs in the source text: unclosed JSX
/// elements, invalid embedded expressions, and similar parser rejections.
/// A serialization failure is terminal for the page being built and never
/// affects sibling pages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("markup error at {location}: {message}")]
pub struct SerializeError {
    /// Parser error message.
    pub message: String,
    /// Where in the source text the parser gave up.
    pub location: SourceLocation,
}

impl SerializeError {
    /// Create a serialization error with location.
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            location: SourceLocation::new(line, column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_location_and_message() {
        let err = SerializeError::new("unexpected end of file", 3, 7);
        assert_eq!(err.to_string(), "markup error at 3:7: unexpected end of file");
    }
}
