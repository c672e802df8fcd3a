use std::fmt;

use crate::error::ErrorKind;

/// A host-facing description of a failed run.
///
/// Carries the error's kind, its message and the zero-based position of the
/// offending source, and can render the classic two-line caret excerpt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Which phase failed.
    pub kind:    ErrorKind,
    /// The error message, without position.
    pub message: String,
    /// Zero-based row.
    pub row:     usize,
    /// Zero-based column, in characters.
    pub col:     usize,
}

impl Diagnostic {
    /// Renders a header line followed by the offending source line and a
    /// caret under the error column.
    ///
    /// # Example
    /// ```
    /// let source = "var a = 1\nvar b = 007";
    /// let error = fimp::parse(source).unwrap_err();
    ///
    /// assert_eq!(error.diagnostic().render(source),
    ///            "2:9 lexical error: Leading zeros are not allowed: '007'.\n\
    ///             var b = 007\n\
    ///             ~~~~~~~~^");
    /// ```
    #[must_use]
    pub fn render(&self, source: &str) -> String {
        let line = source.lines().nth(self.row).unwrap_or_default();
        format!("{self}\n{line}\n{}^", "~".repeat(self.col))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "{}:{} {} error: {}",
               self.row + 1,
               self.col + 1,
               self.kind,
               self.message)
    }
}
