//! Non-fatal diagnostics produced while parsing.
//!
//! Anomalous input never aborts a parse. Instead the model records a
//! [`Diagnostic`] and keeps going, so the caller always gets a complete table
//! plus a list of what looked wrong.
//!
//! # Examples
//!
//! ```
//! use csvmodel::Diagnostic;
//!
//! let diagnostic = Diagnostic::RowWidthMismatch {
//!     row: 1,
//!     expected: 3,
//!     actual: 2,
//! };
//! assert_eq!(diagnostic.row(), 1);
//! assert_eq!(diagnostic.kind(), "row_width_mismatch");
//! assert_eq!(diagnostic.to_string(), "row 1: expected 3 fields, got 2");
//! ```

/// A non-fatal report about the parsed input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Diagnostic {
    /// A data row produced a different number of fields than the table has
    /// columns.
    ///
    /// The row is still stored: missing trailing cells stay unset and extra
    /// fields are dropped.
    RowWidthMismatch {
        /// Zero-based index of the row in the store.
        row: usize,
        /// Column count established by the header or the first data row.
        expected: usize,
        /// Number of fields the row actually produced.
        actual: usize,
    },
}

impl Diagnostic {
    /// Returns the zero-based store row this diagnostic refers to.
    #[must_use]
    pub fn row(&self) -> usize {
        match self {
            Self::RowWidthMismatch { row, .. } => *row,
        }
    }

    /// Returns a static string identifying the diagnostic kind.
    ///
    /// Useful for grouping diagnostics without matching on variants.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RowWidthMismatch { .. } => "row_width_mismatch",
        }
    }

    /// Returns a human-readable description.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::RowWidthMismatch {
                row,
                expected,
                actual,
            } => format!("row {row}: expected {expected} fields, got {actual}"),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::error::Error for Diagnostic {}
