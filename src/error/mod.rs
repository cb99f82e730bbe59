//! Centralized error handling for Listnav
//! Defines the failure taxonomy shared by every scan primitive

use std::fmt;

/// A scan failure. All variants are terminal for the current scan call;
/// nothing is retried internally and no partial result is returned.
///
/// The integration layer is expected to catch these at the command
/// boundary, log them, and leave the cursor unmoved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A string literal begun in the scanned range has no matching closing
    /// quote before the buffer boundary.
    UnterminatedString {
        /// Offset where the scan gave up
        at: usize,
    },
    /// The scan exhausted the buffer moving forward while nesting depth was
    /// still nonzero, or a forward stop character was never found.
    UnexpectedEndOfFile {
        /// Offset where the scan gave up
        at: usize,
    },
    /// The scan exhausted the buffer moving backward while nesting depth was
    /// still nonzero, or a backward stop sequence was never found.
    UnexpectedBeginningOfFile {
        /// Offset where the scan gave up
        at: usize,
    },
    /// Depth crossed below the permitted minimum: the document contains more
    /// closing than opening delimiters relative to the starting depth, or the
    /// caller requested more enclosing-list exits than exist.
    DepthUnderflow {
        /// Offset where depth fell below the minimum
        at: usize,
    },
    /// The language id is not one of the supported C-like profiles.
    UnsupportedLanguage(String),
    /// A configured opening-delimiter character is outside the allowed set.
    InvalidConfiguration(char),
    /// A starting offset outside the buffer's `[0, len]` range.
    OutOfRange {
        /// The offending offset
        offset: usize,
        /// Buffer length at the time of the call
        len: usize,
    },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::UnterminatedString { at } => {
                write!(f, "Unbalanced string missing quote at offset {at}")
            }
            ScanError::UnexpectedEndOfFile { at } => {
                write!(f, "Unexpected end of file at offset {at}")
            }
            ScanError::UnexpectedBeginningOfFile { at } => {
                write!(f, "Unexpected beginning of file at offset {at}")
            }
            ScanError::DepthUnderflow { at } => {
                write!(f, "Depth fell below minimum at offset {at}")
            }
            ScanError::UnsupportedLanguage(id) => {
                write!(f, "Unsupported language: {id}")
            }
            ScanError::InvalidConfiguration(ch) => {
                write!(f, "Invalid list opening character: {ch:?}")
            }
            ScanError::OutOfRange { offset, len } => {
                write!(f, "Offset {offset} out of bounds (len: {len})")
            }
        }
    }
}

impl std::error::Error for ScanError {}

/// Result alias for Listnav operations
pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
