//! String-literal skipping primitives
//!
//! Both scanners treat the buffer as opaque text: only quote and escape
//! classes matter here, so comment markers inside a literal are ignored.

use super::{NewlineBoundary, Scanner, SyntaxClass};
use crate::error::{Result, ScanError};

impl Scanner<'_> {
    /// Scan forward to the end of a string literal.
    ///
    /// `from` is the offset just past the opening quote; `quote` is the
    /// quote character that opened it (`"`, `'`, or a backtick). Returns
    /// the offset just past the matching closing quote.
    ///
    /// An escape skips the following character unconditionally, so an
    /// escaped quote never closes the string.
    pub fn scan_string_forward(&self, from: usize, quote: char) -> Result<usize> {
        self.report_start(
            "scan_string_forward",
            from,
            &format!("kind: {}", quote.escape_debug()),
        );
        let result = self.string_forward(from, quote);
        self.report_end("scan_string_forward", &result);
        result
    }

    fn string_forward(&self, from: usize, quote: char) -> Result<usize> {
        self.check_from(from)?;
        let stop = self.buffer().end();
        let mut pos = from;

        while let Some(ch) = self.buffer().char_at(pos) {
            pos += 1;

            match self.syntax_of(ch) {
                SyntaxClass::StringDelimiter if ch == quote => {
                    return Ok(pos);
                }
                SyntaxClass::Escape => {
                    // An escape as the very last character cannot be
                    // completed, let alone followed by a closing quote.
                    if pos == stop {
                        return Err(ScanError::UnterminatedString { at: pos });
                    }
                    // Ignore the next character.
                    pos += 1;
                }
                _ => {}
            }
        }

        Err(ScanError::UnterminatedString { at: pos })
    }

    /// Scan backward to the beginning of a string literal.
    ///
    /// `from` is the offset of (or just past) text inside the literal;
    /// `quote` is the quote character that closes it. Returns the offset of
    /// the opening quote.
    ///
    /// A quote whose preceding character is an escape is part of the
    /// literal, not its opening. Bare newlines follow the scanner's
    /// [`NewlineBoundary`] policy.
    pub fn scan_string_backward(&self, from: usize, quote: char) -> Result<usize> {
        self.report_start(
            "scan_string_backward",
            from,
            &format!("kind: {}", quote.escape_debug()),
        );
        let result = self.string_backward(from, quote);
        self.report_end("scan_string_backward", &result);
        result
    }

    fn string_backward(&self, from: usize, quote: char) -> Result<usize> {
        self.check_from(from)?;
        let mut pos = from;

        while pos > 0 {
            pos -= 1;
            let Some(ch) = self.buffer().char_at(pos) else {
                break;
            };

            if self.syntax_of(ch) == SyntaxClass::StringDelimiter && ch == quote {
                // Make sure the quote is not itself escaped.
                let quoted = pos > 0
                    && self
                        .buffer()
                        .char_at(pos - 1)
                        .is_some_and(|prev| self.syntax_of(prev) == SyntaxClass::Escape);
                if !quoted {
                    return Ok(pos);
                }
            }

            // A line break before any quote usually means the scan started
            // outside a string; soft-stop there when the policy allows.
            if ch == '\n' && self.newline_boundary() == NewlineBoundary::SoftStop {
                return Ok(pos);
            }
        }

        Err(ScanError::UnterminatedString { at: pos })
    }
}
