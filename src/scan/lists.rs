//! Balanced-depth list scanning and the navigation operations
//!
//! The list scanner walks the buffer in either direction, counting nesting
//! depth for the configured delimiters and delegating to the primitive
//! scanners to jump past whole string literals and comments. Each of the
//! navigation operations is a particular `(count, depth)` argument pair.

use super::{classify, Scanner, SyntaxClass};
use crate::error::{Result, ScanError};

impl Scanner<'_> {
    /// Scan for `count` list boundaries starting at `from`.
    ///
    /// Positive `count` scans forward, negative backward; the magnitude is
    /// the number of boundaries to cross. `depth` is the initial nesting
    /// level: a positive value exits that many lists enclosing `from`, a
    /// negative value descends into nested lists, zero finds a sibling.
    ///
    /// By list we mean something that can be balanced like `()` or `{}` or
    /// `[]`. Although `""` looks balanced, quotes are not lists; string
    /// literals are skipped whole, as are comments.
    ///
    /// Returns the offset where scanning stopped: one past the matched
    /// delimiter moving forward, exactly at it moving backward.
    pub fn scan_lists(&self, from: usize, count: i32, depth: i32) -> Result<usize> {
        self.report_start("scan_lists", from, &format!("count: {count} depth: {depth}"));
        let result = self.lists(from, count, depth);
        self.report_end("scan_lists", &result);
        result
    }

    fn lists(&self, from: usize, mut count: i32, mut depth: i32) -> Result<usize> {
        self.check_from(from)?;

        let initial_depth = depth;
        // Fail if depth gets below min_depth. A positive starting depth may
        // legitimately pass through intermediate levels down to zero; any
        // other start must never sink below where it began.
        let min_depth = depth.min(0);

        let mut pos = from;

        while count > 0 {
            let stop = self.buffer().end();

            'count_once: while pos != stop {
                let Some(ch) = self.buffer().char_at(pos) else {
                    break;
                };
                pos += 1;

                let ch1 = if pos != stop {
                    self.buffer().char_at(pos)
                } else {
                    None
                };

                match classify(self.delimiters(), ch, ch1) {
                    SyntaxClass::Open => {
                        depth += 1;
                        if depth == 0 {
                            break 'count_once;
                        }
                    }
                    SyntaxClass::Close => {
                        depth -= 1;
                        if depth == 0 {
                            break 'count_once;
                        }
                    }
                    SyntaxClass::StringDelimiter => {
                        pos = self.scan_string_forward(pos, ch)?;
                    }
                    SyntaxClass::Escape => {
                        // A stray escape only occurs when the scan started
                        // in the middle of a string; do our best.
                        if pos == stop {
                            return Err(ScanError::UnexpectedEndOfFile { at: pos });
                        }
                        // Ignore the next character.
                        pos += 1;
                    }
                    SyntaxClass::SingleLineCommentStart => {
                        // Classification verified the next character is the
                        // second '/'; step past it before seeking the newline.
                        pos += 1;
                        pos = self.scan_forward_until(pos, '\n', None)?;
                    }
                    SyntaxClass::MultiLineCommentStart => {
                        pos = self.scan_forward_until(pos, '*', Some('/'))?;
                    }
                    SyntaxClass::MultiLineCommentEnd
                    | SyntaxClass::Word
                    | SyntaxClass::Whitespace => {}
                }

                if depth < min_depth {
                    return Err(ScanError::DepthUnderflow { at: pos });
                }
            }

            if pos == stop && depth != 0 {
                return Err(self.boundary_failure(initial_depth, pos, true));
            }

            count -= 1;
        }

        while count < 0 {
            let stop = self.buffer().begin();

            'count_once: while pos != stop {
                pos -= 1;
                let Some(ch) = self.buffer().char_at(pos) else {
                    break;
                };

                // Walking right-to-left the lookahead is the preceding
                // character, so a trailing "*/" classifies as a comment
                // start and the real "/*" as a comment end.
                let ch1 = if pos != stop {
                    self.buffer().char_at(pos - 1)
                } else {
                    None
                };

                match classify(self.delimiters(), ch, ch1) {
                    SyntaxClass::Open => {
                        depth -= 1;
                        if depth == 0 {
                            break 'count_once;
                        }
                    }
                    SyntaxClass::Close => {
                        depth += 1;
                        if depth == 0 {
                            break 'count_once;
                        }
                    }
                    SyntaxClass::StringDelimiter => {
                        pos = self.scan_string_backward(pos, ch)?;
                    }
                    SyntaxClass::MultiLineCommentStart => {
                        pos = self.scan_backward_until(pos, '*', Some('/'))?;
                    }
                    // A single-line comment needs no handling here: its
                    // terminating newline is reached first and carries no
                    // special class.
                    SyntaxClass::SingleLineCommentStart
                    | SyntaxClass::MultiLineCommentEnd
                    | SyntaxClass::Escape
                    | SyntaxClass::Word
                    | SyntaxClass::Whitespace => {}
                }

                if depth < min_depth {
                    return Err(ScanError::DepthUnderflow { at: pos });
                }
            }

            if pos == stop && depth != 0 {
                return Err(self.boundary_failure(initial_depth, pos, false));
            }

            count += 1;
        }

        Ok(pos)
    }

    /// Failure for a scan that exhausted the buffer with nonzero depth.
    ///
    /// A positive initial depth means the caller asked to exit enclosing
    /// lists; exhausting the buffer then means those lists do not exist,
    /// which is a depth underflow rather than a truncated document.
    fn boundary_failure(&self, initial_depth: i32, at: usize, forward: bool) -> ScanError {
        if initial_depth > 0 {
            ScanError::DepthUnderflow { at }
        } else if forward {
            ScanError::UnexpectedEndOfFile { at }
        } else {
            ScanError::UnexpectedBeginningOfFile { at }
        }
    }

    /// Move to just past the end of the next sibling list
    pub fn forward_list(&self, from: usize) -> Result<usize> {
        self.scan_lists(from, 1, 0)
    }

    /// Move to the start of the previous sibling list
    pub fn backward_list(&self, from: usize) -> Result<usize> {
        self.scan_lists(from, -1, 0)
    }

    /// Move to the opening delimiter of the list enclosing `from`
    pub fn backward_up_list(&self, from: usize) -> Result<usize> {
        self.scan_lists(from, -1, 1)
    }

    /// Move to just past the opening delimiter of the next nested list
    pub fn down_list(&self, from: usize) -> Result<usize> {
        self.scan_lists(from, 1, -1)
    }

    /// Offsets of the list enclosing `from`: its opening delimiter and one
    /// past its closing delimiter. Suitable for a selection.
    pub fn enclosing_list(&self, from: usize) -> Result<(usize, usize)> {
        let start = self.scan_lists(from, -1, 1)?;
        let end = self.scan_lists(start, 1, 0)?;
        Ok((start, end))
    }
}
