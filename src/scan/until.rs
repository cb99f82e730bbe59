//! Literal stop-character primitives
//!
//! Used to jump past comments: forward scans look for a terminator
//! (`\n` or `*/`), backward scans look for the start marker (`/*`) of a
//! comment whose end was just encountered.

use super::{Scanner, SyntaxClass};
use crate::error::{Result, ScanError};

impl Scanner<'_> {
    /// Scan forward until `stop_char` is found.
    ///
    /// When `stop_char1` is given, the match only counts if it immediately
    /// follows `stop_char` (the `*/` case). Returns the offset just past
    /// `stop_char`. Escapes skip the following character.
    pub fn scan_forward_until(
        &self,
        from: usize,
        stop_char: char,
        stop_char1: Option<char>,
    ) -> Result<usize> {
        self.report_start(
            "scan_forward_until",
            from,
            &format!(
                "stop_char: {} stop_char1: {}",
                stop_char.escape_debug(),
                stop_char1.map_or("none".to_string(), |c| c.escape_debug().to_string()),
            ),
        );
        let result = self.forward_until(from, stop_char, stop_char1);
        self.report_end("scan_forward_until", &result);
        result
    }

    fn forward_until(&self, from: usize, stop_char: char, stop_char1: Option<char>) -> Result<usize> {
        self.check_from(from)?;
        let stop = self.buffer().end();
        let mut pos = from;

        while let Some(ch) = self.buffer().char_at(pos) {
            pos += 1;

            match self.syntax_of(ch) {
                SyntaxClass::Escape => {
                    if pos == stop {
                        return Err(ScanError::UnexpectedEndOfFile { at: pos });
                    }
                    // Ignore the next character.
                    pos += 1;
                }
                _ => {
                    if ch == stop_char
                        && stop_char1.is_none_or(|c1| self.buffer().char_at(pos) == Some(c1))
                    {
                        return Ok(pos);
                    }
                }
            }
        }

        Err(ScanError::UnexpectedEndOfFile { at: pos })
    }

    /// Scan backward until the sequence `stop_char stop_char1` is found.
    ///
    /// The sequence is matched in reverse one character at a time with a
    /// match index that resets on any mismatch; a character only matches
    /// when its preceding character is not an escape. Returns the offset of
    /// the first character of the (forward-order) sequence found.
    pub fn scan_backward_until(
        &self,
        from: usize,
        stop_char: char,
        stop_char1: Option<char>,
    ) -> Result<usize> {
        self.report_start(
            "scan_backward_until",
            from,
            &format!(
                "stop_char: {} stop_char1: {}",
                stop_char.escape_debug(),
                stop_char1.map_or("none".to_string(), |c| c.escape_debug().to_string()),
            ),
        );
        let result = self.backward_until(from, stop_char, stop_char1);
        self.report_end("scan_backward_until", &result);
        result
    }

    fn backward_until(
        &self,
        from: usize,
        stop_char: char,
        stop_char1: Option<char>,
    ) -> Result<usize> {
        self.check_from(from)?;
        let mut search = vec![stop_char];
        if let Some(c1) = stop_char1 {
            search.push(c1);
        }

        let mut pos = from;
        let mut search_index = 0;

        while pos > 0 && search_index < search.len() {
            pos -= 1;
            let Some(ch) = self.buffer().char_at(pos) else {
                break;
            };

            // Make sure the character is not escaped.
            let quoted = pos > 0
                && self
                    .buffer()
                    .char_at(pos - 1)
                    .is_some_and(|prev| self.syntax_of(prev) == SyntaxClass::Escape);

            if ch == search[search_index] && !quoted {
                search_index += 1;
            } else {
                search_index = 0;
            }
        }

        if search_index == search.len() {
            Ok(pos)
        } else {
            Err(ScanError::UnexpectedBeginningOfFile { at: pos })
        }
    }
}
