//! Scanning engine for balanced-list navigation
//!
//! This module centralizes the lexical scanning used by all list
//! navigation operations.
//!
//! ## Design
//!
//! Scanning is based on local character classification:
//! - **Open/Close**: configured delimiter pairs adjust nesting depth
//! - **StringDelimiter/Escape**: string literals are skipped whole, so
//!   bracket characters inside them never perturb the balance count
//! - **Comment starts/ends**: comments are skipped whole the same way
//!
//! The central primitive is [`Scanner::scan_lists`], a balanced-depth
//! traversal that walks forward or backward for a signed repeat count and a
//! signed starting depth. The four navigation operations are thin wrappers
//! over different `(count, depth)` argument pairs.
//!
//! Every scan is a bounded linear walk over an immutable snapshot: no I/O,
//! no retries, no partial results. Failures propagate immediately.
//!
//! ## Modules
//!
//! - [`classify`] - Character classification
//! - `strings` - String-literal skipping primitives
//! - `until` - Literal stop-character primitives
//! - `lists` - The balanced-depth list scanner and navigation operations

pub mod classify;
mod lists;
mod strings;
mod until;

// Re-export commonly used types
pub use classify::{classify, SyntaxClass};

use std::cell::Cell;

use crate::buffer::ScanBuffer;
use crate::error::{Result, ScanError};
use crate::profile::Delimiters;
use crate::trace::{NullTrace, TraceSink};

static NULL_TRACE: NullTrace = NullTrace;

/// How a backward string scan treats a bare newline.
///
/// The scanner can be asked to find the opening quote of a string it
/// entered mid-literal; a line break before any quote usually means the
/// scan started outside a string in the first place. The two policies
/// disagree about what to do then.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewlineBoundary {
    /// A bare newline is an implicit string boundary: stop there and
    /// return its offset. Best-effort recovery for malformed input.
    #[default]
    SoftStop,
    /// Newlines are ordinary characters; only a real quote terminates,
    /// otherwise the scan fails at the buffer start.
    Strict,
}

/// Scanning context: a snapshot, a delimiter set, and a trace sink.
///
/// Construction is cheap; a scanner borrows its buffer and holds no state
/// beyond the trace indent counter. Build one per navigation command.
pub struct Scanner<'a> {
    buffer: &'a ScanBuffer,
    delimiters: Delimiters,
    newline_boundary: NewlineBoundary,
    trace: &'a dyn TraceSink,
    /// Indent level for nested trace output; interior mutability keeps the
    /// scan methods `&self`
    trace_depth: Cell<usize>,
}

impl<'a> Scanner<'a> {
    /// Scanner over `buffer` with the default delimiter set, the default
    /// newline policy, and no trace output.
    pub fn new(buffer: &'a ScanBuffer) -> Scanner<'a> {
        Scanner {
            buffer,
            delimiters: Delimiters::default(),
            newline_boundary: NewlineBoundary::default(),
            trace: &NULL_TRACE,
            trace_depth: Cell::new(0),
        }
    }

    /// Replace the delimiter set
    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Scanner<'a> {
        self.delimiters = delimiters;
        self
    }

    /// Replace the backward-string newline policy
    pub fn with_newline_boundary(mut self, policy: NewlineBoundary) -> Scanner<'a> {
        self.newline_boundary = policy;
        self
    }

    /// Attach a trace sink
    pub fn with_trace(mut self, trace: &'a dyn TraceSink) -> Scanner<'a> {
        self.trace = trace;
        self
    }

    /// The snapshot this scanner walks
    pub fn buffer(&self) -> &ScanBuffer {
        self.buffer
    }

    pub(crate) fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    pub(crate) fn newline_boundary(&self) -> NewlineBoundary {
        self.newline_boundary
    }

    /// Validate a starting offset against `[0, len]`.
    pub(crate) fn check_from(&self, from: usize) -> Result<()> {
        if from > self.buffer.end() {
            return Err(ScanError::OutOfRange {
                offset: from,
                len: self.buffer.len(),
            });
        }
        Ok(())
    }

    /// Classify with no lookahead (single-character classes only).
    pub(crate) fn syntax_of(&self, ch: char) -> SyntaxClass {
        classify(&self.delimiters, ch, None)
    }

    pub(crate) fn report_start(&self, what: &str, from: usize, detail: &str) {
        let (line, col) = self.buffer.line_col(from);
        let indent = " ".repeat(self.trace_depth.get());
        self.trace
            .append_line(&format!("{indent}{what} start from {line}:{col} - {detail}"));
        self.trace_depth.set(self.trace_depth.get() + 1);
    }

    pub(crate) fn report_end(&self, what: &str, result: &Result<usize>) {
        self.trace_depth.set(self.trace_depth.get().saturating_sub(1));
        let indent = " ".repeat(self.trace_depth.get());
        match result {
            Ok(at) => {
                let (line, col) = self.buffer.line_col(*at);
                self.trace
                    .append_line(&format!("{indent}{what} stop from {line}:{col}"));
            }
            Err(err) => {
                self.trace.append_line(&format!("{indent}{what} fail - {err}"));
            }
        }
    }
}
