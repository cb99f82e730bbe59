//! Scan trace collaborator
//!
//! Scanners report the positions they visit and why through an injected
//! sink. The output is advisory: it never affects a scan's outcome, and the
//! default sink discards everything. There is no process-wide channel; a
//! caller that wants traces passes a sink explicitly.

/// Receives one human-readable trace line per scan event.
///
/// Implementations take `&self` so a sink can be shared across nested scan
/// calls; collectors use interior mutability.
pub trait TraceSink {
    /// Append one line of trace output
    fn append_line(&self, line: &str);
}

/// Discards all trace output. The default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn append_line(&self, _line: &str) {}
}

/// Forwards trace lines to the `tracing` crate at TRACE level.
///
/// Embedders already running a `tracing` subscriber get scan traces under
/// the `listnav::scan` target without extra plumbing.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn append_line(&self, line: &str) {
        tracing::trace!(target: "listnav::scan", "{line}");
    }
}
