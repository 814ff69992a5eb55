//! Where construction-time diagnostics go.
//!
//! Errors never reach for a global logger directly. They are handed a
//! [`DiagnosticSink`]; the default is [`TracingSink`], which forwards to
//! whatever `tracing` subscriber the host installed.

use std::sync::Arc;

use parking_lot::Mutex;

/// Tracing target used by [`TracingSink`].
pub const LOG_TARGET: &str = "tokenfault";

/// A logger handle accepting debug-severity text.
pub trait DiagnosticSink: Send + Sync {
    /// Record one debug-level message.
    fn debug(&self, message: &str);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn debug(&self, message: &str) {
        self(message)
    }
}

/// Sink that emits a `tracing` DEBUG event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn debug(&self, message: &str) {
        tracing::debug!(target: LOG_TARGET, "{}", message);
    }
}

/// In-memory sink recording each message in order.
///
/// Clones share the same buffer, so one handle can be passed to the code
/// under test while another is inspected.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl BufferSink {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded messages.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// Number of recorded messages.
    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    /// Drop all recorded messages.
    pub fn clear(&self) {
        self.messages.lock().clear();
    }
}

impl DiagnosticSink for BufferSink {
    fn debug(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}
