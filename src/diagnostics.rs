//! Non-fatal rejection reporting.
//!
//! The factory never fails. When an input cannot become a record, the item is
//! left out of the queue and a [`Diagnostic`] goes to the injected
//! [`DiagnosticSink`].

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

/// A rejected input, naming what was wrong with it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// The URL did not match any recognized YouTube shape.
    #[error("Invalid YouTube URL for {name:?}: {url}")]
    InvalidYouTubeUrl {
        /// Display name the caller gave the item.
        name: String,
        /// The rejected URL.
        url: String,
    },

    /// A CSV item had neither content nor rows.
    #[error("CSV item {name:?} has neither content nor rows")]
    EmptyCsv {
        /// Display name the caller gave the item.
        name: String,
    },
}

/// Receiver for diagnostics.
pub trait DiagnosticSink: fmt::Debug + Send + Sync {
    /// Record one diagnostic.
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Default sink: logs each diagnostic as a warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        tracing::warn!("{diagnostic}");
    }
}

/// Sink that keeps every diagnostic for later inspection.
#[derive(Debug, Default)]
pub struct CollectingSink {
    seen: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the diagnostics emitted so far, in order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of diagnostics emitted so far.
    pub fn len(&self) -> usize {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// True if nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        tracing::debug!("collected diagnostic: {diagnostic}");
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic.clone());
    }
}

/// Shared handle to the default sink.
pub fn default_sink() -> Arc<dyn DiagnosticSink> {
    Arc::new(TracingSink)
}
