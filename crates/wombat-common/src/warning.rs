//! Parser warnings, deduplicated per document.
//!
//! Recoverable anomalies (an unterminated comment, a stray end tag) never
//! fail a parse. They are reported once per unique message as
//! `tracing::warn!` events so a page full of the same mistake does not
//! flood the log.
//!
//! There is no global state: every tokenizer and tree builder owns a
//! [`WarningLog`], which is dropped with the parse that filled it.

use std::collections::HashSet;

/// The set of warnings already emitted for one document.
#[derive(Debug, Clone, Default)]
pub struct WarningLog {
    emitted: HashSet<String>,
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

impl WarningLog {
    /// An empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Warn about a recoverable anomaly (emitted once per unique message)
    ///
    /// `position` is attached to the event but is not part of the message,
    /// so the same mistake at another offset is still a duplicate. Returns
    /// true if the warning was emitted.
    ///
    /// # Example
    /// ```
    /// use wombat_common::warning::WarningLog;
    ///
    /// let mut log = WarningLog::new();
    /// assert!(log.warn_once("HTML Tokenizer", "unterminated comment", 120));
    /// assert!(!log.warn_once("HTML Tokenizer", "unterminated comment", 480));
    /// assert_eq!(log.len(), 1);
    /// ```
    pub fn warn_once(&mut self, component: &str, message: &str, position: usize) -> bool {
        let emitted = self.emitted.insert(key(component, message));
        if emitted {
            tracing::warn!(component, position, "{message}");
        }
        emitted
    }

    /// Returns true if this exact warning has been emitted since the log was
    /// created or last cleared.
    #[must_use]
    pub fn has_warned(&self, component: &str, message: &str) -> bool {
        self.emitted.contains(&key(component, message))
    }

    /// Number of distinct warnings emitted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.emitted.len()
    }

    /// Returns true if nothing has been emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emitted.is_empty()
    }

    /// Forget every recorded warning.
    pub fn clear(&mut self) {
        self.emitted.clear();
    }
}
