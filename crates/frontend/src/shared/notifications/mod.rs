//! Transient user-facing notifications.
//!
//! [`NotificationStack`] holds the ordering rules and has no DOM dependency;
//! [`host::NotificationService`] wires it to signals and dismiss timers.

pub mod host;

pub use host::{NotificationService, ToastHost};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Anything that can show a short message to the operator
pub trait NotificationSink {
    fn notify(&self, message: &str, severity: Severity);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Stack of visible notifications, oldest first.
///
/// New messages are appended and never replace existing ones.
#[derive(Debug, Clone, Default)]
pub struct NotificationStack {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message and returns its id for later dismissal
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            message: message.into(),
            severity,
        });
        id
    }

    /// Removes a message; returns false if it was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
