//! Transient notifications with auto-dismiss
//!
//! A [`NotificationSlot`] holds at most one notification. Posting schedules
//! an auto-dismiss after a fixed delay; posting again cancels the previous
//! timer first, so a stale timer can never dismiss the wrong notification.

use colored::Colorize;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// How long a notification stays visible before auto-dismissing
pub const AUTO_DISMISS: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient message shown to the admin after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    /// Render as a single colored console line.
    pub fn render(&self) -> String {
        match self.kind {
            NotificationKind::Success => format!("{} {}", "[ok]".green().bold(), self.message),
            NotificationKind::Error => format!("{} {}", "[error]".red().bold(), self.message),
        }
    }
}

struct SlotState {
    current: Option<(u64, Notification)>,
    timer: Option<CancellationToken>,
    next_seq: u64,
}

/// Holds the currently visible notification, if any
///
/// Clones share the same slot, so a view and its caller observe the same
/// notification state.
#[derive(Clone)]
pub struct NotificationSlot {
    state: Arc<Mutex<SlotState>>,
    dismiss_after: Duration,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::with_dismiss_after(AUTO_DISMISS)
    }

    /// Slot with a custom dismiss delay (tests use short delays).
    pub fn with_dismiss_after(dismiss_after: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(SlotState {
                current: None,
                timer: None,
                next_seq: 0,
            })),
            dismiss_after,
        }
    }

    /// Display a notification, replacing (and un-scheduling) any previous one.
    ///
    /// Must be called from within a tokio runtime; the dismiss timer is a
    /// spawned task parked on `tokio::time::sleep`.
    pub fn post(&self, notification: Notification) {
        let token = CancellationToken::new();
        let seq;
        {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(previous) = state.timer.take() {
                previous.cancel();
            }
            seq = state.next_seq;
            state.next_seq += 1;
            state.current = Some((seq, notification));
            state.timer = Some(token.clone());
        }

        let shared = Arc::clone(&self.state);
        let delay = self.dismiss_after;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let mut state = shared.lock().unwrap_or_else(|e| e.into_inner());
                    // The sequence check covers the window between the sleep
                    // completing and this task acquiring the lock.
                    if matches!(state.current, Some((current_seq, _)) if current_seq == seq) {
                        state.current = None;
                        state.timer = None;
                    }
                }
            }
        });
    }

    /// The currently visible notification, if any.
    pub fn current(&self) -> Option<Notification> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.current.as_ref().map(|(_, n)| n.clone())
    }

    /// Dismiss immediately and cancel the pending timer.
    pub fn dismiss(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(timer) = state.timer.take() {
            timer.cancel();
        }
        state.current = None;
    }
}

impl Default for NotificationSlot {
    fn default() -> Self {
        Self::new()
    }
}
