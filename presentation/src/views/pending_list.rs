//! Admin view of pending consultation requests

use crate::notification::{Notification, NotificationSlot};
use colored::Colorize;
use consult_application::{ConsultationStore, StoreError};
use consult_domain::ConsultationId;
use std::sync::Arc;
use tracing::debug;

/// Presents pending consultations to an admin and dispatches decisions
///
/// Approve and reject intents are refused while a store operation is in
/// flight - a duplicate-submission guard on top of (not instead of) the
/// store's own serialization. Action outcomes land in the shared
/// [`NotificationSlot`]; validation problems are returned directly for
/// inline feedback.
pub struct PendingListView {
    store: Arc<ConsultationStore>,
    notifications: NotificationSlot,
}

impl PendingListView {
    pub fn new(store: Arc<ConsultationStore>) -> Self {
        Self {
            store,
            notifications: NotificationSlot::new(),
        }
    }

    /// View backed by an externally owned notification slot.
    pub fn with_notifications(store: Arc<ConsultationStore>, notifications: NotificationSlot) -> Self {
        Self {
            store,
            notifications,
        }
    }

    pub fn notifications(&self) -> &NotificationSlot {
        &self.notifications
    }

    /// Render the pending list, most recent first.
    pub async fn render(&self) -> String {
        let pending = self.store.list_pending().await;
        let mut output = String::new();

        if let Some(notification) = self.notifications.current() {
            output.push_str(&notification.render());
            output.push('\n');
        }

        if pending.is_empty() {
            if self.store.is_loading() {
                output.push_str("Loading consultation requests...\n");
            } else {
                output.push_str("No pending consultation requests.\n");
            }
            return output;
        }

        output.push_str(&format!(
            "{}\n",
            format!("Pending consultation requests ({})", pending.len())
                .cyan()
                .bold()
        ));
        for consultation in &pending {
            output.push_str(&format!(
                "  #{:<4} user {:<6} {}  requested {}  [{}]\n",
                consultation.id(),
                consultation.user_id(),
                consultation.consultation_date(),
                consultation.created_at().format("%Y-%m-%d %H:%M"),
                consultation.status().label().yellow()
            ));
        }
        output
    }

    /// Approve a pending consultation.
    ///
    /// Success and non-validation failures post a notification; the result
    /// is returned as well so callers can set an exit code.
    pub async fn approve(&self, id: ConsultationId) -> Result<(), StoreError> {
        if self.store.is_loading() {
            debug!("approve {} refused: operation in flight", id);
            return Err(StoreError::Validation(
                "another request is still in progress".to_string(),
            ));
        }
        match self.store.approve(id).await {
            Ok(consultation) => {
                self.notifications.post(Notification::success(format!(
                    "Consultation #{} approved",
                    consultation.id()
                )));
                Ok(())
            }
            Err(error @ StoreError::Validation(_)) => Err(error),
            Err(error) => {
                self.notifications
                    .post(Notification::error(error.to_string()));
                Err(error)
            }
        }
    }

    /// Open the reject confirmation surface for `id`.
    ///
    /// The store is only called once the prompt is confirmed with a
    /// non-empty reason; [`RejectPrompt::cancel`] discards it untouched.
    pub fn begin_reject(&self, id: ConsultationId) -> RejectPrompt<'_> {
        RejectPrompt { view: self, id }
    }
}

/// Confirmation surface for rejecting a consultation
pub struct RejectPrompt<'a> {
    view: &'a PendingListView,
    id: ConsultationId,
}

impl RejectPrompt<'_> {
    pub fn id(&self) -> ConsultationId {
        self.id
    }

    /// Dismiss the prompt without calling the store.
    pub fn cancel(self) {}

    /// Submit the rejection with the given reason.
    ///
    /// An empty (after trimming) reason fails inline before the store or
    /// backend is involved.
    pub async fn confirm(self, reason: &str) -> Result<(), StoreError> {
        if reason.trim().is_empty() {
            return Err(StoreError::Validation(
                "rejection reason must not be empty".to_string(),
            ));
        }
        if self.view.store.is_loading() {
            debug!("reject {} refused: operation in flight", self.id);
            return Err(StoreError::Validation(
                "another request is still in progress".to_string(),
            ));
        }
        match self.view.store.reject(self.id, reason).await {
            Ok(consultation) => {
                self.view.notifications.post(Notification::success(format!(
                    "Consultation #{} rejected",
                    consultation.id()
                )));
                Ok(())
            }
            Err(error @ StoreError::Validation(_)) => Err(error),
            Err(error) => {
                self.view
                    .notifications
                    .post(Notification::error(error.to_string()));
                Err(error)
            }
        }
    }
}
