//! Consultation store
//!
//! Single source of truth for the consultations visible to the current
//! session, and the only component permitted to mutate them.

use crate::ports::backend::{BackendError, ConsultationBackend};
use crate::ports::notifier::{DecisionNotifier, NoDecisionNotifier};
use chrono::{NaiveDate, Utc};
use consult_domain::{Consultation, ConsultationId, RejectionReason, UserId};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors surfaced by store operations
///
/// Every failure is scoped to the single action that triggered it; the
/// store never retries and never swallows an error.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Malformed input (empty rejection reason, past date). Meant for
    /// inline form feedback rather than a notification.
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("consultation {0} not found")]
    NotFound(ConsultationId),

    /// Attempted decision on a consultation that already left `Pending`.
    #[error("consultation {id} is already {status}")]
    InvalidState {
        id: ConsultationId,
        status: consult_domain::ConsultationStatus,
    },

    /// Backend/network failure during a round-trip. The caller may retry
    /// manually; local state is unchanged.
    #[error("backend request failed: {0}")]
    Submission(#[from] BackendError),
}

/// Tracks in-flight operations as a count rather than a boolean: operations
/// queued on the store mutex are already outstanding from the caller's
/// perspective, and the store must report loading until the last of them
/// finishes. The decrement runs on drop, so every exit path - success,
/// validation failure, backend failure - releases its share.
struct LoadingGuard<'a> {
    in_flight: &'a AtomicUsize,
}

impl<'a> LoadingGuard<'a> {
    fn engage(in_flight: &'a AtomicUsize) -> Self {
        in_flight.fetch_add(1, Ordering::SeqCst);
        Self { in_flight }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Owns the in-memory consultation collection for one session
///
/// Mutations follow wait-for-confirmation: the backend round-trip happens
/// first, and local state changes (plus the [`DecisionNotifier`] hook) only
/// after the backend acknowledges. A failed operation is therefore a no-op
/// locally - never a partial mutation.
///
/// The collection lives behind a `tokio::sync::Mutex` that is held across
/// the backend call, so at most one mutation is in flight per store
/// instance. The view layer's disabled-while-loading guard is advisory on
/// top of this, not the serialization mechanism itself.
pub struct ConsultationStore {
    backend: Arc<dyn ConsultationBackend>,
    notifier: Arc<dyn DecisionNotifier>,
    consultations: tokio::sync::Mutex<Vec<Consultation>>,
    in_flight: AtomicUsize,
}

impl ConsultationStore {
    pub fn new(backend: Arc<dyn ConsultationBackend>) -> Self {
        Self {
            backend,
            notifier: Arc::new(NoDecisionNotifier),
            consultations: tokio::sync::Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Attach a decision notification hook.
    pub fn with_notifier(mut self, notifier: Arc<dyn DecisionNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Whether any store operation's backend round-trip is outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Submit a new consultation request for `user_id` on `date`.
    ///
    /// The date must be today or later; see
    /// [`submit_with_today`](Self::submit_with_today) for the clock-injected
    /// variant.
    pub async fn submit(
        &self,
        user_id: UserId,
        date: NaiveDate,
    ) -> Result<Consultation, StoreError> {
        self.submit_with_today(user_id, date, Utc::now().date_naive())
            .await
    }

    /// Submit with an explicit reference day for the present-or-future check.
    pub async fn submit_with_today(
        &self,
        user_id: UserId,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<Consultation, StoreError> {
        let _loading = LoadingGuard::engage(&self.in_flight);

        Consultation::validate_requested_date(date, today)
            .map_err(|e| StoreError::Validation(e.to_string()))?;

        let mut consultations = self.consultations.lock().await;
        let created = self.backend.create(user_id, date).await?;
        info!("consultation {} submitted for {}", created.id(), date);
        consultations.push(created.clone());
        Ok(created)
    }

    /// Approve the pending consultation with `id`.
    ///
    /// Fails with [`StoreError::NotFound`] if the id is unknown and
    /// [`StoreError::InvalidState`] if the consultation already left
    /// `Pending`; neither failure touches local state or the backend.
    pub async fn approve(&self, id: ConsultationId) -> Result<Consultation, StoreError> {
        let _loading = LoadingGuard::engage(&self.in_flight);
        let mut consultations = self.consultations.lock().await;

        let entry = consultations
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        if entry.status().is_terminal() {
            return Err(StoreError::InvalidState {
                id,
                status: entry.status(),
            });
        }

        self.backend.approve(id).await?;

        let status_before = entry.status();
        entry
            .approve(Utc::now())
            .map_err(|_| StoreError::InvalidState {
                id,
                status: status_before,
            })?;
        info!("consultation {} approved", id);
        self.notifier.on_approved(entry);
        Ok(entry.clone())
    }

    /// Reject the pending consultation with `id`, recording `reason`.
    ///
    /// The reason must be non-empty after trimming
    /// ([`StoreError::Validation`] otherwise); lookup and state failures
    /// match [`approve`](Self::approve).
    pub async fn reject(
        &self,
        id: ConsultationId,
        reason: &str,
    ) -> Result<Consultation, StoreError> {
        let _loading = LoadingGuard::engage(&self.in_flight);

        let reason =
            RejectionReason::new(reason).map_err(|e| StoreError::Validation(e.to_string()))?;

        let mut consultations = self.consultations.lock().await;
        let entry = consultations
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        if entry.status().is_terminal() {
            return Err(StoreError::InvalidState {
                id,
                status: entry.status(),
            });
        }

        self.backend.reject(id, &reason).await?;

        let status_before = entry.status();
        entry
            .reject(reason, Utc::now())
            .map_err(|_| StoreError::InvalidState {
                id,
                status: status_before,
            })?;
        info!("consultation {} rejected", id);
        self.notifier.on_rejected(entry);
        Ok(entry.clone())
    }

    /// Pending consultations, most recent first.
    ///
    /// Ordering is stable: descending `created_at`, ties broken by
    /// descending id.
    pub async fn list_pending(&self) -> Vec<Consultation> {
        let consultations = self.consultations.lock().await;
        let mut pending: Vec<Consultation> = consultations
            .iter()
            .filter(|c| c.status().is_pending())
            .cloned()
            .collect();
        pending.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then(b.id().cmp(&a.id()))
        });
        pending
    }

    /// The viewer's most recent consultation, if any.
    pub async fn latest_for_user(&self, user_id: UserId) -> Option<Consultation> {
        let consultations = self.consultations.lock().await;
        consultations
            .iter()
            .filter(|c| c.user_id() == user_id)
            .max_by_key(|c| (c.created_at(), c.id()))
            .cloned()
    }

    /// Re-read the pending snapshot from the backend.
    ///
    /// Replaces locally-known pending consultations with the fetched set;
    /// terminal consultations already decided this session are kept so the
    /// status view can still show them.
    pub async fn refresh_pending(&self) -> Result<usize, StoreError> {
        let _loading = LoadingGuard::engage(&self.in_flight);
        let mut consultations = self.consultations.lock().await;

        let fetched = self.backend.list_pending().await?;
        debug!("refreshed pending snapshot: {} consultations", fetched.len());

        consultations.retain(|c| c.status().is_terminal());
        let mut added = 0;
        for consultation in fetched {
            if consultations.iter().any(|c| c.id() == consultation.id()) {
                warn!(
                    "skipping fetched consultation {}: id already known as decided",
                    consultation.id()
                );
                continue;
            }
            consultations.push(consultation);
            added += 1;
        }
        Ok(added)
    }
}
