//! Consultation backend port
//!
//! Defines how the application layer talks to the backend API that owns
//! consultation records. The HTTP adapter lives in the infrastructure layer.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use consult_domain::{Consultation, ConsultationId, RejectionReason, UserId};
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};
use thiserror::Error;

/// Errors that can occur during backend operations
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("request timed out")]
    Timeout,

    #[error("backend rejected the request: {status} {message}")]
    Rejected { status: u16, message: String },

    #[error("invalid response from backend: {0}")]
    InvalidResponse(String),
}

/// Backend API for consultation records
///
/// The contract is deliberately thin: call, await the result, map failures
/// into [`BackendError`]. The store treats a successful return as the
/// backend's acknowledgement and only then mutates local state.
#[async_trait]
pub trait ConsultationBackend: Send + Sync {
    /// Create a new consultation request (`POST /consultations`)
    async fn create(
        &self,
        user_id: UserId,
        consultation_date: NaiveDate,
    ) -> Result<Consultation, BackendError>;

    /// Approve a pending consultation (`PATCH /consultations/{id}/approve`)
    async fn approve(&self, id: ConsultationId) -> Result<(), BackendError>;

    /// Reject a pending consultation (`PATCH /consultations/{id}/reject`)
    async fn reject(&self, id: ConsultationId, reason: &RejectionReason)
    -> Result<(), BackendError>;

    /// List pending consultations (`GET /consultations?status=pending`)
    async fn list_pending(&self) -> Result<Vec<Consultation>, BackendError>;
}

/// In-memory backend for demos and tests
///
/// Assigns sequential ids and applies the same lifecycle rules a real
/// backend would: unknown ids produce a 404-shaped [`BackendError::Rejected`],
/// decisions on terminal consultations a 409-shaped one.
pub struct InMemoryBackend {
    next_id: AtomicI64,
    records: Mutex<Vec<Consultation>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            records: Mutex::new(Vec::new()),
        }
    }

    fn with_record<T>(
        &self,
        id: ConsultationId,
        f: impl FnOnce(&mut Consultation) -> Result<T, BackendError>,
    ) -> Result<T, BackendError> {
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        let record = records
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or_else(|| BackendError::Rejected {
                status: 404,
                message: format!("consultation {} not found", id),
            })?;
        f(record)
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConsultationBackend for InMemoryBackend {
    async fn create(
        &self,
        user_id: UserId,
        consultation_date: NaiveDate,
    ) -> Result<Consultation, BackendError> {
        let id = ConsultationId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let consultation = Consultation::new(id, user_id, consultation_date, Utc::now());
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(consultation.clone());
        Ok(consultation)
    }

    async fn approve(&self, id: ConsultationId) -> Result<(), BackendError> {
        self.with_record(id, |record| {
            record.approve(Utc::now()).map_err(|e| BackendError::Rejected {
                status: 409,
                message: e.to_string(),
            })
        })
    }

    async fn reject(
        &self,
        id: ConsultationId,
        reason: &RejectionReason,
    ) -> Result<(), BackendError> {
        self.with_record(id, |record| {
            record
                .reject(reason.clone(), Utc::now())
                .map_err(|e| BackendError::Rejected {
                    status: 409,
                    message: e.to_string(),
                })
        })
    }

    async fn list_pending(&self) -> Result<Vec<Consultation>, BackendError> {
        let records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        Ok(records
            .iter()
            .filter(|c| c.status().is_pending())
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_in_memory_backend_assigns_sequential_ids() {
        let backend = InMemoryBackend::new();
        let a = backend
            .create(UserId::new(1), date(2026, 9, 1))
            .await
            .unwrap();
        let b = backend
            .create(UserId::new(2), date(2026, 9, 2))
            .await
            .unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[tokio::test]
    async fn test_in_memory_backend_unknown_id_is_404() {
        let backend = InMemoryBackend::new();
        let err = backend.approve(ConsultationId::new(99)).await.unwrap_err();
        assert!(matches!(err, BackendError::Rejected { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_in_memory_backend_double_decision_is_409() {
        let backend = InMemoryBackend::new();
        let c = backend
            .create(UserId::new(1), date(2026, 9, 1))
            .await
            .unwrap();
        backend.approve(c.id()).await.unwrap();
        let err = backend.approve(c.id()).await.unwrap_err();
        assert!(matches!(err, BackendError::Rejected { status: 409, .. }));
    }

    #[tokio::test]
    async fn test_in_memory_backend_list_pending_excludes_decided() {
        let backend = InMemoryBackend::new();
        let a = backend
            .create(UserId::new(1), date(2026, 9, 1))
            .await
            .unwrap();
        let b = backend
            .create(UserId::new(2), date(2026, 9, 2))
            .await
            .unwrap();
        backend.approve(a.id()).await.unwrap();

        let pending = backend.list_pending().await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id(), b.id());
    }
}
