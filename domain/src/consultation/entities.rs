//! Consultation domain entity

use crate::consultation::status::ConsultationStatus;
use crate::consultation::value_objects::{ConsultationId, RejectionReason, UserId};
use crate::core::error::DomainError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// A user's request for a scheduled advisory session (Entity)
///
/// Identity fields (`id`, `user_id`, `consultation_date`, `created_at`) are
/// immutable after construction; only `status`, `rejection_reason`, and
/// `updated_at` change, and only through [`approve`](Self::approve) and
/// [`reject`](Self::reject). Both transitions require `Pending` status and
/// leave the entity untouched on failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Consultation {
    id: ConsultationId,
    user_id: UserId,
    consultation_date: NaiveDate,
    status: ConsultationStatus,
    rejection_reason: Option<RejectionReason>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Consultation {
    /// Create a freshly submitted consultation in `Pending` status.
    pub fn new(
        id: ConsultationId,
        user_id: UserId,
        consultation_date: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            consultation_date,
            status: ConsultationStatus::Pending,
            rejection_reason: None,
            created_at,
            updated_at: created_at,
        }
    }

    /// Rehydrate a consultation from stored/wire data.
    ///
    /// Enforces the status/reason pairing: `Rejected` requires a reason,
    /// every other status forbids one.
    pub fn from_parts(
        id: ConsultationId,
        user_id: UserId,
        consultation_date: NaiveDate,
        status: ConsultationStatus,
        rejection_reason: Option<RejectionReason>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let reason_matches_status = match status {
            ConsultationStatus::Rejected => rejection_reason.is_some(),
            ConsultationStatus::Pending | ConsultationStatus::Approved => {
                rejection_reason.is_none()
            }
        };
        if !reason_matches_status {
            return Err(DomainError::StatusReasonMismatch { status });
        }
        Ok(Self {
            id,
            user_id,
            consultation_date,
            status,
            rejection_reason,
            created_at,
            updated_at,
        })
    }

    /// Validate that a requested date is today or later.
    ///
    /// `today` is passed in rather than read from the clock so callers (and
    /// tests) control the reference day.
    pub fn validate_requested_date(date: NaiveDate, today: NaiveDate) -> Result<(), DomainError> {
        if date < today {
            return Err(DomainError::PastDate(date));
        }
        Ok(())
    }

    pub fn id(&self) -> ConsultationId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn consultation_date(&self) -> NaiveDate {
        self.consultation_date
    }

    pub fn status(&self) -> ConsultationStatus {
        self.status
    }

    pub fn rejection_reason(&self) -> Option<&RejectionReason> {
        self.rejection_reason.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Approve a pending consultation.
    ///
    /// Fails with [`DomainError::InvalidTransition`] if the status already
    /// left `Pending`; the entity is unchanged in that case.
    pub fn approve(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        if !self.status.is_pending() {
            return Err(DomainError::InvalidTransition(self.status));
        }
        self.status = ConsultationStatus::Approved;
        self.rejection_reason = None;
        self.updated_at = now;
        Ok(())
    }

    /// Reject a pending consultation with a reason.
    ///
    /// Fails with [`DomainError::InvalidTransition`] if the status already
    /// left `Pending`; the entity is unchanged in that case.
    pub fn reject(&mut self, reason: RejectionReason, now: DateTime<Utc>) -> Result<(), DomainError> {
        if !self.status.is_pending() {
            return Err(DomainError::InvalidTransition(self.status));
        }
        self.status = ConsultationStatus::Rejected;
        self.rejection_reason = Some(reason);
        self.updated_at = now;
        Ok(())
    }
}
