//! Domain error types

use crate::consultation::status::ConsultationStatus;
use chrono::NaiveDate;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("consultation is already {0} and cannot change status")]
    InvalidTransition(ConsultationStatus),

    #[error("rejection reason must not be empty")]
    EmptyRejectionReason,

    #[error("consultation date {0} is in the past")]
    PastDate(NaiveDate),

    #[error("status {status} is inconsistent with rejection reason presence")]
    StatusReasonMismatch { status: ConsultationStatus },
}

impl DomainError {
    /// Check whether this error is a rejected state transition
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, DomainError::InvalidTransition(_))
    }
}
