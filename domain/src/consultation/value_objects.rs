//! Consultation value objects - immutable types guarding entity invariants
//!
//! # Identifiers
//! - [`ConsultationId`] - Backend-assigned identifier of a consultation
//! - [`UserId`] - Identifier of the requesting user
//!
//! # Decision data
//! - [`RejectionReason`] - Mandatory, non-empty reason for a rejection

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Backend-assigned identifier of a consultation.
///
/// Unique within the collection held by a store instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsultationId(i64);

impl ConsultationId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ConsultationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ConsultationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the user who requested a consultation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reason an admin gave for rejecting a consultation.
///
/// Construction trims the input and fails on empty text, so a rejected
/// consultation can never carry a blank reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RejectionReason(String);

impl RejectionReason {
    /// Create a reason from raw input, trimming surrounding whitespace.
    pub fn new(reason: impl Into<String>) -> Result<Self, DomainError> {
        let reason = reason.into();
        let trimmed = reason.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyRejectionReason);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_reason_trims_whitespace() {
        let reason = RejectionReason::new("  Jadwal tidak tersedia  ").unwrap();
        assert_eq!(reason.as_str(), "Jadwal tidak tersedia");
    }

    #[test]
    fn test_empty_rejection_reason_is_rejected() {
        assert_eq!(
            RejectionReason::new("").unwrap_err(),
            DomainError::EmptyRejectionReason
        );
        assert_eq!(
            RejectionReason::new("   ").unwrap_err(),
            DomainError::EmptyRejectionReason
        );
    }

    #[test]
    fn test_id_display() {
        assert_eq!(ConsultationId::new(42).to_string(), "42");
        assert_eq!(UserId::new(7).to_string(), "7");
    }
}
