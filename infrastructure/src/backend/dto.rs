//! Wire types for the consultation backend API
//!
//! The backend speaks camelCase JSON. DTOs are mapped into domain entities
//! through [`Consultation::from_parts`], so a response violating the
//! status/reason pairing surfaces as [`BackendError::InvalidResponse`]
//! instead of entering the store.

use chrono::{DateTime, NaiveDate, Utc};
use consult_application::BackendError;
use consult_domain::{
    Consultation, ConsultationId, ConsultationStatus, RejectionReason, UserId,
};
use serde::{Deserialize, Serialize};

/// Body of `POST /consultations`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConsultationRequest {
    pub user_id: i64,
    pub consultation_date: NaiveDate,
}

/// Body of `PATCH /consultations/{id}/reject`
#[derive(Debug, Serialize)]
pub struct RejectConsultationRequest<'a> {
    pub reason: &'a str,
}

/// A consultation as returned by the backend
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationDto {
    pub id: i64,
    pub user_id: i64,
    pub consultation_date: NaiveDate,
    pub status: ConsultationStatus,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ConsultationDto {
    /// Map the wire representation into a domain entity.
    pub fn into_domain(self) -> Result<Consultation, BackendError> {
        let rejection_reason = self
            .rejection_reason
            .map(RejectionReason::new)
            .transpose()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;
        Consultation::from_parts(
            ConsultationId::new(self.id),
            UserId::new(self.user_id),
            self.consultation_date,
            self.status,
            rejection_reason,
            self.created_at,
            self.updated_at,
        )
        .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}

/// Error body some backend failures carry
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
