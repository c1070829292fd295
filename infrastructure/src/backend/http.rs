//! HTTP adapter for the consultation backend API

use crate::backend::dto::{
    ConsultationDto, CreateConsultationRequest, ErrorBody, RejectConsultationRequest,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use consult_application::{BackendError, ConsultationBackend};
use consult_domain::{Consultation, ConsultationId, RejectionReason, UserId};
use std::time::Duration;
use tracing::debug;

/// Default request timeout. Mutations cannot be cancelled once started, so
/// the client-level timeout is what keeps a dead backend from hanging a
/// store operation indefinitely.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Talks to the consultation backend over HTTP/JSON
///
/// Endpoints:
/// - `POST   {base}/consultations`
/// - `PATCH  {base}/consultations/{id}/approve`
/// - `PATCH  {base}/consultations/{id}/reject`
/// - `GET    {base}/consultations?status=pending`
pub struct HttpConsultationBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpConsultationBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Connection(e.to_string()))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn map_transport(error: reqwest::Error) -> BackendError {
        if error.is_timeout() {
            BackendError::Timeout
        } else {
            BackendError::Connection(error.to_string())
        }
    }

    /// Turn a non-2xx response into [`BackendError::Rejected`], preferring
    /// the backend's own error message when the body carries one.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.message)
            .unwrap_or(body);
        Err(BackendError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_consultation(response: reqwest::Response) -> Result<Consultation, BackendError> {
        let dto: ConsultationDto = response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;
        dto.into_domain()
    }
}

#[async_trait]
impl ConsultationBackend for HttpConsultationBackend {
    async fn create(
        &self,
        user_id: UserId,
        consultation_date: NaiveDate,
    ) -> Result<Consultation, BackendError> {
        debug!("POST /consultations for user {}", user_id);
        let body = CreateConsultationRequest {
            user_id: user_id.value(),
            consultation_date,
        };
        let response = self
            .client
            .post(self.url("/consultations"))
            .json(&body)
            .send()
            .await
            .map_err(Self::map_transport)?;
        let response = Self::check_status(response).await?;
        Self::parse_consultation(response).await
    }

    async fn approve(&self, id: ConsultationId) -> Result<(), BackendError> {
        debug!("PATCH /consultations/{}/approve", id);
        let response = self
            .client
            .patch(self.url(&format!("/consultations/{}/approve", id)))
            .send()
            .await
            .map_err(Self::map_transport)?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn reject(
        &self,
        id: ConsultationId,
        reason: &RejectionReason,
    ) -> Result<(), BackendError> {
        debug!("PATCH /consultations/{}/reject", id);
        let body = RejectConsultationRequest {
            reason: reason.as_str(),
        };
        let response = self
            .client
            .patch(self.url(&format!("/consultations/{}/reject", id)))
            .json(&body)
            .send()
            .await
            .map_err(Self::map_transport)?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn list_pending(&self) -> Result<Vec<Consultation>, BackendError> {
        debug!("GET /consultations?status=pending");
        let response = self
            .client
            .get(self.url("/consultations"))
            .query(&[("status", "pending")])
            .send()
            .await
            .map_err(Self::map_transport)?;
        let response = Self::check_status(response).await?;
        let dtos: Vec<ConsultationDto> = response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;
        dtos.into_iter().map(ConsultationDto::into_domain).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let backend =
            HttpConsultationBackend::new("http://localhost:3000/api/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            backend.url("/consultations"),
            "http://localhost:3000/api/consultations"
        );
    }

    #[test]
    fn test_decision_urls_embed_the_id() {
        let backend =
            HttpConsultationBackend::new("http://localhost:3000/api", DEFAULT_TIMEOUT).unwrap();
        let id = ConsultationId::new(7);
        assert_eq!(
            backend.url(&format!("/consultations/{}/approve", id)),
            "http://localhost:3000/api/consultations/7/approve"
        );
    }
}
