//! Consultation status state machine

use serde::{Deserialize, Serialize};

/// Lifecycle state of a [`Consultation`](super::entities::Consultation)
///
/// The lifecycle is one-way: `Pending` may move to `Approved` or `Rejected`,
/// both of which are terminal. Representing the status as a tagged enum (and
/// matching on it exhaustively) means an unknown status is a deserialization
/// error rather than a silently unrendered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsultationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ConsultationStatus {
    /// Whether this status still accepts a decision
    pub fn is_pending(&self) -> bool {
        matches!(self, ConsultationStatus::Pending)
    }

    /// Whether this status is terminal (no further transitions)
    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }

    /// Wire/log name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationStatus::Pending => "pending",
            ConsultationStatus::Approved => "approved",
            ConsultationStatus::Rejected => "rejected",
        }
    }

    /// Localized display label shown to end users
    pub fn label(&self) -> &'static str {
        match self {
            ConsultationStatus::Pending => "Menunggu",
            ConsultationStatus::Approved => "Disetujui",
            ConsultationStatus::Rejected => "Ditolak",
        }
    }
}

impl std::fmt::Display for ConsultationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_is_not_terminal() {
        assert!(ConsultationStatus::Pending.is_pending());
        assert!(!ConsultationStatus::Pending.is_terminal());
    }

    #[test]
    fn test_decided_statuses_are_terminal() {
        assert!(ConsultationStatus::Approved.is_terminal());
        assert!(ConsultationStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_labels() {
        assert_eq!(ConsultationStatus::Pending.label(), "Menunggu");
        assert_eq!(ConsultationStatus::Approved.label(), "Disetujui");
        assert_eq!(ConsultationStatus::Rejected.label(), "Ditolak");
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(
            serde_json::to_string(&ConsultationStatus::Pending).unwrap(),
            "\"pending\""
        );
        let parsed: ConsultationStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(parsed, ConsultationStatus::Rejected);
    }

    #[test]
    fn test_unknown_status_is_a_deserialization_error() {
        let result: Result<ConsultationStatus, _> = serde_json::from_str("\"archived\"");
        assert!(result.is_err());
    }
}
