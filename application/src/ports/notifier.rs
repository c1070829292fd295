//! Decision notification port
//!
//! Hook point for user-facing notifications when an admin decides a
//! consultation. Implementations live in the presentation layer (or
//! wherever the delivery channel is wired up); the store only guarantees
//! the hook fires after the backend has acknowledged the transition.

use consult_domain::Consultation;

/// Callback for admin decisions on consultations
pub trait DecisionNotifier: Send + Sync {
    /// Called after a consultation was approved and the backend confirmed it
    fn on_approved(&self, consultation: &Consultation);

    /// Called after a consultation was rejected and the backend confirmed it
    fn on_rejected(&self, consultation: &Consultation);
}

/// No-op notifier for when decision notifications are not needed
pub struct NoDecisionNotifier;

impl DecisionNotifier for NoDecisionNotifier {
    fn on_approved(&self, _consultation: &Consultation) {}
    fn on_rejected(&self, _consultation: &Consultation) {}
}
