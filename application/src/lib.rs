//! Application layer for studio-consult
//!
//! This crate contains the [`ConsultationStore`] - the single source of
//! truth for consultation data within a session - plus the port definitions
//! it depends on. It depends only on the domain layer.

pub mod ports;
pub mod store;

// Re-export commonly used types
pub use ports::{
    backend::{BackendError, ConsultationBackend, InMemoryBackend},
    notifier::{DecisionNotifier, NoDecisionNotifier},
};
pub use store::{ConsultationStore, StoreError};
