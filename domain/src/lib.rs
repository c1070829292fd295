//! Domain layer for studio-consult
//!
//! This crate contains the core business logic for the consultation request
//! lifecycle. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Consultation
//!
//! A consultation is a user's request for a scheduled advisory session with
//! the studio. Every consultation moves through a one-way lifecycle:
//!
//! - **Pending**: awaiting an admin decision (initial state)
//! - **Approved**: accepted by an admin (terminal)
//! - **Rejected**: declined by an admin with a mandatory reason (terminal)
//!
//! Terminal states never transition again; attempting to do so fails with
//! [`DomainError::InvalidTransition`] and leaves the entity untouched.

pub mod consultation;
pub mod core;

// Re-export commonly used types
pub use consultation::{
    entities::Consultation,
    status::ConsultationStatus,
    value_objects::{ConsultationId, RejectionReason, UserId},
};
pub use core::error::DomainError;
