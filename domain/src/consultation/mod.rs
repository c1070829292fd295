//! Consultation request lifecycle
//!
//! The [`Consultation`](entities::Consultation) entity, its status state
//! machine, and the value objects that guard its invariants.

pub mod entities;
pub mod status;
pub mod value_objects;
