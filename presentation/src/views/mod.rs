//! Consultation views

pub mod pending_list;
pub mod status;
