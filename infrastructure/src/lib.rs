//! Infrastructure layer for studio-consult
//!
//! Adapters for the outside world: the HTTP consultation backend and the
//! TOML/figment configuration stack.

pub mod backend;
pub mod config;

// Re-export commonly used types
pub use backend::http::HttpConsultationBackend;
pub use config::{ConfigLoader, FileConfig};
