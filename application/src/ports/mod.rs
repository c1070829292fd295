//! Port definitions
//!
//! Interfaces the application layer needs from the outside world.
//! Adapters live in the infrastructure layer (or, for the decision
//! notification hook, in the presentation layer).

pub mod backend;
pub mod notifier;
