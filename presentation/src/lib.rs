//! Presentation layer for studio-consult
//!
//! View contracts over the consultation store: the admin pending list, the
//! end-user status view, transient notifications, and the CLI definitions.

pub mod cli;
pub mod notification;
pub mod views;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use notification::{Notification, NotificationKind, NotificationSlot};
pub use views::{
    pending_list::{PendingListView, RejectPrompt},
    status::StatusView,
};
