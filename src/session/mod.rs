//! In-memory conversation sessions.
//!
//! Each UI session owns one append-only conversation log, kept only for
//! the lifetime of the process. There is no persistence: a reset empties
//! the log and a process restart discards everything, by design.

pub mod ids;
pub mod registry;
pub mod types;

pub use ids::SessionId;
pub use registry::{SessionError, SessionRegistry, Turn};
pub use types::{Message, Role};
