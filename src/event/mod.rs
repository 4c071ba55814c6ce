//! Journal de registraciones del composer.

pub mod store;
pub mod types;

pub use store::{EventLog, InMemoryEventLog};
pub use types::{ComposeEvent, ComposeEventKind};
