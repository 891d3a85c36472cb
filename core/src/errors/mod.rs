//! Domain error type shared by every service and repository.
//!
//! Errors carry a [`ErrorKind`] that the delivery layer maps to a status code,
//! the operation that produced them, a message that is safe to show to the
//! caller, and optionally the offending field and the underlying cause.

pub mod messages;
mod types;


pub use types::{BoxError, DomainError, ErrorKind};
