//! Data transfer helpers for the HTTP layer
//!
//! Request and response bodies are the core value objects; this module only
//! adds the actix-specific glue for the shared error body.

pub mod error;

pub use error::{ErrorResponse, ErrorResponseExt};
