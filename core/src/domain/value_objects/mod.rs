//! Request and response shapes exchanged with the user workflows.

pub mod requests;
pub mod responses;

pub use requests::{LoginRequest, RegisterRequest};
pub use responses::{LoginResponse, ProfileResponse, RegisterResponse, Tokens, UserInfo};
