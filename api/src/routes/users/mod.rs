//! User account route handlers
//!
//! - `POST /users/register` creates an account
//! - `POST /users/login` exchanges credentials for a token pair
//! - `GET /users/profile` resolves the account behind a bearer token

pub mod login;
pub mod profile;
pub mod register;

pub use login::login;
pub use profile::profile;
pub use register::register;
