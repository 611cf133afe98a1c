//! # Chatter Models
//!
//! Domain models and DTOs for the Chatter API.
//!
//! - [`users`]: the stored [`User`] record and the [`CredentialsRequest`] payload
//!   accepted by registration and login

pub mod users;

pub use users::{CredentialsRequest, NewUser, User};
