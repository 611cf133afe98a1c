//! # Chatter Core
//!
//! Core types shared by every layer of the Chatter API.
//!
//! - [`errors`]: the credential pipeline's error taxonomy and its HTTP mapping
//! - [`password`]: bcrypt hashing and verification, plus blocking-pool wrappers
//!
//! # Example
//!
//! ```ignore
//! use chatter_core::errors::AuthError;
//! use chatter_core::password::{hash_password, verify_password};
//!
//! let digest = hash_password("secure_password")?;
//! assert!(verify_password("secure_password", &digest)?);
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::{AuthError, StoreError};
pub use password::{hash_password, spawn_hash_password, spawn_verify_password, verify_password};
