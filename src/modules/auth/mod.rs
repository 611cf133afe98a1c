//! Registration and login.
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: the credential pipeline
//! - `router.rs`: Axum router configuration

pub mod controller;
pub mod router;
pub mod service;

pub use service::AuthService;
