//! # API Shared
//!
//! Shared definitions for healthbot API surfaces.
//!
//! Contains:
//! - Request/response types (`dto` module), serialisable and documented for OpenAPI
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the workspace's main binary.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
