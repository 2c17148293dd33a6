//! # API Shared
//!
//! Shared definitions for the KalpSağlık APIs.
//!
//! Contains:
//! - Wire types (`wire` module) with OpenAPI schemas, converted from `kalp-core` views
//! - Shared services like `HealthService`

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
