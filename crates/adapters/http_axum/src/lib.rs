//! # fleethub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API under `/iot` (telemetry, devices, device control,
//!   optimization, live state)
//! - Validate request shapes: required fields, timestamp parsing, range
//!   checks — no business logic beyond existence checks
//! - Map store results into HTTP responses, and absent results into 404s
//!
//! ## Dependency rule
//! Depends on `fleethub-app` (for the store and engine) and `fleethub-domain`
//! (for domain types used in request/response mapping). Never leaks axum
//! types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
