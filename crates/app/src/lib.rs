//! # fleethub-app
//!
//! Application core — the shared in-memory state store and the demo
//! optimization engine.
//!
//! ## Responsibilities
//! - Own all mutable fleet state in a single [`store::FleetStore`] instance
//!   (devices, telemetry history, command logs, scenario progress)
//! - Guarantee consistency of that state under concurrent request handlers
//! - Record applied optimization scenarios via [`engine::OptimizationEngine`]
//!   (nothing is executed — demo behavior)
//!
//! ## Dependency rule
//! Depends on `fleethub-domain` only (plus `tokio::sync` for the lock).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod engine;
pub mod store;
