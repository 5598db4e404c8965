//! # fleethub-domain
//!
//! Pure domain model for the fleethub IoT fleet backend.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Devices** (registered fleet members and their live snapshot)
//! - Define **Telemetry samples** (timestamped metric readings)
//! - Define **Command log entries** (control commands and their execution status)
//! - Define **Optimization scenarios** (caller-submitted action batches with
//!   tracked completion progress)
//! - Contain the pure derivation rules (scenario status from progress)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All mutation of fleet state lives in the `app` crate's store.

pub mod error;
pub mod id;
pub mod time;

pub mod command;
pub mod device;
pub mod optimization;
pub mod telemetry;
