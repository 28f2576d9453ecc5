//! Adapters - Implementations of port interfaces.
//!
//! - `drone` - simulated and Tello UDP drivers
//! - `responder` - YAML pattern responder
//! - `memory` - in-memory stores
//! - `postgres` - PostgreSQL stores
//! - `process` - attack and face-detection subprocesses
//! - `http` - axum routes and session extraction

pub mod drone;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod process;
pub mod responder;
