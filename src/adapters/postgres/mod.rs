//! PostgreSQL adapters - Database implementations for the store ports.
//!
//! - `PostgresIdentityStore` - users, detections and result slots

mod identity_store;

pub use identity_store::PostgresIdentityStore;
