//! In-memory store adapters.

mod identity_store;

pub use identity_store::InMemoryIdentityStore;
