//! Identity query handlers.

mod resolve_person;

pub use resolve_person::IdentityResolver;
