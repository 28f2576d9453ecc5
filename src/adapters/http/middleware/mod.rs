//! HTTP middleware and extractors.

mod session;

pub use session::{cookie_value, RequireSession, SessionRejection, AUTH_COOKIE, EMAIL_COOKIE};
