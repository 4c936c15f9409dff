//! Request middleware: authentication extractors and cookie policy.

pub mod auth;
pub mod session;

pub use auth::{RequireAdmin, RequireAuth, RequireSeller};
pub use session::{TOKEN_COOKIE, removal_cookie, session_cookie};
