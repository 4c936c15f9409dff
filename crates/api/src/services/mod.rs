//! External collaborators and the session token service.

pub mod stripe;
pub mod token;
