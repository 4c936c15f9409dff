//! Session cookie policy.
//!
//! The session credential travels in an HTTP-only cookie named `token`.
//! Attributes are environment-conditioned: production serves the cross-site
//! frontend over HTTPS (`Secure` + `SameSite=None`), development stays
//! same-site-strict and non-secure. Logout replaces the cookie with an
//! immediately-expiring one; the token itself stays valid until natural
//! expiry since no server-side invalidation exists.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use crate::config::Environment;
use crate::services::token::TOKEN_TTL_DAYS;

/// Session cookie name.
pub const TOKEN_COOKIE: &str = "token";

/// Build the session cookie carrying a freshly issued token.
#[must_use]
pub fn session_cookie(environment: Environment, token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(TOKEN_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookie.set_max_age(Duration::days(TOKEN_TTL_DAYS));
    apply_site_policy(&mut cookie, environment);
    cookie
}

/// Build the removal cookie that clears the session client-side.
#[must_use]
pub fn removal_cookie(environment: Environment) -> Cookie<'static> {
    let mut cookie = Cookie::new(TOKEN_COOKIE, "");
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookie.set_max_age(Duration::ZERO);
    apply_site_policy(&mut cookie, environment);
    cookie
}

fn apply_site_policy(cookie: &mut Cookie<'static>, environment: Environment) {
    if environment.is_production() {
        cookie.set_secure(true);
        cookie.set_same_site(SameSite::None);
    } else {
        cookie.set_secure(false);
        cookie.set_same_site(SameSite::Strict);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_development_policy() {
        let cookie = session_cookie(Environment::Development, "tok".to_owned());

        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.max_age(), Some(Duration::days(365)));
    }

    #[test]
    fn test_session_cookie_production_policy() {
        let cookie = session_cookie(Environment::Production, "tok".to_owned());

        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
        assert_eq!(cookie.http_only(), Some(true));
    }

    #[test]
    fn test_removal_cookie_expires_immediately() {
        let cookie = removal_cookie(Environment::Development);

        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
    }
}
