//! User management commands.
//!
//! # Usage
//!
//! ```bash
//! # Grant the admin role after a user's first login
//! remedia user set-role -e admin@example.com -r admin
//! ```

use remedia_core::{Email, Role};

use remedia_api::db::{RepositoryError, UserRepository};

use super::{CommandError, connect};

/// Change a user's role.
///
/// The user must already exist (accounts are created by first login); this
/// is how the first admin is bootstrapped and how sellers are promoted
/// outside the admin UI.
pub async fn set_role(email: &str, role: &str) -> Result<(), CommandError> {
    let role: Role = role
        .parse()
        .map_err(|_| CommandError::InvalidRole(role.to_owned()))?;

    let email = Email::parse(email).map_err(|_| CommandError::InvalidEmail(email.to_owned()))?;

    let pool = connect().await?;

    let user = UserRepository::new(&pool)
        .update_role_status(&email, Some(role), None)
        .await
        .map_err(|err| match err {
            RepositoryError::NotFound => CommandError::UserNotFound(email.as_str().to_owned()),
            other => other.into(),
        })?;

    tracing::info!(
        "Role updated: {} is now {:?} (status {:?})",
        user.email.as_str(),
        user.role,
        user.status
    );

    Ok(())
}
