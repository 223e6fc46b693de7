mod password;

pub use password::CredentialHasher;

use crate::error::{Error, Result};
use crate::store::Store;
use crate::types::{NewUser, User};

/// Registers a new user.
///
/// The email is lowercased before the duplicate check so later lookups are
/// case-insensitive, and the check runs against both username and email
/// before anything is written. The password is hashed exactly once.
pub fn register_user(
    store: &dyn Store,
    hasher: &CredentialHasher,
    new_user: &NewUser,
) -> Result<User> {
    let email = new_user.email.to_lowercase();

    if store
        .find_user_by_username_or_email(&new_user.username, &email)?
        .is_some()
    {
        return Err(Error::Conflict(format!(
            "user '{}' already exists",
            new_user.username
        )));
    }

    let password_hash = hasher.hash(&new_user.password)?;
    store.create_user(&new_user.username, &email, &password_hash)
}

/// Checks a raw password against the stored hash for `username`.
/// Unknown users verify as false rather than erroring.
pub fn verify_user_password(
    store: &dyn Store,
    hasher: &CredentialHasher,
    username: &str,
    password: &str,
) -> Result<bool> {
    match store.get_user_by_username(username)? {
        Some(user) => hasher.verify(password, &user.password),
        None => Ok(false),
    }
}
