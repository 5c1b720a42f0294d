//! Account registration rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 150;

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.@+-]+$").expect("username pattern is valid"));

/// Usernames are 3-150 characters of letters, digits, and `@.+-_`.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    let len = username.chars().count();
    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&len) {
        return Err(CoreError::Validation(format!(
            "Username must be between {MIN_USERNAME_LENGTH} and {MAX_USERNAME_LENGTH} characters"
        )));
    }
    if !USERNAME_RE.is_match(username) {
        return Err(CoreError::Validation(
            "Username may only contain letters, digits and @/./+/-/_".into(),
        ));
    }
    Ok(())
}

/// Both password fields of a registration form must match.
pub fn validate_password_confirmation(password: &str, confirm: &str) -> Result<(), CoreError> {
    if password != confirm {
        return Err(CoreError::Validation("Passwords don't match".into()));
    }
    Ok(())
}
