use crate::application::error::{ApplicationError, ApplicationResult};

pub(super) const MIN_PASSWORD_LENGTH: usize = 8;

pub(super) fn validate_password(password: &str, username: &str) -> ApplicationResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApplicationError::validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    if password.chars().all(|c| c.is_ascii_digit()) {
        return Err(ApplicationError::validation(
            "password cannot be entirely numeric",
        ));
    }

    if password.eq_ignore_ascii_case(username) {
        return Err(ApplicationError::validation(
            "password is too similar to the username",
        ));
    }

    Ok(())
}
