use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateEmail;

use crate::errors::{AppError, AppResult};

// Letters, spaces, hyphens, apostrophes; 2-20 characters.
static USER_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s'-]{2,20}$").expect("user name pattern compiles"));

// Any character outside alphanumerics and plain spaces disqualifies a quiz name.
static QUIZ_NAME_FORBIDDEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9 ]").expect("quiz name pattern compiles"));

pub const QUIZ_NAME_MIN_LEN: usize = 3;
pub const QUIZ_NAME_MAX_LEN: usize = 30;
pub const QUIZ_DESCRIPTION_MAX_LEN: usize = 100;
pub const PASSWORD_MIN_LEN: usize = 8;

pub fn validate_email_format(email: &str) -> AppResult<()> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(AppError::ValidationError("Email must be valid".to_string()))
    }
}

pub fn validate_first_name(name: &str) -> AppResult<()> {
    validate_user_name(name, "First name")
}

pub fn validate_last_name(name: &str) -> AppResult<()> {
    validate_user_name(name, "Last name")
}

fn validate_user_name(name: &str, which: &str) -> AppResult<()> {
    if USER_NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(AppError::ValidationError(format!(
            "{} must only contain letters, spaces, hyphens, or apostrophes \
             and be between 2-20 characters",
            which
        )))
    }
}

/// At least 8 characters, with at least one letter and one digit.
pub fn validate_password(password: &str) -> AppResult<()> {
    let long_enough = password.chars().count() >= PASSWORD_MIN_LEN;
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if long_enough && has_letter && has_digit {
        Ok(())
    } else {
        Err(AppError::ValidationError(
            "Password must contain at least 8 characters and at least one number and letter"
                .to_string(),
        ))
    }
}

/// Charset is checked before length so a short name full of symbols reports
/// the charset problem first.
pub fn validate_quiz_name(name: &str) -> AppResult<()> {
    if QUIZ_NAME_FORBIDDEN_RE.is_match(name) {
        return Err(AppError::ValidationError(
            "Quiz name must only contain alphanumeric characters and spaces".to_string(),
        ));
    }

    let len = name.chars().count();
    if len < QUIZ_NAME_MIN_LEN {
        return Err(AppError::ValidationError(format!(
            "Quiz name should be at least {} characters long",
            QUIZ_NAME_MIN_LEN
        )));
    }
    if len > QUIZ_NAME_MAX_LEN {
        return Err(AppError::ValidationError(format!(
            "Quiz name should not be greater than {} characters",
            QUIZ_NAME_MAX_LEN
        )));
    }

    Ok(())
}

pub fn validate_quiz_description(description: &str) -> AppResult<()> {
    if description.chars().count() > QUIZ_DESCRIPTION_MAX_LEN {
        return Err(AppError::ValidationError(format!(
            "Description should be less than or equal to {} characters long",
            QUIZ_DESCRIPTION_MAX_LEN
        )));
    }
    Ok(())
}
