//! Error types returned by the services.
//!
//! The `Display` text of each variant is user-facing: the views render it
//! verbatim in the inline message region below a form.

use thiserror::Error;

/// Failure to authenticate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Unknown email, wrong password or wrong account type. Deliberately
    /// indistinguishable from the outside.
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Your session is no longer valid")]
    UnknownSession,
    #[error("Sign-in is unavailable right now: {0}")]
    Unavailable(String),
}

/// Failure to issue a one-time code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OtpError {
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Please wait {retry_in_secs}s before requesting another code")]
    TooSoon { retry_in_secs: i64 },
    #[error("Could not send the code: {0}")]
    Delivery(String),
}

/// A form or registration payload that cannot be accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("{0} must be a whole number")]
    InvalidNumber(&'static str),
    #[error("Please select {0}")]
    UnknownOption(&'static str),
    #[error("Phone number has not been verified")]
    PhoneNotVerified,
    #[error("An account with this email already exists")]
    EmailTaken,
    #[error("Registration is unavailable right now: {0}")]
    Unavailable(String),
}
