//! Error types for the user system
use thiserror::Error;

/// Errors surfaced by registration and authentication.
///
/// The messages are meant to be shown to people: a caller can render
/// "email already registered" and "no such account" differently without
/// parsing strings.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum UserError {
    #[error("An account with email {email} is already registered")]
    DuplicateUser { email: String },

    #[error("No account found for email {email}")]
    NoSuchAccount { email: String },

    #[error("Email address must not be empty")]
    InvalidEmail,
}

impl UserError {
    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, UserError::NoSuchAccount { .. })
    }

    /// Check if this error indicates the email is already taken.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, UserError::DuplicateUser { .. })
    }

    /// The email address this error refers to, if any.
    pub fn email(&self) -> Option<&str> {
        match self {
            UserError::DuplicateUser { email } | UserError::NoSuchAccount { email } => Some(email),
            UserError::InvalidEmail => None,
        }
    }
}

impl From<UserError> for crate::Error {
    fn from(err: UserError) -> Self {
        crate::Error::User(err)
    }
}
