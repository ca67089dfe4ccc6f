use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),

    #[error("Email too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for password policy violations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Password too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all user and authentication operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordPolicyError),

    // Domain-level errors
    #[error("Username already registered: {0}")]
    UsernameTaken(String),

    #[error("Email already registered: {0}")]
    EmailTaken(String),

    /// Unknown username and wrong password are deliberately merged so the
    /// caller cannot probe which usernames exist.
    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Inactive user")]
    InactiveAccount,

    /// Missing, invalid, or expired token, or a token whose subject no
    /// longer resolves to a credential record.
    #[error("Could not validate credentials")]
    Unauthorized,

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
