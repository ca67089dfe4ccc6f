use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::user::errors::EmailError;
use crate::user::errors::PasswordPolicyError;
use crate::user::errors::UsernameError;

/// Credential record aggregate.
///
/// Represents a registered user. The `password_hash` field never leaves
/// the domain: outward-facing representations are built from the other
/// fields only.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type, assigned once by the store and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Case-sensitive, 3-50 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 50;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `TooShort` - Username shorter than 3 characters
    /// * `TooLong` - Username longer than 50 characters
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let length = username.chars().count();
        if length < Self::MIN_LENGTH {
            Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(username))
        }
    }

    /// Get username as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email shape using an RFC 5322 compliant parser, capped at
/// 100 characters to match the storage column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    const MAX_LENGTH: usize = 100;

    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    /// * `TooLong` - Email longer than 100 characters
    pub fn new(email: String) -> Result<Self, EmailError> {
        let length = email.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Plaintext password accepted at registration, validated against policy
/// before it reaches the hasher. The 25-character upper bound is a literal
/// carry-over from the existing public schema.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 6;
    const MAX_LENGTH: usize = 25;

    /// Create a policy-checked password.
    ///
    /// # Errors
    /// * `TooShort` - Password shorter than 6 characters
    /// * `TooLong` - Password longer than 25 characters
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(PasswordPolicyError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(password))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keeps the plaintext out of debug logs.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(****)")
    }
}

/// Command to register a new user with validated fields
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: Password,
}

impl RegisterUserCommand {
    pub fn new(username: Username, email: EmailAddress, password: Password) -> Self {
        Self {
            username,
            email,
            password,
        }
    }
}

/// Credential record as handed to the store for insertion; the store
/// assigns the identifier, activity flag, and creation timestamp.
#[derive(Debug)]
pub struct NewUser {
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
}
