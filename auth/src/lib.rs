//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for the shop backend:
//! - Password hashing (Argon2id)
//! - Signed bearer token issuance and validation (JWT, HS256)
//!
//! The service defines its own storage and orchestration on top of these
//! primitives; this crate knows nothing about users or databases.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest));
//! assert!(!hasher.verify("other_password", &digest));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenCodec;
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec.issue("alice", Duration::minutes(30)).unwrap();
//! let claims = codec.decode(&token).unwrap();
//! assert_eq!(claims.sub, "alice");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
