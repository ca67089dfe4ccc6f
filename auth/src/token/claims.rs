use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity claim carried by a bearer token.
///
/// Self-contained: the token string held by the client is the only copy,
/// nothing is stored server-side. Validity ends when `exp` passes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (the username the token asserts)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp), issuance time + TTL
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject expiring after `ttl`.
    pub fn new(subject: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}
