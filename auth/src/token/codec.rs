use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Signed token codec for encoding and decoding identity claims.
///
/// Produces compact, tamper-evident strings using HS256 (HMAC with
/// SHA-256). Any bit-flip in the payload or signature, and any token
/// signed with a different secret, is rejected on decode.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a new codec with a shared secret.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a token for `subject` expiring after `ttl`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        self.encode(&Claims::new(subject, ttl))
    }

    /// Encode claims into a signed token string.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token string.
    ///
    /// Validates the signature and the embedded expiry (no leeway).
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not match this codec's secret
    /// * `Expired` - Current time exceeds the embedded expiry
    /// * `Malformed` - String is not a well-formed token
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
