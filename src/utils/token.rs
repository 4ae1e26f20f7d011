use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims carried by an auth token. `sub` is the store-assigned user id;
/// timestamps are unix seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub iat: i64,
    pub exp: i64,
}

/// Why a token failed to decode. Callers map these to distinct HTTP
/// statuses instead of collapsing them into one opaque failure.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired. Please log in again.")]
    Expired,
    #[error("Invalid token. Please log in again.")]
    InvalidSignature,
    #[error("Invalid token. Please log in again.")]
    Malformed,
}

/// Issue an HS256 token for `user_id`, valid for 24 hours from now.
pub fn encode_auth_token(user_id: i32, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        iat: now.timestamp(),
        exp: (now + Duration::days(1)).timestamp(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify and decode a token back to its subject id. Signature is checked
/// before expiry, so a forged-but-expired token reports `InvalidSignature`.
/// Structural problems (segment count, base64, missing or non-numeric sub)
/// come back as `Malformed`.
pub fn decode_auth_token(token: &str, secret: &str) -> Result<i32, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // No leeway: `now >= exp` is expired, exactly.
    validation.leeway = 0;

    match decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation) {
        Ok(data) => Ok(data.claims.sub),
        Err(e) => Err(match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed,
        }),
    }
}
