use chrono::{Duration, TimeZone, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::account::entities::IssuedToken;
use crate::domain::account::errors::{AccountError, TokenError};
use crate::domain::account::ports::TokenIssuer;

/// Claims carried by an access token
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
  /// User id
  sub: String,
  /// Issued at (seconds since epoch)
  iat: i64,
  /// Expiry (seconds since epoch)
  exp: i64,
}

/// HS256 JWT issuer
pub struct JwtTokenIssuer {
  encoding_key: EncodingKey,
  decoding_key: DecodingKey,
  validation: Validation,
  ttl: Duration,
}

impl JwtTokenIssuer {
  /// Creates an issuer signing with `secret`; tokens live for `ttl_seconds`
  pub fn new(secret: &[u8], ttl_seconds: i64) -> Self {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);

    Self {
      encoding_key: EncodingKey::from_secret(secret),
      decoding_key: DecodingKey::from_secret(secret),
      validation,
      ttl: Duration::seconds(ttl_seconds),
    }
  }
}

impl TokenIssuer for JwtTokenIssuer {
  fn issue(&self, user_id: Uuid) -> Result<IssuedToken, AccountError> {
    let issued_at = Utc::now();
    let expires_at = issued_at + self.ttl;

    let claims = Claims {
      sub: user_id.to_string(),
      iat: issued_at.timestamp(),
      exp: expires_at.timestamp(),
    };

    let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
      .map_err(|e| AccountError::Token(TokenError::SigningFailed(e.to_string())))?;

    Ok(IssuedToken {
      token,
      // Second precision, matching what the token itself asserts
      expires_at: Utc
        .timestamp_opt(claims.exp, 0)
        .single()
        .unwrap_or(expires_at),
    })
  }

  fn validate(&self, token: &str) -> Result<Uuid, AccountError> {
    let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
      tracing::debug!("Rejected token: {}", e);
      AccountError::InvalidToken
    })?;

    Uuid::parse_str(&data.claims.sub).map_err(|_| AccountError::InvalidToken)
  }
}
