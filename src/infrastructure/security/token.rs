// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, IdentityAssertion, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::{ClockPort, security::TokenService},
};
use crate::domain::account::{AccountId, Role};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Lifetime of every issued token.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Signed payload. Field names are the wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AssertionClaims {
    user_id: String,
    username: String,
    role: Role,
    iat: i64,
    nbf: i64,
    exp: i64,
}

impl AssertionClaims {
    fn into_assertion(self) -> Option<IdentityAssertion> {
        Some(IdentityAssertion {
            subject_id: AccountId::parse(&self.user_id).ok()?,
            username: self.username,
            role: self.role,
            issued_at: DateTime::<Utc>::from_timestamp(self.iat, 0)?,
            expires_at: DateTime::<Utc>::from_timestamp(self.exp, 0)?,
        })
    }
}

/// HMAC-signed JWTs keyed by a single process-wide secret.
///
/// The secret is fixed for the life of the service. Replacing it invalidates
/// every token issued under the old one; there is no key rotation.
#[derive(Clone)]
pub struct JwtTokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
    clock: Arc<ClockPort>,
}

impl JwtTokenService {
    pub fn new(secret: &SecretString, clock: Arc<ClockPort>) -> ApplicationResult<Self> {
        let secret = secret.expose_secret().as_bytes();
        if secret.is_empty() {
            return Err(ApplicationError::internal("token signing secret is not configured"));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Only the keyed-hash family; anything else in the header is refused
        // before the signature is looked at.
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        // exp/nbf are checked against the injected clock in `validate`.
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat", "nbf"]);

        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl: Duration::hours(TOKEN_TTL_HOURS),
            clock,
        })
    }
}

#[async_trait]
impl TokenService for JwtTokenService {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = self.clock.now();
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or_else(|| ApplicationError::internal("token expiration overflow"))?;

        let claims = AssertionClaims {
            user_id: subject.account_id.to_string(),
            username: subject.username,
            role: subject.role,
            iat: issued_at.timestamp(),
            nbf: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| ApplicationError::internal(format!("token signing failed: {err}")))?;

        Ok(AuthTokenDto {
            token,
            token_type: "Bearer".into(),
            issued_at,
            expires_at,
            expires_in: self.ttl.num_seconds(),
        })
    }

    async fn validate(&self, token: &str) -> ApplicationResult<IdentityAssertion> {
        let claims = decode::<AssertionClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| {
                tracing::debug!(error = %err, "token failed verification");
                ApplicationError::InvalidToken
            })?;

        let now = self.clock.now().timestamp();
        if claims.exp <= now {
            tracing::debug!(exp = claims.exp, now, "token expired");
            return Err(ApplicationError::InvalidToken);
        }
        if claims.nbf > now {
            tracing::debug!(nbf = claims.nbf, now, "token not yet valid");
            return Err(ApplicationError::InvalidToken);
        }

        claims.into_assertion().ok_or_else(|| {
            tracing::debug!("token payload has malformed fields");
            ApplicationError::InvalidToken
        })
    }
}
