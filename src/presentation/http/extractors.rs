// src/presentation/http/extractors.rs
use crate::application::{dto::AuthenticatedAccount, error::ApplicationError};
use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

/// The identity attached by the authentication middleware. Handlers on routes
/// without that middleware reject with 401.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedAccount);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedAccount>()
            .cloned()
            .map(Self)
            .ok_or_else(|| HttpError::from_error(ApplicationError::MissingCredentials))
    }
}
