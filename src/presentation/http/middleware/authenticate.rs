// src/presentation/http/middleware/authenticate.rs
use crate::application::{dto::AuthenticatedAccount, error::ApplicationError};
use crate::domain::account::Role;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

/// Validates the bearer token and attaches the resulting
/// [`AuthenticatedAccount`] to the request extensions.
///
/// A missing header, a non-Bearer scheme and an empty token are all rejected
/// as missing credentials.
pub async fn require_authentication(mut req: Request<Body>, next: Next) -> Response {
    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return HttpError::from_error(ApplicationError::internal("application state missing"))
            .into_response();
    };

    let header = req.headers().typed_get::<Authorization<Bearer>>();
    let token = header.as_ref().map(|h| h.token());

    match state.services.gate().authenticate(token).await {
        Ok(account) => {
            req.extensions_mut().insert(account);
            next.run(req).await
        }
        Err(err) => HttpError::from_error(err).into_response(),
    }
}

/// Role guard for admin-only routes. Must run inside [`require_authentication`].
pub async fn require_admin(req: Request<Body>, next: Next) -> Response {
    let Some(state) = req.extensions().get::<HttpState>() else {
        return HttpError::from_error(ApplicationError::internal("application state missing"))
            .into_response();
    };
    let Some(account) = req.extensions().get::<AuthenticatedAccount>() else {
        return HttpError::from_error(ApplicationError::MissingCredentials).into_response();
    };

    if let Err(err) = state.services.gate().authorize(account, Role::Admin) {
        return HttpError::from_error(err).into_response();
    }

    next.run(req).await
}
