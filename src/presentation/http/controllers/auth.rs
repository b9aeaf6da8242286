// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::accounts::{LoginCommand, RegisterAccountCommand},
    dto::{AccountDto, AuthTokenDto, IdentityDto},
};
use crate::presentation::http::error::{ErrorBody, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created with the user role.", body = AccountDto),
        (status = 400, description = "Username or password rejected.", body = ErrorBody),
        (status = 409, description = "Username already taken.", body = ErrorBody)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<AccountDto>)> {
    let command = RegisterAccountCommand {
        username: payload.username,
        password: payload.password,
    };

    let account = state
        .services
        .account_commands
        .register(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(account)))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed bearer token.", body = AuthTokenDto),
        (status = 400, description = "Username or password missing.", body = ErrorBody),
        (status = 401, description = "Invalid credentials.", body = ErrorBody)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<AuthTokenDto>> {
    let command = LoginCommand {
        username: payload.username,
        password: payload.password,
    };

    state
        .services
        .account_commands
        .login(command)
        .await
        .into_http()
        .map(Json)
}

/// Echoes the identity carried by the presented token.
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "Identity asserted by the token.", body = IdentityDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorBody)
    ),
    tag = "Auth"
)]
pub async fn me(Authenticated(account): Authenticated) -> Json<IdentityDto> {
    Json(IdentityDto::from(&account))
}
