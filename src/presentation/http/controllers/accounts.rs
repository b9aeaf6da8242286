// src/presentation/http/controllers/accounts.rs
use crate::application::{commands::accounts::PromoteAccountCommand, dto::AccountDto};
use crate::presentation::http::error::{ErrorBody, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PromoteRequest {
    pub username: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/accounts/promote",
    request_body = PromoteRequest,
    responses(
        (status = 200, description = "Target account is now an admin.", body = MessageResponse),
        (status = 400, description = "Empty username or target already admin.", body = ErrorBody),
        (status = 401, description = "Missing or invalid token.", body = ErrorBody),
        (status = 403, description = "Requester is not an admin.", body = ErrorBody),
        (status = 404, description = "Requester or target not found.", body = ErrorBody)
    ),
    tag = "Accounts"
)]
pub async fn promote(
    Extension(state): Extension<HttpState>,
    Authenticated(requester): Authenticated,
    Json(payload): Json<PromoteRequest>,
) -> HttpResult<Json<MessageResponse>> {
    let command = PromoteAccountCommand {
        target_username: payload.username.clone(),
        requester_id: requester.id.to_string(),
    };

    state
        .services
        .account_commands
        .promote(command)
        .await
        .into_http()?;

    Ok(Json(MessageResponse {
        message: format!("{} promoted to admin", payload.username),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/accounts/{username}",
    params(("username" = String, Path, description = "Exact, case-sensitive username")),
    responses(
        (status = 200, description = "Account record.", body = AccountDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorBody),
        (status = 403, description = "Token does not carry the admin role.", body = ErrorBody),
        (status = 404, description = "No such account.", body = ErrorBody)
    ),
    tag = "Accounts"
)]
pub async fn get_account(
    Extension(state): Extension<HttpState>,
    Path(username): Path<String>,
) -> HttpResult<Json<AccountDto>> {
    state
        .services
        .account_queries
        .get_by_username(&username)
        .await
        .into_http()
        .map(Json)
}
