use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Every authentication failure renders the same 401 body so a client cannot
/// tell a missing header from a bad signature or an unknown user.
const UNAUTHORIZED_MESSAGE: &str = "invalid credentials";
const INTERNAL_MESSAGE: &str = "internal server error";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::InvalidInput(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::DuplicateAccount => {
                Self::new(StatusCode::CONFLICT, "username already exists".into())
            }
            ApplicationError::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, msg),
            ApplicationError::InsufficientPrivilege => {
                Self::new(StatusCode::FORBIDDEN, "admin privileges required".into())
            }
            ApplicationError::MissingCredentials
            | ApplicationError::InvalidCredentials
            | ApplicationError::InvalidToken => {
                Self::new(StatusCode::UNAUTHORIZED, UNAUTHORIZED_MESSAGE.into())
            }
            ApplicationError::Internal(detail) => {
                tracing::error!(error = %detail, "request failed with an internal error");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.into())
            }
        }
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorBody {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authentication_failures_are_indistinguishable() {
        let rendered: Vec<_> = [
            ApplicationError::MissingCredentials,
            ApplicationError::InvalidCredentials,
            ApplicationError::InvalidToken,
        ]
        .into_iter()
        .map(HttpError::from_error)
        .map(|err| (err.status, err.message))
        .collect();

        for (status, message) in &rendered {
            assert_eq!(*status, StatusCode::UNAUTHORIZED);
            assert_eq!(message, UNAUTHORIZED_MESSAGE);
        }
    }

    #[test]
    fn internal_detail_is_not_exposed() {
        let err = HttpError::from_error(ApplicationError::internal("pool exhausted at 10.0.0.3"));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, INTERNAL_MESSAGE);
    }

    #[test]
    fn statuses_follow_the_error_kind() {
        let cases = [
            (ApplicationError::invalid_input("too short"), StatusCode::BAD_REQUEST),
            (ApplicationError::not_found("account not found"), StatusCode::NOT_FOUND),
            (ApplicationError::DuplicateAccount, StatusCode::CONFLICT),
            (ApplicationError::forbidden("no"), StatusCode::FORBIDDEN),
            (ApplicationError::InsufficientPrivilege, StatusCode::FORBIDDEN),
        ];
        for (err, status) in cases {
            assert_eq!(HttpError::from_error(err).status(), status);
        }
    }
}
