// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("username already exists")]
    DuplicateAccount,

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("admin privileges required")]
    InsufficientPrivilege,

    #[error("missing credentials")]
    MissingCredentials,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid token")]
    InvalidToken,

    #[error("internal failure: {0}")]
    Internal(String),
}

impl ApplicationError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::InvalidInput(msg),
            DomainError::Conflict(_) => Self::DuplicateAccount,
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::Persistence(msg) => Self::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_onto_the_application_taxonomy() {
        assert_eq!(
            ApplicationError::from(DomainError::Conflict("dup".into())),
            ApplicationError::DuplicateAccount
        );
        assert_eq!(
            ApplicationError::from(DomainError::Validation("short".into())),
            ApplicationError::InvalidInput("short".into())
        );
        assert!(matches!(
            ApplicationError::from(DomainError::Persistence("driver exploded".into())),
            ApplicationError::Internal(_)
        ));
    }
}
