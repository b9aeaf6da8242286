use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        dto::AuthenticatedAccount,
        error::ApplicationError,
        ports::TokenServicePort,
    },
    domain::account::Role,
};

/// Per-request enforcement point.
///
/// A request moves from unauthenticated to authenticated once its bearer token
/// validates, and is then either authorized or rejected by [`Self::authorize`]
/// on role-guarded routes. Nothing here touches the directory: the role that is
/// checked is the one embedded in the token at issuance.
pub struct AuthorizationGate {
    token_service: Arc<TokenServicePort>,
}

impl AuthorizationGate {
    pub fn new(token_service: Arc<TokenServicePort>) -> Self {
        Self { token_service }
    }

    /// `bearer_token` is the credential following the `Bearer` scheme, or
    /// `None` when the header was absent or used another scheme.
    pub async fn authenticate(
        &self,
        bearer_token: Option<&str>,
    ) -> ApplicationResult<AuthenticatedAccount> {
        let token = bearer_token
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(ApplicationError::MissingCredentials)?;

        let assertion = self.token_service.validate(token).await.map_err(|err| {
            tracing::debug!(error = %err, "bearer token rejected");
            ApplicationError::InvalidCredentials
        })?;

        Ok(assertion.into())
    }

    pub fn authorize(
        &self,
        account: &AuthenticatedAccount,
        required: Role,
    ) -> ApplicationResult<()> {
        match required {
            Role::User => Ok(()),
            Role::Admin if account.is_admin() => Ok(()),
            Role::Admin => {
                tracing::debug!(account_id = %account.id, "admin role required");
                Err(ApplicationError::InsufficientPrivilege)
            }
        }
    }
}
