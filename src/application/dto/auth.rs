use crate::domain::account::{Account, AccountId, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthTokenDto {
    pub token: String,
    pub token_type: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

/// What gets signed into a token at issuance.
#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub account_id: AccountId,
    pub username: String,
    pub role: Role,
}

impl From<&Account> for TokenSubject {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.id,
            username: account.username.to_string(),
            role: account.role,
        }
    }
}

/// A validated token payload. The role is the one recorded at issuance time
/// and is not re-read from the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityAssertion {
    pub subject_id: AccountId,
    pub username: String,
    pub role: Role,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Request-scoped identity attached by the authorization gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAccount {
    pub id: AccountId,
    pub username: String,
    pub role: Role,
}

impl AuthenticatedAccount {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<IdentityAssertion> for AuthenticatedAccount {
    fn from(assertion: IdentityAssertion) -> Self {
        Self {
            id: assertion.subject_id,
            username: assertion.username,
            role: assertion.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IdentityDto {
    pub subject_id: String,
    pub username: String,
    pub role: Role,
}

impl From<&AuthenticatedAccount> for IdentityDto {
    fn from(account: &AuthenticatedAccount) -> Self {
        Self {
            subject_id: account.id.to_string(),
            username: account.username.clone(),
            role: account.role,
        }
    }
}
