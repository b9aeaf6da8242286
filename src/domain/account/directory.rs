use crate::domain::account::{
    entity::{Account, NewAccount},
    value_objects::{AccountId, Role},
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Persistent account store.
///
/// Implementations must reject a second account with the same username in
/// `create` with [`DomainError::Conflict`](crate::domain::errors::DomainError::Conflict).
/// Callers check `exists` first, but that check races with concurrent
/// registrations; the directory constraint is what keeps usernames unique.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    async fn create(&self, new_account: NewAccount) -> DomainResult<Account>;

    async fn get_by_username(&self, username: &str) -> DomainResult<Option<Account>>;

    async fn get_by_id(&self, id: AccountId) -> DomainResult<Option<Account>>;

    /// Fails with `DomainError::NotFound` when no account has that username.
    async fn set_role(&self, username: &str, role: Role) -> DomainResult<()>;

    async fn exists(&self, username: &str) -> DomainResult<bool>;
}
