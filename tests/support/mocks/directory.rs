// tests/support/mocks/directory.rs
use async_trait::async_trait;
use taskgate::domain::account::{Account, AccountDirectory, AccountId, NewAccount, Role};
use taskgate::domain::errors::{DomainError, DomainResult};
use taskgate::infrastructure::repositories::InMemoryAccountDirectory;

/// Simulates losing the registration race: `exists` always answers `false`,
/// so only the directory's own uniqueness check stops a duplicate.
#[derive(Default)]
pub struct RacyDirectory {
    inner: InMemoryAccountDirectory,
}

#[async_trait]
impl AccountDirectory for RacyDirectory {
    async fn create(&self, new_account: NewAccount) -> DomainResult<Account> {
        self.inner.create(new_account).await
    }

    async fn get_by_username(&self, username: &str) -> DomainResult<Option<Account>> {
        self.inner.get_by_username(username).await
    }

    async fn get_by_id(&self, id: AccountId) -> DomainResult<Option<Account>> {
        self.inner.get_by_id(id).await
    }

    async fn set_role(&self, username: &str, role: Role) -> DomainResult<()> {
        self.inner.set_role(username, role).await
    }

    async fn exists(&self, _username: &str) -> DomainResult<bool> {
        Ok(false)
    }
}

/// Every call fails as if the backing store were unreachable.
#[derive(Default)]
pub struct FailingDirectory;

fn unreachable_store() -> DomainError {
    DomainError::Persistence("connection refused (10.0.0.7:5432)".into())
}

#[async_trait]
impl AccountDirectory for FailingDirectory {
    async fn create(&self, _new_account: NewAccount) -> DomainResult<Account> {
        Err(unreachable_store())
    }

    async fn get_by_username(&self, _username: &str) -> DomainResult<Option<Account>> {
        Err(unreachable_store())
    }

    async fn get_by_id(&self, _id: AccountId) -> DomainResult<Option<Account>> {
        Err(unreachable_store())
    }

    async fn set_role(&self, _username: &str, _role: Role) -> DomainResult<()> {
        Err(unreachable_store())
    }

    async fn exists(&self, _username: &str) -> DomainResult<bool> {
        Err(unreachable_store())
    }
}
