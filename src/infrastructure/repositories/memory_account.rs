// src/infrastructure/repositories/memory_account.rs
use crate::domain::account::{Account, AccountDirectory, AccountId, NewAccount, Role};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Store {
    accounts: HashMap<AccountId, Account>,
    by_username: HashMap<String, AccountId>,
}

/// Process-local directory used when no database is configured.
///
/// The uniqueness check and the insert happen under one write lock, so two
/// concurrent registrations for the same name cannot both succeed.
#[derive(Default)]
pub struct InMemoryAccountDirectory {
    store: RwLock<Store>,
}

impl InMemoryAccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, Store>> {
        self.store
            .read()
            .map_err(|_| DomainError::Persistence("account store lock poisoned".into()))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Store>> {
        self.store
            .write()
            .map_err(|_| DomainError::Persistence("account store lock poisoned".into()))
    }
}

#[async_trait]
impl AccountDirectory for InMemoryAccountDirectory {
    async fn create(&self, new_account: NewAccount) -> DomainResult<Account> {
        let mut store = self.write()?;
        if store.by_username.contains_key(new_account.username.as_str()) {
            return Err(DomainError::Conflict("username already exists".into()));
        }

        let account = new_account.into_account(AccountId::generate());
        store
            .by_username
            .insert(account.username.as_str().to_owned(), account.id);
        store.accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn get_by_username(&self, username: &str) -> DomainResult<Option<Account>> {
        let store = self.read()?;
        Ok(store
            .by_username
            .get(username)
            .and_then(|id| store.accounts.get(id))
            .cloned())
    }

    async fn get_by_id(&self, id: AccountId) -> DomainResult<Option<Account>> {
        Ok(self.read()?.accounts.get(&id).cloned())
    }

    async fn set_role(&self, username: &str, role: Role) -> DomainResult<()> {
        let mut store = self.write()?;
        let id = store
            .by_username
            .get(username)
            .copied()
            .ok_or_else(|| DomainError::NotFound("account not found".into()))?;
        match store.accounts.get_mut(&id) {
            Some(account) => {
                account.role = role;
                Ok(())
            }
            None => Err(DomainError::NotFound("account not found".into())),
        }
    }

    async fn exists(&self, username: &str) -> DomainResult<bool> {
        Ok(self.read()?.by_username.contains_key(username))
    }
}
