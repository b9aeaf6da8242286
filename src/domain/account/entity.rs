// src/domain/account/entity.rs
use crate::domain::account::value_objects::{AccountId, PasswordDigest, Role, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub username: Username,
    pub password_digest: PasswordDigest,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: Username,
    pub password_digest: PasswordDigest,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl NewAccount {
    /// A regular self-registered account; the role is always [`Role::User`].
    pub fn new(
        username: Username,
        password_digest: PasswordDigest,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            password_digest,
            role: Role::default(),
            created_at,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn into_account(self, id: AccountId) -> Account {
        Account {
            id,
            username: self.username,
            password_digest: self.password_digest,
            role: self.role,
            created_at: self.created_at,
        }
    }
}
