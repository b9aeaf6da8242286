// tests/support/mocks/security.rs
use async_trait::async_trait;
use taskgate::application::{
    ApplicationResult, error::ApplicationError, ports::security::PasswordHasher,
};

/// Reversible stand-in for argon2: `hash("pw") == "hash::pw"`.
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, digest: &str) -> ApplicationResult<bool> {
        Ok(digest == format!("hash::{password}"))
    }
}

#[derive(Clone, Debug, Default)]
pub struct FailingPasswordHasher;

#[async_trait]
impl PasswordHasher for FailingPasswordHasher {
    async fn hash(&self, _password: &str) -> ApplicationResult<String> {
        Err(ApplicationError::internal("hasher offline"))
    }

    async fn verify(&self, _password: &str, _digest: &str) -> ApplicationResult<bool> {
        Err(ApplicationError::internal("hasher offline"))
    }
}
