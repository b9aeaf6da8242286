// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, IdentityAssertion, TokenSubject},
};
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Produce a salted one-way digest of `password`.
    async fn hash(&self, password: &str) -> ApplicationResult<String>;

    /// `Ok(false)` on mismatch or on a digest that cannot be parsed. An `Err`
    /// only signals that the hashing infrastructure itself failed.
    async fn verify(&self, password: &str, digest: &str) -> ApplicationResult<bool>;
}

#[async_trait]
pub trait TokenService: Send + Sync {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;

    /// Every structural, signature, algorithm or time failure is reported as
    /// `ApplicationError::InvalidToken`.
    async fn validate(&self, token: &str) -> ApplicationResult<IdentityAssertion>;
}
