pub mod accounts;
pub mod auth;

pub use accounts::AccountDto;
pub use auth::{
    AuthTokenDto, AuthenticatedAccount, IdentityAssertion, IdentityDto, TokenSubject,
};
