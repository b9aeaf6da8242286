use std::sync::Arc;

use crate::application::ports::{ClockPort, PasswordHasherPort, TokenServicePort};
use crate::domain::account::AccountDirectory;

/// Registration, login, promotion and admin bootstrap. Each operation lives in
/// its own module as an `impl` block on this service.
pub struct AccountCommandService {
    pub(super) directory: Arc<dyn AccountDirectory>,
    pub(super) password_hasher: Arc<PasswordHasherPort>,
    pub(super) token_service: Arc<TokenServicePort>,
    pub(super) clock: Arc<ClockPort>,
}

impl AccountCommandService {
    pub fn new(
        directory: Arc<dyn AccountDirectory>,
        password_hasher: Arc<PasswordHasherPort>,
        token_service: Arc<TokenServicePort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            directory,
            password_hasher,
            token_service,
            clock,
        }
    }
}
