// src/application/services/mod.rs
mod gate;

pub use gate::AuthorizationGate;

use std::sync::Arc;

use crate::{
    application::{
        commands::accounts::AccountCommandService,
        ports::{ClockPort, PasswordHasherPort, TokenServicePort},
        queries::accounts::AccountQueryService,
    },
    domain::account::AccountDirectory,
};

pub struct ApplicationServices {
    pub account_commands: Arc<AccountCommandService>,
    pub account_queries: Arc<AccountQueryService>,
    gate: Arc<AuthorizationGate>,
    token_service: Arc<TokenServicePort>,
}

impl ApplicationServices {
    pub fn new(
        directory: Arc<dyn AccountDirectory>,
        password_hasher: Arc<PasswordHasherPort>,
        token_service: Arc<TokenServicePort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        let account_commands = Arc::new(AccountCommandService::new(
            Arc::clone(&directory),
            Arc::clone(&password_hasher),
            Arc::clone(&token_service),
            Arc::clone(&clock),
        ));
        let account_queries = Arc::new(AccountQueryService::new(Arc::clone(&directory)));
        let gate = Arc::new(AuthorizationGate::new(Arc::clone(&token_service)));

        Self {
            account_commands,
            account_queries,
            gate,
            token_service,
        }
    }

    pub fn gate(&self) -> Arc<AuthorizationGate> {
        Arc::clone(&self.gate)
    }

    pub fn token_service(&self) -> Arc<TokenServicePort> {
        Arc::clone(&self.token_service)
    }
}
