use std::sync::Arc;

use crate::{
    application::{
        dto::AccountDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::account::AccountDirectory,
};

pub struct AccountQueryService {
    directory: Arc<dyn AccountDirectory>,
}

impl AccountQueryService {
    pub fn new(directory: Arc<dyn AccountDirectory>) -> Self {
        Self { directory }
    }

    pub async fn get_by_username(&self, username: &str) -> ApplicationResult<AccountDto> {
        self.directory
            .get_by_username(username)
            .await?
            .map(AccountDto::from)
            .ok_or_else(|| ApplicationError::not_found("account not found"))
    }
}
