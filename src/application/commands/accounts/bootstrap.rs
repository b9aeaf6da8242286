use super::{AccountCommandService, password::validate_password};
use crate::{
    application::{
        dto::AccountDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::account::{Role, Username},
};

pub struct BootstrapAdminCommand {
    pub username: String,
    pub password: String,
}

impl AccountCommandService {
    /// Create the configured admin account unless the username is already
    /// taken. Returns `None` when nothing was created.
    pub async fn bootstrap_admin(
        &self,
        command: BootstrapAdminCommand,
    ) -> ApplicationResult<Option<AccountDto>> {
        let username = Username::new(command.username)?;
        validate_password(&command.password)?;

        match self.ensure_username_available(&username).await {
            Ok(()) => {}
            Err(ApplicationError::DuplicateAccount) => {
                tracing::info!(username = %username, "bootstrap admin already present");
                return Ok(None);
            }
            Err(err) => return Err(err),
        }

        match self
            .create_account(username, &command.password, Role::Admin)
            .await
        {
            Ok(account) => {
                tracing::info!(account_id = %account.id, "bootstrap admin created");
                Ok(Some(account.into()))
            }
            Err(ApplicationError::DuplicateAccount) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
