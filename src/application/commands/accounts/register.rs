use super::{AccountCommandService, password::validate_password};
use crate::{
    application::{
        dto::AccountDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::account::{Account, NewAccount, PasswordDigest, Role, Username},
};

pub struct RegisterAccountCommand {
    pub username: String,
    pub password: String,
}

impl AccountCommandService {
    #[tracing::instrument(skip_all, fields(username = %command.username))]
    pub async fn register(&self, command: RegisterAccountCommand) -> ApplicationResult<AccountDto> {
        let username = Username::new(command.username)?;
        validate_password(&command.password)?;

        self.ensure_username_available(&username).await?;

        let account = self
            .create_account(username, &command.password, Role::User)
            .await?;
        tracing::info!(account_id = %account.id, "account registered");

        Ok(account.into())
    }

    // Fast path only. Two registrations can both get past this check; the
    // directory's uniqueness constraint decides which one wins.
    pub(super) async fn ensure_username_available(
        &self,
        username: &Username,
    ) -> ApplicationResult<()> {
        if self.directory.exists(username.as_str()).await? {
            return Err(ApplicationError::DuplicateAccount);
        }

        Ok(())
    }

    pub(super) async fn create_account(
        &self,
        username: Username,
        password: &str,
        role: Role,
    ) -> ApplicationResult<Account> {
        let digest = self.password_hasher.hash(password).await?;
        let password_digest = PasswordDigest::new(digest)?;

        let new_account = NewAccount::new(username, password_digest, self.clock.now()).with_role(role);
        let account = self.directory.create(new_account).await?;

        Ok(account)
    }
}
