use super::AccountCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject},
        error::{ApplicationError, ApplicationResult},
    },
    domain::account::Account,
};

pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

impl AccountCommandService {
    #[tracing::instrument(skip_all, fields(username = %command.username))]
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<AuthTokenDto> {
        if command.username.is_empty() || command.password.is_empty() {
            return Err(ApplicationError::invalid_input(
                "username and password are required",
            ));
        }

        let account = match self
            .find_and_authenticate(&command.username, &command.password)
            .await
        {
            Ok(account) => account,
            Err(err) => {
                if err == ApplicationError::InvalidCredentials {
                    tracing::info!("login rejected");
                }
                return Err(err);
            }
        };

        let token = self.token_service.issue(TokenSubject::from(&account)).await?;
        tracing::info!(account_id = %account.id, role = %account.role, "login succeeded");

        Ok(token)
    }

    // Unknown username and wrong password must be indistinguishable to the
    // caller, so both branches return the same error.
    async fn find_and_authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> ApplicationResult<Account> {
        let Some(account) = self.directory.get_by_username(username).await? else {
            tracing::debug!("no account with that username");
            return Err(ApplicationError::InvalidCredentials);
        };

        let matches = self
            .password_hasher
            .verify(password, account.password_digest.as_str())
            .await?;
        if !matches {
            tracing::debug!("password mismatch");
            return Err(ApplicationError::InvalidCredentials);
        }

        Ok(account)
    }
}
