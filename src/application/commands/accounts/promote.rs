use super::AccountCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::account::{Account, AccountId, Role},
};

pub struct PromoteAccountCommand {
    pub target_username: String,
    pub requester_id: String,
}

impl AccountCommandService {
    /// Grant the admin role to `target_username` on behalf of `requester_id`.
    ///
    /// Checks run in a fixed order and the first failure wins: empty input,
    /// unknown requester, non-admin requester, unknown target, target already
    /// admin. The requester's role is read from the directory, not from the
    /// token that carried the request.
    #[tracing::instrument(
        skip_all,
        fields(target = %command.target_username, requester = %command.requester_id)
    )]
    pub async fn promote(&self, command: PromoteAccountCommand) -> ApplicationResult<()> {
        // Usernames are stored verbatim, so the target is looked up as given.
        let target_username = command.target_username.as_str();
        let requester_id = command.requester_id.trim();
        if target_username.trim().is_empty() || requester_id.is_empty() {
            return Err(ApplicationError::invalid_input(
                "target username and requester id are required",
            ));
        }

        let requester = self.find_requester(requester_id).await?;
        if !requester.is_admin() {
            return Err(ApplicationError::forbidden("only admins can promote accounts"));
        }

        let target = self
            .directory
            .get_by_username(target_username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("account not found"))?;
        if target.is_admin() {
            return Err(ApplicationError::invalid_input("account is already an admin"));
        }

        self.directory
            .set_role(target.username.as_str(), Role::Admin)
            .await?;
        tracing::info!(account_id = %target.id, promoted_by = %requester.id, "account promoted");

        Ok(())
    }

    async fn find_requester(&self, requester_id: &str) -> ApplicationResult<Account> {
        // A malformed id cannot name an existing account.
        let Ok(id) = AccountId::parse(requester_id) else {
            return Err(ApplicationError::not_found("requester not found"));
        };

        self.directory
            .get_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("requester not found"))
    }
}
