mod bootstrap;
mod login;
mod password;
mod promote;
mod register;
mod service;

pub use bootstrap::BootstrapAdminCommand;
pub use login::LoginCommand;
pub use promote::PromoteAccountCommand;
pub use register::RegisterAccountCommand;
pub use service::AccountCommandService;
