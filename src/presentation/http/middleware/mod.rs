mod authenticate;

pub use authenticate::{require_admin, require_authentication};
