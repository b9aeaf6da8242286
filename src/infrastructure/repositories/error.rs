use crate::domain::errors::DomainError;

const CNT_ACCOUNT_USERNAME: &str = "accounts_username_key";
const CNT_ACCOUNT_ROLE: &str = "accounts_role_chk";
const CNT_ACCOUNT_USERNAME_LENGTH: &str = "accounts_username_length_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ACCOUNT_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_ACCOUNT_ROLE => DomainError::Validation("unknown role".into()),
                    CNT_ACCOUNT_USERNAME_LENGTH => {
                        DomainError::Validation("username is too short".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::PoolTimedOut => {
            DomainError::Persistence("timed out waiting for a database connection".into())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
