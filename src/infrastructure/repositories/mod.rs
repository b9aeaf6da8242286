// src/infrastructure/repositories/mod.rs
mod error;
mod memory_account;
mod postgres_account;

pub use error::map_sqlx;
pub use memory_account::InMemoryAccountDirectory;
pub use postgres_account::PostgresAccountDirectory;
