// src/domain/account/mod.rs
pub mod directory;
pub mod entity;
pub mod value_objects;

pub use directory::AccountDirectory;
pub use entity::{Account, NewAccount};
pub use value_objects::{AccountId, PasswordDigest, Role, Username};
