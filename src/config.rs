// src/config.rs
use secrecy::{ExposeSecret, SecretString};
use std::env;
use thiserror::Error;

/// HMAC keys shorter than this still work but trigger a startup warning.
pub const RECOMMENDED_SECRET_BYTES: usize = 32;

#[derive(Clone, Debug)]
pub struct Argon2Cost {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Clone, Debug)]
pub struct BootstrapAdmin {
    pub username: String,
    pub password: SecretString,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    jwt_secret: SecretString,
    listen_addr: String,
    database_url: Option<String>,
    allowed_origins: Vec<String>,
    argon2_cost: Option<Argon2Cost>,
    bootstrap_admin: Option<BootstrapAdmin>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_u32(key: &'static str, value: &str) -> Result<u32, ConfigError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ConfigError::Invalid(format!("{key} must be a positive integer")))
}

impl AppConfig {
    /// Build configuration from the process environment, loading a `.env`
    /// file first when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = non_empty(lookup("JWT_SECRET")).ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let listen_addr = non_empty(lookup("LISTEN_ADDR")).unwrap_or_else(default_listen_addr);
        let database_url = non_empty(lookup("DATABASE_URL"));

        let allowed_origins = non_empty(lookup("ALLOWED_ORIGINS"))
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let memory = non_empty(lookup("ARGON2_MEMORY_KIB"));
        let iterations = non_empty(lookup("ARGON2_ITERATIONS"));
        let parallelism = non_empty(lookup("ARGON2_PARALLELISM"));
        let argon2_cost = if memory.is_none() && iterations.is_none() && parallelism.is_none() {
            None
        } else {
            // Unset knobs fall back to the argon2 crate defaults.
            let defaults = argon2::Params::default();
            Some(Argon2Cost {
                memory_kib: memory
                    .map(|v| parse_u32("ARGON2_MEMORY_KIB", &v))
                    .transpose()?
                    .unwrap_or(defaults.m_cost()),
                iterations: iterations
                    .map(|v| parse_u32("ARGON2_ITERATIONS", &v))
                    .transpose()?
                    .unwrap_or(defaults.t_cost()),
                parallelism: parallelism
                    .map(|v| parse_u32("ARGON2_PARALLELISM", &v))
                    .transpose()?
                    .unwrap_or(defaults.p_cost()),
            })
        };

        let bootstrap_admin = match (
            non_empty(lookup("BOOTSTRAP_ADMIN_USERNAME")),
            non_empty(lookup("BOOTSTRAP_ADMIN_PASSWORD")),
        ) {
            (Some(username), Some(password)) => Some(BootstrapAdmin {
                username,
                password: SecretString::new(password),
            }),
            (None, None) => None,
            _ => {
                return Err(ConfigError::Invalid(
                    "BOOTSTRAP_ADMIN_USERNAME and BOOTSTRAP_ADMIN_PASSWORD must be set together"
                        .into(),
                ));
            }
        };

        Ok(Self {
            jwt_secret: SecretString::new(jwt_secret),
            listen_addr,
            database_url,
            allowed_origins,
            argon2_cost,
            bootstrap_admin,
        })
    }

    pub fn jwt_secret(&self) -> &SecretString {
        &self.jwt_secret
    }

    pub fn jwt_secret_is_weak(&self) -> bool {
        self.jwt_secret.expose_secret().len() < RECOMMENDED_SECRET_BYTES
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn argon2_cost(&self) -> Option<&Argon2Cost> {
        self.argon2_cost.as_ref()
    }

    pub fn bootstrap_admin(&self) -> Option<&BootstrapAdmin> {
        self.bootstrap_admin.as_ref()
    }
}
