// tests/support/helpers.rs
use super::mocks::{FixedClock, StrictPasswordHasher};
use axum::body::{self, Body};
use axum::http::{Method, Request, Response, StatusCode, header};
use secrecy::SecretString;
use serde_json::Value;
use std::sync::Arc;
use taskgate::application::{
    commands::accounts::{BootstrapAdminCommand, LoginCommand, RegisterAccountCommand},
    ports::{ClockPort, PasswordHasherPort, TokenServicePort},
    services::ApplicationServices,
};
use taskgate::domain::account::AccountDirectory;
use taskgate::infrastructure::{
    repositories::InMemoryAccountDirectory, security::token::JwtTokenService,
};
use taskgate::presentation::http::{routes::build_router, state::HttpState};

pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

pub fn token_service(clock: Arc<ClockPort>) -> Arc<TokenServicePort> {
    let secret = SecretString::new(TEST_SECRET.to_string());
    Arc::new(JwtTokenService::new(&secret, clock).expect("token service"))
}

pub fn build_services_with(
    directory: Arc<dyn AccountDirectory>,
    password_hasher: Arc<PasswordHasherPort>,
    clock: Arc<ClockPort>,
) -> Arc<ApplicationServices> {
    let tokens = token_service(Arc::clone(&clock));
    Arc::new(ApplicationServices::new(
        directory,
        password_hasher,
        tokens,
        clock,
    ))
}

/// In-memory directory, reversible hasher, real JWTs on a fixed clock.
pub fn build_services() -> (Arc<ApplicationServices>, Arc<InMemoryAccountDirectory>) {
    let directory = Arc::new(InMemoryAccountDirectory::new());
    let services = build_services_with(
        Arc::clone(&directory) as Arc<dyn AccountDirectory>,
        Arc::new(StrictPasswordHasher),
        Arc::new(FixedClock::default()),
    );
    (services, directory)
}

pub fn make_router(services: Arc<ApplicationServices>) -> axum::Router {
    build_router(
        HttpState { services },
        &["http://localhost:3000".to_string()],
    )
}

pub async fn register(services: &ApplicationServices, username: &str, password: &str) -> String {
    services
        .account_commands
        .register(RegisterAccountCommand {
            username: username.into(),
            password: password.into(),
        })
        .await
        .expect("register")
        .id
}

pub async fn seed_admin(services: &ApplicationServices, username: &str, password: &str) -> String {
    services
        .account_commands
        .bootstrap_admin(BootstrapAdminCommand {
            username: username.into(),
            password: password.into(),
        })
        .await
        .expect("bootstrap admin")
        .expect("admin created")
        .id
}

pub async fn login_token(services: &ApplicationServices, username: &str, password: &str) -> String {
    services
        .account_commands
        .login(LoginCommand {
            username: username.into(),
            password: password.into(),
        })
        .await
        .expect("login")
        .token
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub fn json_request(method: Method, uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn get_request(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).expect("request")
}

pub async fn read_json(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Checks status plus the `{"error", "message"}` envelope and returns the message.
pub async fn assert_error(resp: Response<Body>, status: StatusCode) -> String {
    assert_eq!(resp.status(), status);
    let body = read_json(resp).await;
    assert_eq!(
        body["error"].as_str(),
        status.canonical_reason(),
        "unexpected error body: {body}"
    );
    body["message"]
        .as_str()
        .expect("message field")
        .to_string()
}
