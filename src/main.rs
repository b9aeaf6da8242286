use anyhow::Result;
use secrecy::ExposeSecret;
use std::{net::SocketAddr, sync::Arc};
use taskgate::application::{
    commands::accounts::BootstrapAdminCommand,
    ports::{ClockPort, PasswordHasherPort, TokenServicePort},
    services::ApplicationServices,
};
use taskgate::config::{AppConfig, RECOMMENDED_SECRET_BYTES};
use taskgate::domain::account::AccountDirectory;
use taskgate::infrastructure::{
    database,
    repositories::{InMemoryAccountDirectory, PostgresAccountDirectory},
    security::{password::Argon2PasswordHasher, token::JwtTokenService},
    time::SystemClock,
};
use taskgate::presentation::http::{routes::build_router, state::HttpState};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    if config.jwt_secret_is_weak() {
        tracing::warn!(
            "JWT_SECRET is shorter than {RECOMMENDED_SECRET_BYTES} bytes; use a longer random value"
        );
    }

    let directory: Arc<dyn AccountDirectory> = match config.database_url() {
        Some(url) => {
            let pool = database::init_pool(url).await?;
            database::run_migrations(&pool).await?;
            tracing::info!("using postgres account directory");
            Arc::new(PostgresAccountDirectory::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; accounts are kept in memory and lost on restart");
            Arc::new(InMemoryAccountDirectory::new())
        }
    };

    let password_hasher: Arc<PasswordHasherPort> = match config.argon2_cost() {
        Some(cost) => Arc::new(Argon2PasswordHasher::with_cost(
            cost.memory_kib,
            cost.iterations,
            cost.parallelism,
        )?),
        None => Arc::new(Argon2PasswordHasher::default()),
    };
    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let token_service: Arc<TokenServicePort> =
        Arc::new(JwtTokenService::new(config.jwt_secret(), Arc::clone(&clock))?);

    let services = Arc::new(ApplicationServices::new(
        directory,
        password_hasher,
        token_service,
        clock,
    ));

    if let Some(admin) = config.bootstrap_admin() {
        services
            .account_commands
            .bootstrap_admin(BootstrapAdminCommand {
                username: admin.username.clone(),
                password: admin.password.expose_secret().clone(),
            })
            .await?;
    }

    let state = HttpState {
        services: Arc::clone(&services),
    };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
