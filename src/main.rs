//! JobHop server binary.
//!
//! Loads configuration, connects to PostgreSQL, selects the message
//! generation strategy once, wires the handlers, and serves the API.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tracing_subscriber::EnvFilter;

use jobhop::adapters::auth::MockSessionValidator;
use jobhop::adapters::http::{api_router, ApplicationHandlers, MotivationHandlers};
use jobhop::adapters::motivation::{OpenRouterConfig, OpenRouterGenerator, StaticPoolGenerator};
use jobhop::adapters::postgres::{PostgresApplicationRepository, PostgresMessageStore};
use jobhop::application::handlers::applications::{
    ApplicationStatsHandler, CreateApplicationHandler, DeleteApplicationHandler,
    GetApplicationHandler, ListApplicationsHandler, UpdateApplicationHandler,
};
use jobhop::application::handlers::motivation::DailyMessageHandler;
use jobhop::config::{AppConfig, GeneratorStrategy};
use jobhop::ports::{ApplicationRepository, MessageGenerator, MessageStore, SessionValidator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let repository: Arc<dyn ApplicationRepository> =
        Arc::new(PostgresApplicationRepository::new(pool.clone()));
    let message_store: Arc<dyn MessageStore> = Arc::new(PostgresMessageStore::new(pool));

    // Strategy selection happens exactly once, here. Everything downstream
    // only sees the MessageGenerator port.
    let generator: Arc<dyn MessageGenerator> = match config.motivation.strategy {
        GeneratorStrategy::StaticPool => {
            tracing::info!("using static pool message generator");
            Arc::new(StaticPoolGenerator::new())
        }
        GeneratorStrategy::OpenRouter => {
            tracing::info!("using OpenRouter message generator");
            let api_key = config
                .motivation
                .openrouter_api_key
                .as_ref()
                .ok_or("OpenRouter API key missing")?;
            let mut or_config = OpenRouterConfig::new(api_key.expose_secret().clone());
            if let Some(model) = &config.motivation.openrouter_model {
                or_config = or_config.with_model(model.clone());
            }
            if let Some(base_url) = &config.motivation.openrouter_base_url {
                or_config = or_config.with_base_url(base_url.clone());
            }
            Arc::new(OpenRouterGenerator::new(or_config)?)
        }
    };

    let application_handlers = ApplicationHandlers::new(
        Arc::new(ListApplicationsHandler::new(repository.clone())),
        Arc::new(GetApplicationHandler::new(repository.clone())),
        Arc::new(CreateApplicationHandler::new(repository.clone())),
        Arc::new(UpdateApplicationHandler::new(repository.clone())),
        Arc::new(DeleteApplicationHandler::new(repository.clone())),
        Arc::new(ApplicationStatsHandler::new(repository)),
    );

    let motivation_handlers = MotivationHandlers::new(Arc::new(DailyMessageHandler::new(
        message_store,
        generator,
    )));

    // A real identity-provider adapter would be wired here. Outside of
    // production a mock validator with a development token is enough to
    // exercise the API end to end.
    let validator: Arc<dyn SessionValidator> = if config.is_production() {
        Arc::new(MockSessionValidator::new())
    } else {
        tracing::warn!("development mode: accepting the 'dev-token' bearer token");
        Arc::new(MockSessionValidator::new().with_test_user("dev-token", "dev-user"))
    };

    let cors = {
        let origins: Vec<HeaderValue> = config
            .server
            .cors_origins_list()
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        if origins.is_empty() {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    let app = api_router(application_handlers, motivation_handlers, validator)
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "starting JobHop server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
