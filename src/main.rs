//! Lucid assessment server.
//!
//! Configuration comes from `LUCID__*` environment variables (see
//! [`lucid::config::AppConfig`]). Without a database URL, history is kept in
//! memory for the lifetime of the process.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use lucid::adapters::auth::{JwtSessionValidator, MockSessionValidator};
use lucid::adapters::http::{api_router, AssessmentAppState, RouterSettings};
use lucid::adapters::memory::{InMemoryAssessmentHistory, InMemoryMembershipReader};
use lucid::adapters::postgres::PostgresAssessmentHistoryRepository;
use lucid::config::{AppConfig, AuthMode, DatabaseConfig, ServerConfig};
use lucid::domain::assessment::AssessmentEngine;
use lucid::ports::{AssessmentHistoryRepository, SessionValidator};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let bank = config.assessment.load_question_bank()?;
    let unreferenced = bank.unreferenced_dimensions();
    if !unreferenced.is_empty() {
        tracing::warn!(
            dimensions = ?unreferenced,
            "Question bank never weights some dimensions; they will always score neutral"
        );
    }
    let engine = AssessmentEngine::new(bank, config.assessment.scoring_config())?;
    tracing::info!(
        questions = engine.bank().len(),
        scoring_version = %engine.config().version(),
        "Assessment engine ready"
    );

    let history: Arc<dyn AssessmentHistoryRepository> = match &config.database {
        Some(database) => Arc::new(connect_history(database).await?),
        None => {
            tracing::warn!("No database configured; assessment history is in-memory only");
            Arc::new(InMemoryAssessmentHistory::new())
        }
    };
    let membership = Arc::new(InMemoryMembershipReader::new(
        config.assessment.default_tier,
    ));

    let validator: Arc<dyn SessionValidator> = match config.auth.mode {
        AuthMode::Jwt => Arc::new(JwtSessionValidator::new(config.auth.jwt_config())),
        AuthMode::Mock => {
            tracing::warn!(user_id = %config.auth.dev_user_id, "Mock authentication enabled");
            Arc::new(
                MockSessionValidator::new()
                    .with_token(&config.auth.dev_token, &config.auth.dev_user_id),
            )
        }
    };

    let state = AssessmentAppState::new(engine, history, membership)
        .with_history_page_size(config.assessment.history_page_size);
    let settings = RouterSettings {
        request_timeout: config.server.request_timeout(),
        cors_origins: config.server.cors_origins_list(),
        companion_context: config.features.companion_context,
        trace_requests: config.features.enable_tracing,
    };
    let app = api_router(state, validator, &settings);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = %config.server.environment, "Lucid listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.use_json_logs() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn connect_history(
    database: &DatabaseConfig,
) -> Result<PostgresAssessmentHistoryRepository, BoxError> {
    let pool = database.pool_options().connect(&database.url).await?;
    tracing::info!(url = %database.redacted_url(), "Connected to assessment history database");

    if database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    Ok(PostgresAssessmentHistoryRepository::new(pool))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
