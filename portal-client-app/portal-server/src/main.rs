use axum::http::{header, HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use portal_api::AppState;
use portal_core::repositories::{AccountRepository, MenuDisplaySettingsRepository};
use portal_core::services::{MenuDisplayService, NavigationService, SessionService};
use portal_core::{MenuCatalog, RouteTable};
use portal_infrastructure::{
    create_pool, create_redis_pool, run_migrations, InMemoryAccountRepository,
    InMemoryMenuDisplaySettingsRepository, MirroredSettingsRepository, PgAccountRepository,
    PgMenuDisplaySettingsRepository, RedisMirror,
};
use portal_security::TokenService;
use portal_shared::config::{AppConfig, StorageBackend};
use portal_shared::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize telemetry; the guard flushes the file writer on exit
    let _log_guard = init_telemetry(&config.log)?;

    info!("{} starting ({})...", config.app.name, config.app.env);

    let (accounts, settings_store) = build_repositories(&config).await?;
    let settings_store = mirror_settings(&config, settings_store);

    // Domain services
    let catalog = Arc::new(MenuCatalog::builtin()?);
    let routes = Arc::new(RouteTable::builtin());
    let tokens = Arc::new(TokenService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.leeway,
    ));

    let display = Arc::new(MenuDisplayService::new(settings_store, Arc::clone(&catalog)));
    if let Err(e) = display.current().await {
        warn!("Menu display settings not loaded yet: {}", e);
    }
    let navigation = Arc::new(NavigationService::new(catalog, routes, display));
    let sessions = Arc::new(SessionService::new(accounts, tokens));

    let app = portal_api::router(AppState::new(sessions, navigation)).layer(cors(&config)?);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_repositories(
    config: &AppConfig,
) -> anyhow::Result<(
    Arc<dyn AccountRepository>,
    Arc<dyn MenuDisplaySettingsRepository>,
)> {
    match config.storage.backend {
        StorageBackend::Postgres => {
            info!("Connecting to database...");
            let pool = create_pool(
                &config.database.url,
                config.database.max_connections,
                config.database.min_connections,
            )
            .await
            .map_err(|e| {
                error!("Failed to connect to database: {}", e);
                e
            })?;
            info!("Database connection established.");

            if config.database.run_migrations {
                run_migrations(&pool).await?;
            }

            Ok((
                Arc::new(PgAccountRepository::new(pool.clone())),
                Arc::new(PgMenuDisplaySettingsRepository::new(pool)),
            ))
        }
        StorageBackend::Memory => {
            if config.is_production() {
                warn!("In-memory storage selected in production; data is lost on restart");
            }
            Ok((
                Arc::new(InMemoryAccountRepository::new()),
                Arc::new(InMemoryMenuDisplaySettingsRepository::new()),
            ))
        }
    }
}

fn mirror_settings(
    config: &AppConfig,
    store: Arc<dyn MenuDisplaySettingsRepository>,
) -> Arc<dyn MenuDisplaySettingsRepository> {
    let Some(url) = config.redis.url.as_deref() else {
        return store;
    };

    match create_redis_pool(url) {
        Ok(pool) => {
            info!("Mirroring menu display settings to Redis");
            Arc::new(MirroredSettingsRepository::new(store, RedisMirror::new(pool)))
        }
        Err(e) => {
            warn!("Redis mirror disabled: {}", e);
            store
        }
    }
}

fn cors(config: &AppConfig) -> anyhow::Result<CorsLayer> {
    let origin: HeaderValue = config.app.cors_origin.parse()?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}
