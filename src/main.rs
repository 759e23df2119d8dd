//! Server entry point: configuration, infrastructure wiring, and the
//! axum router.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use reelmatch::adapters::catalog::{HttpMetadataSource, HttpMetadataSourceConfig};
use reelmatch::adapters::events::RedisEventPublisher;
use reelmatch::adapters::http::{catalog_routes, room_routes, CatalogHandlers, RoomHandlers};
use reelmatch::adapters::postgres::{
    PostgresCatalogCache, PostgresMembershipRepository, PostgresRoomRepository,
    PostgresVoteTallyRepository,
};
use reelmatch::application::handlers::catalog::ResolveCandidatesHandler;
use reelmatch::application::handlers::membership::{JoinRoomHandler, LeaveRoomHandler};
use reelmatch::application::handlers::room::{CreateRoomHandler, GetRoomHandler};
use reelmatch::application::handlers::voting::CastVoteHandler;
use reelmatch::config::AppConfig;
use reelmatch::ports::{
    CatalogCache, EventPublisher, MembershipRepository, MetadataSource, RoomRepository,
    VoteTallyRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    info!(environment = ?config.server.environment, "starting reelmatch");

    // Database
    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    // Redis (event fan-out)
    let redis_client = redis::Client::open(config.redis.url.as_str())?;
    let redis_conn = redis_client.get_multiplexed_tokio_connection().await?;

    // Adapters
    let rooms: Arc<dyn RoomRepository> = Arc::new(PostgresRoomRepository::new(pool.clone()));
    let memberships: Arc<dyn MembershipRepository> =
        Arc::new(PostgresMembershipRepository::new(pool.clone()));
    let tallies: Arc<dyn VoteTallyRepository> =
        Arc::new(PostgresVoteTallyRepository::new(pool.clone()));
    let catalog_cache: Arc<dyn CatalogCache> = Arc::new(PostgresCatalogCache::new(pool.clone()));
    let event_publisher: Arc<dyn EventPublisher> =
        Arc::new(RedisEventPublisher::new(redis_conn));

    let mut source_config = HttpMetadataSourceConfig::new(config.catalog.base_url.clone())
        .with_timeout(config.catalog.fetch_timeout());
    if let Some(api_key) = &config.catalog.api_key {
        source_config = source_config.with_api_key(api_key.clone());
    }
    let metadata_source: Arc<dyn MetadataSource> = Arc::new(HttpMetadataSource::new(source_config));

    // Application handlers
    let room_handlers = RoomHandlers::new(
        Arc::new(CreateRoomHandler::new(
            Arc::clone(&rooms),
            Arc::clone(&memberships),
            Arc::clone(&event_publisher),
        )),
        Arc::new(GetRoomHandler::new(
            Arc::clone(&rooms),
            Arc::clone(&memberships),
        )),
        Arc::new(JoinRoomHandler::new(
            Arc::clone(&rooms),
            Arc::clone(&memberships),
            Arc::clone(&event_publisher),
        )),
        Arc::new(LeaveRoomHandler::new(
            Arc::clone(&rooms),
            Arc::clone(&memberships),
            Arc::clone(&event_publisher),
        )),
        Arc::new(CastVoteHandler::new(
            Arc::clone(&rooms),
            Arc::clone(&memberships),
            Arc::clone(&tallies),
            Arc::clone(&event_publisher),
        )),
    );

    let catalog_handlers = CatalogHandlers::new(Arc::new(ResolveCandidatesHandler::new(
        catalog_cache,
        metadata_source,
        config.catalog.cache_ttl_days,
    )));

    // Router
    let cors = if config.is_production() {
        let origins: Vec<HeaderValue> = config
            .server
            .cors_origins_list()
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new().allow_origin(origins)
    } else {
        CorsLayer::new().allow_origin(Any)
    };

    let app = Router::new()
        .nest("/api/rooms", room_routes(room_handlers))
        .nest("/api/candidates", catalog_routes(catalog_handlers))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    let addr = config.server.socket_addr();
    info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
