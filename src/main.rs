//! Football tournament server entry point

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use football_tournament::{
    db::{
        self,
        repositories::{PgUserRepository, RedisChampionshipRepository},
    },
    handlers,
    storage::FsBlobStorage,
    AppState, Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting football tournament server...");

    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&config.database).await?;
    db::test_connection(&db_pool).await?;

    tracing::info!("Running database migrations...");
    db::run_migrations(&db_pool).await?;

    tracing::info!("Connecting to Redis...");
    let redis_conn = db::create_redis_manager(&config.redis).await?;

    let blobs = FsBlobStorage::new(config.storage.container_path());
    blobs.ensure_container().await?;
    tracing::info!(container = %blobs.container().display(), "Blob container ready");

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let state = AppState::new(
        &config,
        Arc::new(PgUserRepository::new(db_pool)),
        Arc::new(RedisChampionshipRepository::new(redis_conn)),
        Arc::new(blobs),
    );
    let app = handlers::app(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
