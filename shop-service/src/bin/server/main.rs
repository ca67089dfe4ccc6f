use std::sync::Arc;

use chrono::Duration;
use shop_service::config::Config;
use shop_service::domain::cart::service::CartService;
use shop_service::domain::user::service::AuthService;
use shop_service::inbound::http::router::create_router;
use shop_service::outbound::repositories::PostgresCartRepository;
use shop_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shop_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "shop-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_minutes = config.jwt.expire_minutes,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let cart_repository = Arc::new(PostgresCartRepository::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        config.jwt.secret.as_bytes(),
        Duration::minutes(config.jwt.expire_minutes),
    ));
    let cart_service = Arc::new(CartService::new(cart_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, cart_service);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
