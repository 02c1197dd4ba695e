use grimoire_api::{app, config, database::DatabaseManager};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, PORT, etc.
    let _ = dotenvy::dotenv();

    // Fail fast on missing DATABASE_URL / PORT before anything else starts.
    let config = config::config();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "grimoire_api=debug,tower_http=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!("Starting grimoire API in {:?} mode", config.environment);

    let pool = DatabaseManager::pool()
        .await
        .expect("failed to connect to database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run database migrations");

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("API server running on port {}", config.port);

    axum::serve(listener, app()).await.expect("server");
}
