use product_api::{app, config::AppConfig, database, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    tracing::info!("Starting product API on {}", config.bind_addr());

    let pool = database::connect(&config.database_url)
        .await
        .unwrap_or_else(|e| panic!("failed to open database {}: {}", config.database_url, e));

    database::init_schema(&pool)
        .await
        .expect("failed to initialize products table");

    let bind_addr = config.bind_addr();
    let state = AppState::new(pool, config);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    axum::serve(listener, app(state)).await.expect("server");
}
