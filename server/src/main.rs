#![recursion_limit = "256"]

mod db;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let max_connections =
        db::parse_max_connections(std::env::var("DB_MAX_CONNECTIONS").ok().as_deref());
    let pool = db::init_pool(&database_url, max_connections)
        .await
        .expect("database init failed");

    let geo = services::geo::GeoClient::from_env();
    let state = state::AppState::new(pool, geo);

    let app = routes::leptos_app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "coleta listening");
    axum::serve(listener, app).await.expect("server failed");
}
