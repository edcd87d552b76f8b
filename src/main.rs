use axum_taskman::{app, config::Config, db, services::AppState};

#[tokio::main]
async fn main() {
    // Initialize basic tracing subscriber
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load().expect("Failed to load configuration");

    // Connect to the relational store and make sure the schema exists
    let db = db::connect(&config.database.url)
        .await
        .expect("Failed to connect to database");
    db::setup_schema(&db)
        .await
        .expect("Failed to set up database schema");

    let state = AppState::new(db);
    state
        .users
        .seed_default_admin()
        .await
        .expect("Failed to seed default admin user");
    let app = app(state);

    let listener = tokio::net::TcpListener::bind(format!(
        "{}:{}",
        config.server.host, config.server.port
    ))
    .await
    .expect("Failed to bind server");

    tracing::info!("Server running on {}:{}", config.server.host, config.server.port);
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Failed to start server");
}
