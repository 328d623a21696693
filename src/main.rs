mod config;
mod db;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::contact::PgMessageStore;

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) => tracing::debug!(error = %e, "no .env loaded"),
    }

    let config = config::Config::from_env().expect("invalid configuration");

    let pool = db::init_pool(&config.db).expect("invalid DATABASE_URL");
    let state = state::AppState::new(Arc::new(PgMessageStore::new(pool)));

    if !config.website_dir.is_dir() {
        tracing::warn!(dir = %config.website_dir.display(), "website directory missing; static pages will 404");
    }
    let app = routes::app(state, &config.website_dir);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, website = %config.website_dir.display(), "folio listening");
    axum::serve(listener, app).await.expect("server failed");
}
