mod config;
mod db;
mod entities;
mod error;
mod flash;
mod models;
mod routes;
mod store;
mod templates;
mod tmdb;

use std::{sync::Arc, time::Duration};

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::{config::Config, store::MovieStore, tmdb::TmdbClient};

#[derive(Clone)]
pub struct AppState {
    pub store: MovieStore,
    pub tmdb: Arc<TmdbClient>,
    pub cookie_key: Key,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,topreel=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;
    tracing::debug!(?config, "loaded config");

    let http = reqwest::Client::builder()
        .user_agent("topreel/0.1")
        .timeout(Duration::from_secs(30))
        .build()?;

    let db = db::connect_and_migrate(config.database_url.as_str()).await?;

    let tmdb = TmdbClient::new(
        http,
        config.tmdb_api_key.clone(),
        config.tmdb_base_url.clone(),
        config.tmdb_image_base_url.clone(),
    );

    let state = AppState {
        store: MovieStore::new(db),
        tmdb: Arc::new(tmdb),
        cookie_key: Key::derive_from(config.secret_key.as_bytes()),
    };

    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
