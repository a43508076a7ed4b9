use std::{fmt, net::SocketAddr};

use anyhow::Context;

pub const MIN_SECRET_KEY_LEN: usize = 32;

#[derive(Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    pub secret_key: String,
    pub tmdb_api_key: String,
    pub tmdb_base_url: String,
    pub tmdb_image_base_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().context("PORT")?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://topreel.db?mode=rwc".to_string());

        let secret_key = std::env::var("SECRET_KEY").context("SECRET_KEY must be set")?;
        if secret_key.len() < MIN_SECRET_KEY_LEN {
            anyhow::bail!("SECRET_KEY must be at least {MIN_SECRET_KEY_LEN} bytes");
        }

        let tmdb_api_key = std::env::var("TMDB_API_KEY").context("TMDB_API_KEY must be set")?;
        if tmdb_api_key.trim().is_empty() {
            anyhow::bail!("TMDB_API_KEY must not be empty");
        }

        let tmdb_base_url = std::env::var("TMDB_BASE_URL")
            .unwrap_or_else(|_| "https://api.themoviedb.org/3".to_string());
        let tmdb_image_base_url = std::env::var("TMDB_IMAGE_BASE_URL")
            .unwrap_or_else(|_| "https://image.tmdb.org/t/p/w500".to_string());

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            database_url,
            secret_key,
            tmdb_api_key,
            tmdb_base_url,
            tmdb_image_base_url,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("addr", &self.addr)
            .field("database_url", &self.database_url)
            .field("secret_key", &"<redacted>")
            .field("tmdb_api_key", &"<redacted>")
            .field("tmdb_base_url", &self.tmdb_base_url)
            .field("tmdb_image_base_url", &self.tmdb_image_base_url)
            .finish()
    }
}
