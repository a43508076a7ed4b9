use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    error::AppResult,
    models::{MovieDetail, SearchResult},
};

pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    image_base_url: String,
}

impl TmdbClient {
    pub fn new(
        client: reqwest::Client,
        api_key: String,
        base_url: String,
        image_base_url: String,
    ) -> Self {
        Self { client, api_key, base_url, image_base_url }
    }

    pub async fn search_by_title(&self, query: &str) -> AppResult<Vec<SearchResult>> {
        let url = format!("{}/search/movie", self.base_url.trim_end_matches('/'));
        let resp: SearchResponse =
            self.get_json(url, &[("api_key", self.api_key.as_str()), ("query", query)]).await?;
        tracing::debug!(query = %query, results = resp.results.len(), "searched TMDB");
        Ok(resp.results)
    }

    pub async fn fetch_detail_by_id(&self, tmdb_id: i32) -> AppResult<MovieDetail> {
        let url = format!("{}/movie/{}", self.base_url.trim_end_matches('/'), tmdb_id);
        let detail: MovieDetail = self.get_json(url, &[("api_key", self.api_key.as_str())]).await?;
        tracing::debug!(tmdb_id = tmdb_id, title = %detail.original_title, "fetched TMDB detail");
        Ok(detail)
    }

    /// Full poster URL for a detail, or `None` when TMDB has no poster.
    pub fn poster_url(&self, detail: &MovieDetail) -> Option<String> {
        let path = detail.poster_path.as_deref()?.trim_start_matches('/');
        if path.is_empty() {
            return None;
        }
        Some(format!("{}/{}", self.image_base_url.trim_end_matches('/'), path))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        let body =
            self.client.get(url).query(query).send().await?.error_for_status()?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

#[cfg(test)]
pub(crate) mod tests {
    use std::net::SocketAddr;

    use axum::{
        Json, Router,
        extract::{Path, Query},
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::get,
    };
    use serde_json::json;

    use super::*;
    use crate::error::AppError;

    pub const API_KEY: &str = "test-key";

    #[derive(Debug, Deserialize)]
    struct Params {
        api_key: String,
        #[serde(default)]
        query: String,
    }

    async fn search(Query(p): Query<Params>) -> Response {
        if p.api_key != API_KEY {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        let results = match p.query.as_str() {
            "Inception" => json!([
                {"id": 27205, "title": "Inception", "original_title": "Inception", "release_date": "2010-07-16"},
                {"id": 64956, "title": "Inception: The Cobol Job", "original_title": "Inception: The Cobol Job", "release_date": "2010-12-07"}
            ]),
            "broken" => return (StatusCode::OK, "{\"results\": [{\"title\": 1}]}").into_response(),
            "boom" => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            _ => json!([]),
        };
        Json(json!({ "page": 1, "results": results })).into_response()
    }

    async fn detail(Path(id): Path<i32>, Query(p): Query<Params>) -> Response {
        if p.api_key != API_KEY {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        match id {
            27205 => Json(json!({
                "id": 27205,
                "original_title": "Inception",
                "overview": "Cobb steals secrets from deep within the subconscious.",
                "poster_path": "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
                "release_date": "2010-07-15"
            }))
            .into_response(),
            1 => Json(json!({
                "id": 1,
                "original_title": "Posterless",
                "overview": "",
                "poster_path": null,
                "release_date": "1999-01-01"
            }))
            .into_response(),
            2 => Json(json!({
                "id": 2,
                "original_title": "Untitled Sequel",
                "overview": "Announced.",
                "poster_path": null,
                "release_date": ""
            }))
            .into_response(),
            _ => (StatusCode::NOT_FOUND, Json(json!({"status_code": 34}))).into_response(),
        }
    }

    /// Serves a canned subset of the TMDB API on an ephemeral port.
    pub async fn spawn_fake_tmdb() -> SocketAddr {
        let app = Router::new()
            .route("/search/movie", get(search))
            .route("/movie/{id}", get(detail));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move { axum::serve(listener, app).await.expect("serve fake tmdb") });
        addr
    }

    pub fn client_for(addr: SocketAddr) -> TmdbClient {
        TmdbClient::new(
            reqwest::Client::new(),
            API_KEY.to_string(),
            format!("http://{addr}/"),
            "https://image.tmdb.org/t/p/w500/".to_string(),
        )
    }

    #[tokio::test]
    async fn search_returns_candidates() {
        let tmdb = client_for(spawn_fake_tmdb().await);
        let results = tmdb.search_by_title("Inception").await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, 27205);
        assert_eq!(results[0].release_date, "2010-07-16");
        assert!(tmdb.search_by_title("nothing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn detail_builds_poster_url() {
        let tmdb = client_for(spawn_fake_tmdb().await);
        let detail = tmdb.fetch_detail_by_id(27205).await.unwrap();
        assert_eq!(detail.original_title, "Inception");
        assert_eq!(
            tmdb.poster_url(&detail).as_deref(),
            Some("https://image.tmdb.org/t/p/w500/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg")
        );
    }

    #[tokio::test]
    async fn missing_poster_is_absent() {
        let tmdb = client_for(spawn_fake_tmdb().await);
        let detail = tmdb.fetch_detail_by_id(1).await.unwrap();
        assert_eq!(detail.poster_path, None);
        assert_eq!(tmdb.poster_url(&detail), None);
    }

    #[tokio::test]
    async fn error_status_is_upstream_error() {
        let tmdb = client_for(spawn_fake_tmdb().await);
        let err = tmdb.fetch_detail_by_id(999).await.unwrap_err();
        assert!(matches!(err, AppError::Upstream(ref msg) if msg.contains("404")), "{err:?}");
        let err = tmdb.search_by_title("boom").await.unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)), "{err:?}");
    }

    #[tokio::test]
    async fn wrong_api_key_is_upstream_error() {
        let addr = spawn_fake_tmdb().await;
        let tmdb = TmdbClient::new(
            reqwest::Client::new(),
            "wrong".to_string(),
            format!("http://{addr}"),
            String::new(),
        );
        let err = tmdb.search_by_title("Inception").await.unwrap_err();
        assert!(matches!(err, AppError::Upstream(ref msg) if msg.contains("401")), "{err:?}");
    }

    #[tokio::test]
    async fn malformed_body_is_upstream_error() {
        let tmdb = client_for(spawn_fake_tmdb().await);
        let err = tmdb.search_by_title("broken").await.unwrap_err();
        assert!(matches!(err, AppError::Upstream(ref msg) if msg.contains("malformed")), "{err:?}");
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let tmdb = client_for(addr);
        let err = tmdb.search_by_title("Inception").await.unwrap_err();
        assert!(matches!(err, AppError::Network(_)), "{err:?}");
    }
}
