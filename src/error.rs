use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("no movie with id {0}")]
    NotFound(i32),
    #[error("{0}")]
    BadRequest(String),
    #[error("could not reach the movie database: {0}")]
    Network(#[source] reqwest::Error),
    #[error("the movie database returned an error: {0}")]
    Upstream(String),
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Network(_) | AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::Upstream(format!("status {status}"))
        } else if err.is_decode() {
            Self::Upstream(format!("malformed response: {err}"))
        } else {
            Self::Network(err)
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Upstream(format!("malformed response: {err}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        let body = crate::templates::error_page(status, &self.to_string());
        (status, Html(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(AppError::NotFound(3).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::Upstream("status 500".into()).status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            AppError::Database(sea_orm::DbErr::Custom("disk".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn json_errors_are_upstream_errors() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(AppError::from(err), AppError::Upstream(_)));
    }
}
