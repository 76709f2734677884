use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("auction {0} not found")]
    NotFound(Uuid),

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("repository error: {0}")]
    Repository(String),
}

impl ApplicationError {
    pub fn repository(error: anyhow::Error) -> Self {
        Self::Repository(error.to_string())
    }
}

#[derive(Debug, serde::Serialize)]
struct ErrorBody {
    error: String,
}

impl axum::response::IntoResponse for ApplicationError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Domain(_) => StatusCode::BAD_REQUEST,
            Self::Repository(ref message) => {
                tracing::error!(error = %message, "auction repository failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, axum::Json(body)).into_response()
    }
}
