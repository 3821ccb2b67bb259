use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};
use anyhow::anyhow;

use crate::protocol::MessageResponse;

/// Failure of a single request. Every variant is rendered as a JSON
/// `{"message": ...}` body.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Auth(String),
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ServiceError {
    pub fn validation<S: ToString>(msg: S) -> Self {
        Self::Validation(msg.to_string())
    }

    pub fn conflict<S: ToString>(msg: S) -> Self {
        Self::Conflict(msg.to_string())
    }

    pub fn auth<S: ToString>(msg: S) -> Self {
        Self::Auth(msg.to_string())
    }

    /// `msg` is what the client sees; `source` is only logged.
    pub fn internal<S: ToString, E: Into<anyhow::Error>>(msg: S, source: E) -> Self {
        Self::Internal {
            message: msg.to_string(),
            source: source.into(),
        }
    }
}

impl From<anyhow::Error> for ServiceError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal("Internal server error", err)
    }
}

impl From<BlockingError<ServiceError>> for ServiceError {
    fn from(err: BlockingError<ServiceError>) -> Self {
        match err {
            BlockingError::Error(err) => err,
            BlockingError::Canceled => anyhow!("blocking task canceled").into(),
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Self::Internal { message, source } = self {
            tracing::error!("{}: {:#}", message, source);
        }
        HttpResponse::build(self.status_code()).json(MessageResponse::new(self.to_string()))
    }
}
