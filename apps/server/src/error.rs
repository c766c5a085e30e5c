//! Error types for the card search service

use crate::db::search::BuildError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Failed to decode stored record: {0}")]
    Decode(#[from] serde_json::Error),

    /// One message per invalid request value.
    #[error("Invalid request: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("No card with id '{0}'")]
    CardNotFound(String),

    #[error("No set with id '{0}'")]
    SetNotFound(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::CardNotFound(_) | Error::SetNotFound(_) | Error::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Error::Database(_)
            | Error::Migration(_)
            | Error::Decode(_)
            | Error::Build(_)
            | Error::Config(_)
            | Error::Internal(_)
            | Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Messages exposed to API clients.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Error::Validation(errors) => errors.clone(),
            Error::CardNotFound(_) | Error::SetNotFound(_) | Error::NotFound(_) => {
                vec![self.to_string()]
            }
            _ => vec!["Internal server error".to_string()],
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Internal error: {}", self);
        }

        let body = Json(json!({ "errors": self.messages() }));
        (status, body).into_response()
    }
}
