use std::error::Error;

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::provider::ProviderError;

#[derive(Debug, Error)]
pub enum RestError {
    #[error("Request body is not a valid article")]
    MalformedArticle(#[from] serde_json::Error),

    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl RestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::MalformedArticle(_) => StatusCode::BAD_REQUEST,
            RestError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        error!("{}: {:?}", self, self.source());

        let payload = Json(json!({"message": self.to_string()}));

        (self.status(), payload).into_response()
    }
}
