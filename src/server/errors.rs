//! Errors surfaced to HTTP clients.
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use derive_more::Display;
use serde_json::json;

use crate::site::content::UNAUTHORIZED_MESSAGE;

/// Errors answered as JSON by the `/admin/api` endpoints
#[derive(Debug, Display)]
pub enum HttpError {
    /// No signed-in user on a request that needs one
    #[display(fmt = "{}", UNAUTHORIZED_MESSAGE)]
    Unauthorized,
    /// An upstream service failed, with its message
    #[display(fmt = "{}", _0)]
    BadGateway(String),
}

impl std::error::Error for HttpError {}

impl ResponseError for HttpError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
