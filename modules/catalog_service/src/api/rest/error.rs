//! HTTP error mapping to RFC-9457 Problem Details
//!
//! Absence maps to a bare 404; every other failure, including unexpected
//! data-access faults, collapses to a 400 Problem with no internal detail.

use crate::contract::CatalogError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::BAD_REQUEST);
        (status, Json(self)).into_response()
    }
}

/// JSON body extractor whose rejection is a 400 Problem
///
/// Keeps malformed and missing bodies on the same failure surface as every
/// other client error instead of axum's default 415/422 split.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(Problem::new(StatusCode::BAD_REQUEST, "Malformed Body")
                .with_detail(rejection.body_text())),
        }
    }
}

/// Map domain errors to HTTP responses
///
/// `NotFound` becomes an empty-bodied 404; everything else is a 400 Problem.
/// There is no 500 on this surface: unexpected faults were already logged
/// where they happened and surface as a generic 400.
pub fn error_response(error: CatalogError) -> Response {
    match error {
        CatalogError::NotFound { .. } => StatusCode::NOT_FOUND.into_response(),

        CatalogError::Validation { message } => {
            Problem::new(StatusCode::BAD_REQUEST, "Validation Error")
                .with_detail(message)
                .into_response()
        }

        CatalogError::OperationFailed { resource, id } => {
            Problem::new(StatusCode::BAD_REQUEST, "Operation Failed")
                .with_detail(format!("{} operation failed for id {}", resource, id))
                .into_response()
        }

        CatalogError::Internal => Problem::new(StatusCode::BAD_REQUEST, "Request Failed")
            .with_detail("The request could not be processed")
            .into_response(),
    }
}
