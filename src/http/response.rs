//! Response envelopes and the mapping from domain errors to HTTP statuses.
//!
//! Success bodies look like `{"data": ..., "error": false}`, optionally with
//! a `msg`. Failures look like `{"msg": "...", "error": true}`.

use axum::extract::rejection::{FormRejection, JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{debug, error};

use crate::integrity::CascadeError;
use crate::product_actor::ProductError;
use crate::supplier_actor::SupplierError;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    pub error: bool,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data,
            msg: None,
            error: false,
        }
    }

    pub fn with_msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = Some(msg.into());
        self
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    msg: String,
    error: bool,
}

/// A failed request, rendered as an error envelope.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    msg: String,
}

impl ApiError {
    pub fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            msg: msg.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, msg = %self.msg, "Request failed");
        } else {
            debug!(status = %self.status, msg = %self.msg, "Request rejected");
        }
        let body = ErrorBody {
            msg: self.msg,
            error: true,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<SupplierError> for ApiError {
    fn from(e: SupplierError) -> Self {
        let status = match &e {
            SupplierError::InvalidIdentifier(_) | SupplierError::InvalidField(_) => {
                StatusCode::BAD_REQUEST
            }
            SupplierError::NotFound(_) => StatusCode::NOT_FOUND,
            SupplierError::StoreFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, e.to_string())
    }
}

impl From<ProductError> for ApiError {
    fn from(e: ProductError) -> Self {
        let status = match &e {
            ProductError::InvalidIdentifier(_)
            | ProductError::InvalidField(_)
            | ProductError::InvalidReference(_) => StatusCode::BAD_REQUEST,
            ProductError::NotFound(_) => StatusCode::NOT_FOUND,
            ProductError::StoreFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, e.to_string())
    }
}

impl From<CascadeError> for ApiError {
    fn from(e: CascadeError) -> Self {
        match e {
            CascadeError::Supplier(inner) => inner.into(),
            failed @ CascadeError::CascadeFailed { .. } => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, failed.to_string())
            }
        }
    }
}

/// Unparseable or mistyped request bodies are client errors.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}
