use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform response envelope returned by every catalog operation.
///
/// The HTTP status of the response always equals `status`, so clients can rely on
/// either one.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>) -> Self {
        Self::with_status(StatusCode::OK, data, message)
    }

    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::CREATED, Some(data), Some(message.into()))
    }

    fn with_status(status: StatusCode, data: Option<T>, message: Option<String>) -> Self {
        Self {
            ok: true,
            data,
            message,
            status: status.as_u16(),
            errors: None,
        }
    }

    pub fn error(
        status: StatusCode,
        message: String,
        errors: Option<Vec<String>>,
    ) -> ApiResponse<()> {
        ApiResponse {
            ok: false,
            data: None,
            message: Some(message),
            status: status.as_u16(),
            errors,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
