use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::severity::SlowcError;
use crate::thresholds::ThresholdError;
use crate::trajectory::TrajectoryError;

#[derive(Debug)]
pub enum ApiError {
    Trajectory(TrajectoryError),
    Thresholds(ThresholdError),
}

impl From<TrajectoryError> for ApiError {
    fn from(e: TrajectoryError) -> Self {
        ApiError::Trajectory(e)
    }
}

impl From<SlowcError> for ApiError {
    fn from(e: SlowcError) -> Self {
        match e {
            SlowcError::Trajectory(e) => ApiError::Trajectory(e),
            SlowcError::Thresholds(e) => ApiError::Thresholds(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Trajectory(e) => {
                let error = match &e {
                    TrajectoryError::TypeViolation(_) => "type_violation",
                    TrajectoryError::AlignmentMismatch(_) => "alignment_mismatch",
                };
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorResponse::with_message(error, &e.to_string())),
                )
                    .into_response()
            }
            // Server-side configuration, not the request.
            ApiError::Thresholds(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_message("invalid_thresholds", &e.to_string())),
            )
                .into_response(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn with_message(error: &str, message: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: Some(message.to_string()),
        }
    }
}
