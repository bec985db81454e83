use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::severity::{PeakSeverity, SeveritySample, SlowcCalculator};
use crate::thresholds::WellClearThresholds;
use crate::trajectory::{FlightTrajectory, TrajectoryColumns};
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SlowcRequest {
    /// Ownship trajectory columns
    #[serde(default)]
    #[schema(value_type = TrajectoryColumns)]
    pub trajectory1: serde_json::Value,
    /// Intruder trajectory columns, sampled at the same timestamps
    #[serde(default)]
    #[schema(value_type = TrajectoryColumns)]
    pub trajectory2: serde_json::Value,
    /// Include per-sample geometry and penetration ratios
    #[serde(default)]
    pub detail: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SlowcResponse {
    pub slowc: Vec<f64>,
    pub peak: Option<PeakSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<SeveritySample>>,
}

#[utoipa::path(
    post,
    path = "/api/slowc",
    request_body = SlowcRequest,
    responses(
        (status = 200, description = "SLoWC series", body = SlowcResponse),
        (status = 422, description = "Malformed or misaligned trajectories", body = ErrorResponse),
        (status = 500, description = "Configured thresholds are invalid", body = ErrorResponse)
    ),
    tag = "slowc"
)]
pub async fn compute(
    State(state): State<AppState>,
    Json(request): Json<SlowcRequest>,
) -> ApiResult<Json<SlowcResponse>> {
    let trajectory1 = FlightTrajectory::from_value(request.trajectory1)?;
    let trajectory2 = FlightTrajectory::from_value(request.trajectory2)?;

    let calculator =
        SlowcCalculator::with_thresholds(&trajectory1, &trajectory2, state.config.thresholds)?;
    let report = calculator.report();

    Ok(Json(SlowcResponse {
        slowc: report.severities(),
        peak: report.peak,
        samples: request.detail.then_some(report.samples),
    }))
}

#[utoipa::path(
    get,
    path = "/api/thresholds",
    responses(
        (status = 200, description = "Active well-clear thresholds", body = WellClearThresholds)
    ),
    tag = "slowc"
)]
pub async fn thresholds(State(state): State<AppState>) -> Json<WellClearThresholds> {
    Json(state.config.thresholds)
}
