use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use super::api::slowc::{SlowcRequest, SlowcResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::slowc::compute,
        super::api::slowc::thresholds,
    ),
    components(
        schemas(
            SlowcRequest,
            SlowcResponse,
            ErrorResponse,
            crate::trajectory::TrajectoryColumns,
            crate::thresholds::WellClearThresholds,
            crate::severity::SeveritySample,
            crate::severity::PeakSeverity,
            crate::severity::PenetrationRatios,
            crate::severity::BlendedPenetration,
            crate::geometry::SampleGeometry,
        )
    ),
    info(
        title = "SLoWC API",
        description = "Severity loss of well clear for pairwise aircraft encounters",
        version = "0.1.0"
    ),
    tags(
        (name = "slowc", description = "Encounter severity")
    )
)]
pub struct ApiDoc;
