use serde::Serialize;
use utoipa::ToSchema;

use crate::geometry::SampleGeometry;
use crate::thresholds::WellClearThresholds;

/// Normalized penetration along each well-clear dimension. 1 means at or
/// beyond the boundary, 0 means no separation along that dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct PenetrationRatios {
    pub range_pen: f64,
    pub hmd_pen: f64,
    pub dh_pen: f64,
}

pub fn penetration_ratios(
    geometry: &SampleGeometry,
    thresholds: &WellClearThresholds,
) -> PenetrationRatios {
    PenetrationRatios {
        range_pen: (geometry.range_ft / geometry.hazard_radius_ft).min(1.0),
        hmd_pen: (geometry.hmd_ft / thresholds.dmod_ft).min(1.0),
        dh_pen: (geometry.dh_ft / thresholds.dh_thr_ft).min(1.0),
    }
}
