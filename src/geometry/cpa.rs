use serde::Serialize;
use utoipa::ToSchema;

use super::projection::PlanarPosition;
use super::velocity::GroundVelocity;
use crate::thresholds::WellClearThresholds;

/// Below this horizontal range the closing rate is undefined and the hazard
/// radius falls back to DMOD.
pub const MIN_RANGE_FT: f64 = 1e-4;

/// One aircraft at one instant, in the encounter's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AircraftState {
    pub position: PlanarPosition,
    pub altitude_ft: f64,
    pub velocity: GroundVelocity,
}

/// Relative geometry of the intruder with respect to ownship at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct SampleGeometry {
    pub dx_ft: f64,
    pub dy_ft: f64,
    pub dh_ft: f64,
    pub vr_x_fps: f64,
    pub vr_y_fps: f64,
    pub range_ft: f64,
    /// NaN at zero range
    pub range_rate_fps: f64,
    pub hazard_radius_ft: f64,
    pub t_cpa_s: f64,
    pub hmd_ft: f64,
}

pub fn relative_geometry(
    own: &AircraftState,
    intruder: &AircraftState,
    thresholds: &WellClearThresholds,
) -> SampleGeometry {
    let dx = intruder.position.x_east_ft - own.position.x_east_ft;
    let dy = intruder.position.y_north_ft - own.position.y_north_ft;
    let dh = (intruder.altitude_ft - own.altitude_ft).abs();

    let vr_x = intruder.velocity.east_fps - own.velocity.east_fps;
    let vr_y = intruder.velocity.north_fps - own.velocity.north_fps;

    let range = (dx * dx + dy * dy).sqrt();
    let dot = dx * vr_x + dy * vr_y;
    let range_rate = dot / range;

    let hazard_radius = if range < MIN_RANGE_FT {
        log::trace!("range {} ft below {} ft, hazard radius set to DMOD", range, MIN_RANGE_FT);
        thresholds.dmod_ft
    } else {
        hazard_zone_radius(range_rate, thresholds)
    };

    let vr_sq = vr_x * vr_x + vr_y * vr_y;
    let t_cpa = if vr_sq == 0.0 || dot > 0.0 {
        0.0
    } else {
        -dot / vr_sq
    };

    let miss_x = dx + vr_x * t_cpa;
    let miss_y = dy + vr_y * t_cpa;
    let hmd = (miss_x * miss_x + miss_y * miss_y).sqrt();

    SampleGeometry {
        dx_ft: dx,
        dy_ft: dy,
        dh_ft: dh,
        vr_x_fps: vr_x,
        vr_y_fps: vr_y,
        range_ft: range,
        range_rate_fps: range_rate,
        hazard_radius_ft: hazard_radius,
        t_cpa_s: t_cpa,
        hmd_ft: hmd,
    }
}

/// S = max(DMOD, (sqrt((Rdot*tau)^2 + 4*DMOD^2) - Rdot*tau) / 2)
fn hazard_zone_radius(range_rate: f64, thresholds: &WellClearThresholds) -> f64 {
    let dmod = thresholds.dmod_ft;
    let rt = range_rate * thresholds.tau_mod_thr_s;
    let radius = 0.5 * ((rt * rt + 4.0 * dmod * dmod).sqrt() - rt);
    dmod.max(radius)
}
