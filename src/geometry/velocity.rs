use serde::Serialize;
use utoipa::ToSchema;

/// Knots to feet per second.
pub const KNOTS_TO_FPS: f64 = 1.68781;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, ToSchema)]
pub struct GroundVelocity {
    pub east_fps: f64,
    pub north_fps: f64,
}

/// Bearing is degrees clockwise from true north, speed is knots.
pub fn resolve_velocity(bearing_deg: f64, ground_speed_kt: f64) -> GroundVelocity {
    let speed_fps = ground_speed_kt * KNOTS_TO_FPS;
    let bearing_rad = bearing_deg * std::f64::consts::PI / 180.0;
    GroundVelocity {
        east_fps: speed_fps * bearing_rad.sin(),
        north_fps: speed_fps * bearing_rad.cos(),
    }
}

pub fn resolve(bearing_deg: &[f64], ground_speed_kt: &[f64]) -> Vec<GroundVelocity> {
    bearing_deg
        .iter()
        .zip(ground_speed_kt)
        .map(|(b, s)| resolve_velocity(*b, *s))
        .collect()
}
