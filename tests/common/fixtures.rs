use slowc::geometry::{EARTH_RADIUS_FT, KNOTS_TO_FPS};
use slowc::{FlightTrajectory, TrajectoryColumns};

/// Feet per nautical mile.
pub const NMI_FT: f64 = 6076.12;

pub fn timestamps(count: usize, step_s: f64) -> Vec<f64> {
    (0..count).map(|i| i as f64 * step_s).collect()
}

/// Straight, level, constant-speed flight starting at (`lon_deg`, `lat_deg`).
pub fn straight_flight(
    timestamps: &[f64],
    lon_deg: f64,
    lat_deg: f64,
    altitude_ft: f64,
    bearing_deg: f64,
    speed_kt: f64,
) -> FlightTrajectory {
    let n = timestamps.len();
    let speed_fps = speed_kt * KNOTS_TO_FPS;
    let bearing = bearing_deg.to_radians();
    let (east_fps, north_fps) = (speed_fps * bearing.sin(), speed_fps * bearing.cos());

    let longitude = timestamps
        .iter()
        .map(|t| {
            lon_deg
                + (east_fps * t / (EARTH_RADIUS_FT * lat_deg.to_radians().cos())).to_degrees()
        })
        .collect();
    let latitude = timestamps
        .iter()
        .map(|t| lat_deg + (north_fps * t / EARTH_RADIUS_FT).to_degrees())
        .collect();

    FlightTrajectory::new(TrajectoryColumns {
        timestamp: timestamps.to_vec(),
        longitude,
        latitude,
        altitude: vec![altitude_ft; n],
        bearing: vec![bearing_deg; n],
        ground_speed: vec![speed_kt; n],
    })
    .unwrap()
}

/// Longitude offset in degrees spanning `feet` along the equator.
pub fn equator_lon_offset(feet: f64) -> f64 {
    (feet / EARTH_RADIUS_FT).to_degrees()
}
