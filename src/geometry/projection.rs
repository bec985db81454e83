use serde::Serialize;
use utoipa::ToSchema;

use crate::trajectory::FlightTrajectory;

/// Mean Earth radius (6 371 000 m) in feet.
pub const EARTH_RADIUS_FT: f64 = 6_371_000.0 / 0.3048;

/// Shared projection origin for a single encounter.
///
/// Longitudes are averaged arithmetically, so a pair straddling ±180° gets
/// an origin on the far side of the globe and projects far apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct EncounterContext {
    pub lon0_deg: f64,
    pub lat0_deg: f64,
}

impl EncounterContext {
    /// Mean longitude and latitude over both trajectories combined.
    pub fn from_trajectories(first: &FlightTrajectory, second: &FlightTrajectory) -> Self {
        let count = (first.len() + second.len()) as f64;
        let lon_sum = first.longitude().iter().sum::<f64>() + second.longitude().iter().sum::<f64>();
        let lat_sum = first.latitude().iter().sum::<f64>() + second.latitude().iter().sum::<f64>();
        Self {
            lon0_deg: lon_sum / count,
            lat0_deg: lat_sum / count,
        }
    }

    pub fn lat0_rad(&self) -> f64 {
        self.lat0_deg.to_radians()
    }
}

/// Local east/north displacement from the origin, in feet.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, ToSchema)]
pub struct PlanarPosition {
    pub x_east_ft: f64,
    pub y_north_ft: f64,
}

/// Flat-Earth small-angle projection of one geodetic point.
pub fn project_point(lon_deg: f64, lat_deg: f64, origin: &EncounterContext) -> PlanarPosition {
    let d_lon = (lon_deg - origin.lon0_deg).to_radians();
    let d_lat = (lat_deg - origin.lat0_deg).to_radians();
    PlanarPosition {
        x_east_ft: EARTH_RADIUS_FT * d_lon * origin.lat0_rad().cos(),
        y_north_ft: EARTH_RADIUS_FT * d_lat,
    }
}

pub fn project(lon_deg: &[f64], lat_deg: &[f64], origin: &EncounterContext) -> Vec<PlanarPosition> {
    lon_deg
        .iter()
        .zip(lat_deg)
        .map(|(lon, lat)| project_point(*lon, *lat, origin))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const FEET_PER_NMI: f64 = 6076.12;

    fn origin(lon0_deg: f64, lat0_deg: f64) -> EncounterContext {
        EncounterContext { lon0_deg, lat0_deg }
    }

    #[test]
    fn origin_projects_to_zero() {
        let o = origin(-77.04, 38.85);
        let p = project_point(-77.04, 38.85, &o);
        assert_eq!(p, PlanarPosition::default());
    }

    #[test]
    fn one_arcminute_of_latitude_is_about_one_nautical_mile() {
        let o = origin(0.0, 0.0);
        let p = project_point(0.0, 1.0 / 60.0, &o);
        assert_relative_eq!(p.y_north_ft, FEET_PER_NMI, max_relative = 1e-3);
        assert_eq!(p.x_east_ft, 0.0);
    }

    #[test]
    fn longitude_shrinks_with_origin_latitude() {
        let equator = project_point(1.0, 0.0, &origin(0.0, 0.0));
        let sixty = project_point(1.0, 60.0, &origin(0.0, 60.0));
        assert_relative_eq!(sixty.x_east_ft, equator.x_east_ft * 0.5, max_relative = 1e-12);
    }

    #[test]
    fn west_and_south_are_negative() {
        let p = project_point(-0.1, -0.1, &origin(0.0, 0.0));
        assert!(p.x_east_ft < 0.0);
        assert!(p.y_north_ft < 0.0);
    }

    #[test]
    fn array_form_matches_point_form() {
        let o = origin(10.0, 45.0);
        let lon = [10.0, 10.1, 9.9];
        let lat = [45.0, 45.2, 44.8];
        let projected = project(&lon, &lat, &o);
        assert_eq!(projected.len(), 3);
        assert_eq!(projected[2], project_point(9.9, 44.8, &o));
    }

    #[test]
    fn antimeridian_pair_averages_through_greenwich() {
        use crate::trajectory::{FlightTrajectory, TrajectoryColumns};

        let at = |lon: f64| {
            FlightTrajectory::new(TrajectoryColumns {
                timestamp: vec![0.0],
                longitude: vec![lon],
                latitude: vec![0.0],
                altitude: vec![0.0],
                bearing: vec![0.0],
                ground_speed: vec![0.0],
            })
            .unwrap()
        };
        let o = EncounterContext::from_trajectories(&at(179.99), &at(-179.99));
        assert_eq!(o.lon0_deg, 0.0);

        let east = project_point(179.99, 0.0, &o);
        let west = project_point(-179.99, 0.0, &o);
        assert!(east.x_east_ft - west.x_east_ft > 20_000.0 * FEET_PER_NMI);
    }
}
