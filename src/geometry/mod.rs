mod cpa;
mod projection;
mod velocity;

pub use cpa::{relative_geometry, AircraftState, SampleGeometry, MIN_RANGE_FT};
pub use projection::{project, project_point, EncounterContext, PlanarPosition, EARTH_RADIUS_FT};
pub use velocity::{resolve, resolve_velocity, GroundVelocity, KNOTS_TO_FPS};
