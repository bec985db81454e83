mod error;
mod types;

pub use error::TrajectoryError;
pub use types::{FlightTrajectory, TrajectoryColumns, TrajectoryField};
