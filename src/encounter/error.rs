use thiserror::Error;

use crate::trajectory::TrajectoryError;

#[derive(Debug, Error)]
pub enum EncounterError {
    #[error("encounter file read error: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("encounter parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("{0}")]
    Trajectory(#[from] TrajectoryError),
}
