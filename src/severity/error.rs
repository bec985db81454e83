use thiserror::Error;

use crate::thresholds::ThresholdError;
use crate::trajectory::TrajectoryError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlowcError {
    #[error(transparent)]
    Trajectory(#[from] TrajectoryError),
    #[error(transparent)]
    Thresholds(#[from] ThresholdError),
}
