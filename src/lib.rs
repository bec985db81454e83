//! Severity loss of well clear (SLoWC) between two aircraft trajectories.

pub mod encounter;
pub mod geometry;
pub mod severity;
pub mod thresholds;
pub mod trajectory;
pub mod web;

pub use encounter::{Encounter, EncounterError};
pub use severity::{
    calculate_slowc, calculate_slowc_with, SeverityReport, SlowcCalculator, SlowcError,
};
pub use thresholds::{ThresholdError, WellClearThresholds};
pub use trajectory::{FlightTrajectory, TrajectoryColumns, TrajectoryError};
