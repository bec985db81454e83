use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

use super::error::TrajectoryError;

/// Relative tolerance used when comparing two timestamp columns.
pub const TIMESTAMP_RTOL: f64 = 1e-5;
/// Absolute tolerance (seconds) used when comparing two timestamp columns.
pub const TIMESTAMP_ATOL: f64 = 1e-8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum TrajectoryField {
    Timestamp,
    Longitude,
    Latitude,
    Altitude,
    Bearing,
    GroundSpeed,
}

/// Untyped column layout of a trajectory as it arrives from files or the API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct TrajectoryColumns {
    /// Seconds, non-decreasing
    pub timestamp: Vec<f64>,
    /// Decimal degrees
    pub longitude: Vec<f64>,
    /// Decimal degrees
    pub latitude: Vec<f64>,
    /// Feet
    pub altitude: Vec<f64>,
    /// Degrees clockwise from true north
    pub bearing: Vec<f64>,
    /// Knots
    pub ground_speed: Vec<f64>,
}

/// An ordered sequence of samples stored as six equal-length columns.
///
/// The only way to obtain one is through [`FlightTrajectory::new`] or
/// [`FlightTrajectory::from_value`], both of which reject malformed shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightTrajectory {
    columns: TrajectoryColumns,
}

impl FlightTrajectory {
    pub fn new(columns: TrajectoryColumns) -> Result<Self, TrajectoryError> {
        let expected = columns.timestamp.len();

        for (field, values) in field_columns(&columns) {
            if values.len() != expected {
                return Err(TrajectoryError::TypeViolation(format!(
                    "{} has {} samples, timestamp has {}",
                    field,
                    values.len(),
                    expected
                )));
            }
            if let Some(i) = values.iter().position(|v| !v.is_finite()) {
                return Err(TrajectoryError::TypeViolation(format!(
                    "{} sample {} is not finite",
                    field, i
                )));
            }
        }

        if let Some(i) = columns.timestamp.windows(2).position(|w| w[1] < w[0]) {
            return Err(TrajectoryError::TypeViolation(format!(
                "timestamp decreases at sample {}",
                i + 1
            )));
        }

        Ok(Self { columns })
    }

    /// Decode a trajectory from an untyped value, such as a JSON request body.
    pub fn from_value(value: serde_json::Value) -> Result<Self, TrajectoryError> {
        let columns: TrajectoryColumns = serde_json::from_value(value)
            .map_err(|e| TrajectoryError::TypeViolation(e.to_string()))?;
        Self::new(columns)
    }

    pub fn len(&self) -> usize {
        self.columns.timestamp.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.timestamp.is_empty()
    }

    pub fn timestamp(&self) -> &[f64] {
        &self.columns.timestamp
    }

    pub fn longitude(&self) -> &[f64] {
        &self.columns.longitude
    }

    pub fn latitude(&self) -> &[f64] {
        &self.columns.latitude
    }

    pub fn altitude(&self) -> &[f64] {
        &self.columns.altitude
    }

    pub fn bearing(&self) -> &[f64] {
        &self.columns.bearing
    }

    pub fn ground_speed(&self) -> &[f64] {
        &self.columns.ground_speed
    }

    pub fn columns(&self) -> &TrajectoryColumns {
        &self.columns
    }

    /// Fails unless both trajectories share the same timestamps within tolerance.
    pub fn check_aligned(&self, other: &FlightTrajectory) -> Result<(), TrajectoryError> {
        if self.len() != other.len() {
            return Err(TrajectoryError::AlignmentMismatch(format!(
                "trajectories have {} and {} samples",
                self.len(),
                other.len()
            )));
        }

        let mismatch = self
            .timestamp()
            .iter()
            .zip(other.timestamp())
            .position(|(a, b)| !timestamps_close(*a, *b));

        match mismatch {
            Some(i) => Err(TrajectoryError::AlignmentMismatch(format!(
                "timestamp {} differs: {} vs {}",
                i,
                self.timestamp()[i],
                other.timestamp()[i]
            ))),
            None => Ok(()),
        }
    }
}

impl TryFrom<TrajectoryColumns> for FlightTrajectory {
    type Error = TrajectoryError;

    fn try_from(columns: TrajectoryColumns) -> Result<Self, Self::Error> {
        Self::new(columns)
    }
}

fn field_columns(columns: &TrajectoryColumns) -> [(TrajectoryField, &[f64]); 6] {
    [
        (TrajectoryField::Timestamp, columns.timestamp.as_slice()),
        (TrajectoryField::Longitude, columns.longitude.as_slice()),
        (TrajectoryField::Latitude, columns.latitude.as_slice()),
        (TrajectoryField::Altitude, columns.altitude.as_slice()),
        (TrajectoryField::Bearing, columns.bearing.as_slice()),
        (TrajectoryField::GroundSpeed, columns.ground_speed.as_slice()),
    ]
}

fn timestamps_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= TIMESTAMP_ATOL + TIMESTAMP_RTOL * a.abs().max(b.abs())
}
