mod error;

use std::fs;
use std::path::Path;

pub use error::EncounterError;

use crate::severity::{SlowcCalculator, SlowcError};
use crate::thresholds::WellClearThresholds;
use crate::trajectory::{FlightTrajectory, TrajectoryError};

/// A pair of trajectories loaded from a YAML or JSON document with
/// `ownship` and `intruder` keys.
#[derive(Debug, Clone, PartialEq)]
pub struct Encounter {
    pub ownship: FlightTrajectory,
    pub intruder: FlightTrajectory,
}

impl Encounter {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EncounterError> {
        let content = fs::read_to_string(path.as_ref())?;
        let encounter = Self::from_str(&content)?;
        log::info!(
            "Loaded encounter {} ({} samples)",
            path.as_ref().display(),
            encounter.ownship.len()
        );
        Ok(encounter)
    }

    pub fn from_str(document: &str) -> Result<Self, EncounterError> {
        let root: serde_json::Value = serde_yaml::from_str(document)?;
        Ok(Self {
            ownship: trajectory_entry(&root, "ownship")?,
            intruder: trajectory_entry(&root, "intruder")?,
        })
    }

    pub fn calculator(
        &self,
        thresholds: WellClearThresholds,
    ) -> Result<SlowcCalculator<'_>, SlowcError> {
        SlowcCalculator::with_thresholds(&self.ownship, &self.intruder, thresholds)
    }
}

fn trajectory_entry(
    root: &serde_json::Value,
    key: &str,
) -> Result<FlightTrajectory, TrajectoryError> {
    let value = root
        .get(key)
        .ok_or_else(|| TrajectoryError::TypeViolation(format!("missing '{}' trajectory", key)))?;
    FlightTrajectory::from_value(value.clone()).map_err(|e| match e {
        TrajectoryError::TypeViolation(msg) => {
            TrajectoryError::TypeViolation(format!("{}: {}", key, msg))
        }
        other => other,
    })
}
