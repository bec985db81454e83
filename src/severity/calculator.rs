use rayon::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use super::error::SlowcError;
use super::penetration::{penetration_ratios, PenetrationRatios};
use super::squircle::{severity_from_ratios, BlendedPenetration};
use crate::geometry::{
    project_point, relative_geometry, resolve_velocity, AircraftState, EncounterContext,
    SampleGeometry,
};
use crate::thresholds::WellClearThresholds;
use crate::trajectory::{FlightTrajectory, TrajectoryError};

/// SLoWC series for a pair of aircraft, using the fixed SC-228 thresholds.
pub fn calculate_slowc(
    trajectory1: &FlightTrajectory,
    trajectory2: &FlightTrajectory,
) -> Result<Vec<f64>, TrajectoryError> {
    Ok(SlowcCalculator::new(trajectory1, trajectory2)?.severities())
}

pub fn calculate_slowc_with(
    trajectory1: &FlightTrajectory,
    trajectory2: &FlightTrajectory,
    thresholds: WellClearThresholds,
) -> Result<Vec<f64>, SlowcError> {
    Ok(SlowcCalculator::with_thresholds(trajectory1, trajectory2, thresholds)?.severities())
}

/// Everything computed for a single timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct SeveritySample {
    pub timestamp: f64,
    pub geometry: SampleGeometry,
    pub ratios: PenetrationRatios,
    pub blended: BlendedPenetration,
    pub severity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct PeakSeverity {
    pub index: usize,
    pub timestamp: f64,
    pub severity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SeverityReport {
    pub context: EncounterContext,
    pub thresholds: WellClearThresholds,
    pub samples: Vec<SeveritySample>,
    pub peak: Option<PeakSeverity>,
}

impl SeverityReport {
    pub fn severities(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.severity).collect()
    }
}

/// Validated encounter between two aircraft, ready to be evaluated per sample.
pub struct SlowcCalculator<'a> {
    ownship: &'a FlightTrajectory,
    intruder: &'a FlightTrajectory,
    context: EncounterContext,
    thresholds: WellClearThresholds,
}

impl<'a> SlowcCalculator<'a> {
    pub fn new(
        ownship: &'a FlightTrajectory,
        intruder: &'a FlightTrajectory,
    ) -> Result<Self, TrajectoryError> {
        Self::aligned(ownship, intruder, WellClearThresholds::default())
    }

    pub fn with_thresholds(
        ownship: &'a FlightTrajectory,
        intruder: &'a FlightTrajectory,
        thresholds: WellClearThresholds,
    ) -> Result<Self, SlowcError> {
        thresholds.validate()?;
        Ok(Self::aligned(ownship, intruder, thresholds)?)
    }

    fn aligned(
        ownship: &'a FlightTrajectory,
        intruder: &'a FlightTrajectory,
        thresholds: WellClearThresholds,
    ) -> Result<Self, TrajectoryError> {
        ownship.check_aligned(intruder)?;

        let context = EncounterContext::from_trajectories(ownship, intruder);
        log::debug!(
            "encounter with {} samples, origin lon {:.6} lat {:.6}",
            ownship.len(),
            context.lon0_deg,
            context.lat0_deg
        );

        Ok(Self {
            ownship,
            intruder,
            context,
            thresholds,
        })
    }

    pub fn len(&self) -> usize {
        self.ownship.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ownship.is_empty()
    }

    pub fn context(&self) -> &EncounterContext {
        &self.context
    }

    pub fn thresholds(&self) -> &WellClearThresholds {
        &self.thresholds
    }

    /// Evaluate one timestamp. Panics if `index` is out of range.
    pub fn sample(&self, index: usize) -> SeveritySample {
        let own = aircraft_state(self.ownship, index, &self.context);
        let other = aircraft_state(self.intruder, index, &self.context);

        let geometry = relative_geometry(&own, &other, &self.thresholds);
        let ratios = penetration_ratios(&geometry, &self.thresholds);

        SeveritySample {
            timestamp: self.ownship.timestamp()[index],
            geometry,
            ratios,
            blended: BlendedPenetration::from_ratios(&ratios),
            severity: severity_from_ratios(&ratios),
        }
    }

    pub fn severity_at(&self, index: usize) -> f64 {
        self.sample(index).severity
    }

    /// Severity for every timestamp, evaluated in parallel.
    pub fn severities(&self) -> Vec<f64> {
        (0..self.len())
            .into_par_iter()
            .map(|i| self.severity_at(i))
            .collect()
    }

    pub fn report(&self) -> SeverityReport {
        let samples: Vec<SeveritySample> = (0..self.len())
            .into_par_iter()
            .map(|i| self.sample(i))
            .collect();
        let peak = peak_severity(&samples);

        SeverityReport {
            context: self.context,
            thresholds: self.thresholds,
            samples,
            peak,
        }
    }
}

fn aircraft_state(
    trajectory: &FlightTrajectory,
    index: usize,
    context: &EncounterContext,
) -> AircraftState {
    AircraftState {
        position: project_point(
            trajectory.longitude()[index],
            trajectory.latitude()[index],
            context,
        ),
        altitude_ft: trajectory.altitude()[index],
        velocity: resolve_velocity(trajectory.bearing()[index], trajectory.ground_speed()[index]),
    }
}

/// Earliest sample with the highest severity.
fn peak_severity(samples: &[SeveritySample]) -> Option<PeakSeverity> {
    let mut peak: Option<PeakSeverity> = None;
    for (index, sample) in samples.iter().enumerate() {
        if peak.map_or(true, |p| sample.severity > p.severity) {
            peak = Some(PeakSeverity {
                index,
                timestamp: sample.timestamp,
                severity: sample.severity,
            });
        }
    }
    peak
}
