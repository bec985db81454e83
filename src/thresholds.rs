use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Minimum horizontal hazard-zone radius (ft).
pub const DMOD_FT: f64 = 4000.0;
/// Vertical well-clear threshold (ft).
pub const DH_THR_FT: f64 = 450.0;
/// Time-based horizontal threshold (s) used to size the hazard zone.
pub const TAU_MOD_THR_S: f64 = 35.0;

/// Well-clear thresholds. [`Default`] is the fixed SC-228 set.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct WellClearThresholds {
    pub dmod_ft: f64,
    pub dh_thr_ft: f64,
    pub tau_mod_thr_s: f64,
}

impl Default for WellClearThresholds {
    fn default() -> Self {
        Self {
            dmod_ft: DMOD_FT,
            dh_thr_ft: DH_THR_FT,
            tau_mod_thr_s: TAU_MOD_THR_S,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThresholdError {
    #[error("invalid threshold {name}: {value} (must be finite and positive)")]
    Invalid { name: &'static str, value: f64 },
}

impl WellClearThresholds {
    /// Every threshold is a divisor, so each must be finite and positive.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        let values = [
            ("dmod_ft", self.dmod_ft),
            ("dh_thr_ft", self.dh_thr_ft),
            ("tau_mod_thr_s", self.tau_mod_thr_s),
        ];
        for (name, value) in values {
            if !(value.is_finite() && value > 0.0) {
                return Err(ThresholdError::Invalid { name, value });
            }
        }
        Ok(())
    }
}
