mod calculator;
mod error;
mod penetration;
mod squircle;

pub use calculator::{
    calculate_slowc, calculate_slowc_with, PeakSeverity, SeverityReport, SeveritySample,
    SlowcCalculator,
};
pub use error::SlowcError;
pub use penetration::{penetration_ratios, PenetrationRatios};
pub use squircle::{fg_norm, severity_from_ratios, BlendedPenetration};
