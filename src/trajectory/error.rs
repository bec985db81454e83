use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrajectoryError {
    #[error("type violation: {0}")]
    TypeViolation(String),
    #[error("alignment mismatch: {0}")]
    AlignmentMismatch(String),
}
