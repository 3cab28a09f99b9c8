use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Invalid SweaterScore: {0}. Score must be between 1 and 10.")]
    InvalidSweaterScore(i64),
}
