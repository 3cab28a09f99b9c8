//! Startup resolution of the default sweater score.
//!
//! `SWEATER_SCORE` is consulted exactly once, while the process boots. Any
//! value that is not an integer in `MIN_SWEATER_SCORE..=MAX_SWEATER_SCORE` is
//! reported and replaced by `DEFAULT_SWEATER_SCORE`; it is never fatal.

use tracing::{info, warn};

pub const SWEATER_SCORE_ENV: &str = "SWEATER_SCORE";
pub const MIN_SWEATER_SCORE: i64 = 1;
pub const MAX_SWEATER_SCORE: i64 = 10;
pub const DEFAULT_SWEATER_SCORE: i64 = 5;

/// Whether `score` lies within the accepted sweater score range.
pub fn score_in_range(score: i64) -> bool {
    (MIN_SWEATER_SCORE..=MAX_SWEATER_SCORE).contains(&score)
}

/// Where the resolved score came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreSource {
    /// Variable unset or empty.
    Default,
    /// Variable held a valid score.
    Env,
    /// Variable was not an integer; holds the raw value.
    Unparseable(String),
    /// Variable was an integer outside the range; holds the raw value.
    OutOfRange(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkshopConfig {
    pub sweater_score: i64,
    pub source: ScoreSource,
}

impl Default for WorkshopConfig {
    fn default() -> Self {
        Self { sweater_score: DEFAULT_SWEATER_SCORE, source: ScoreSource::Default }
    }
}

impl WorkshopConfig {
    /// Resolve from the process environment and log the outcome.
    pub fn from_env() -> Self {
        let raw = std::env::var(SWEATER_SCORE_ENV).ok();
        let cfg = Self::resolve(raw.as_deref());
        cfg.log_resolution();
        cfg
    }

    /// Pure resolution rule; an empty value counts as unset.
    pub fn resolve(raw: Option<&str>) -> Self {
        let raw = match raw {
            Some(v) if !v.is_empty() => v,
            _ => return Self::default(),
        };
        match raw.parse::<i64>() {
            Ok(score) if score_in_range(score) => Self { sweater_score: score, source: ScoreSource::Env },
            Ok(_) => Self {
                sweater_score: DEFAULT_SWEATER_SCORE,
                source: ScoreSource::OutOfRange(raw.to_string()),
            },
            Err(_) => Self {
                sweater_score: DEFAULT_SWEATER_SCORE,
                source: ScoreSource::Unparseable(raw.to_string()),
            },
        }
    }

    pub fn log_resolution(&self) {
        let score = self.sweater_score;
        match &self.source {
            ScoreSource::Default => {
                info!(event = "sweater_score_default", score, "{SWEATER_SCORE_ENV} environment variable not set. Using default of {score}.");
            }
            ScoreSource::Env => {
                info!(event = "sweater_score_env", score, "Default SweaterScore set from environment variable to: {score}");
            }
            ScoreSource::Unparseable(raw) => {
                warn!(
                    event = "sweater_score_invalid",
                    %raw,
                    fallback = score,
                    "Environment variable {SWEATER_SCORE_ENV} ('{raw}') is not a valid number. Using fallback default of {score}."
                );
            }
            ScoreSource::OutOfRange(raw) => {
                warn!(
                    event = "sweater_score_out_of_range",
                    %raw,
                    fallback = score,
                    "Environment variable {SWEATER_SCORE_ENV} ({raw}) is out of range ({MIN_SWEATER_SCORE}-{MAX_SWEATER_SCORE}). Using fallback default of {score}."
                );
            }
        }
    }
}
