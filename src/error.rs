//! Error types for Hanoi Forge

use crate::core::PegId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HanoiError {
    #[error("Invalid disc count: {value} (expected {min}..={max})")]
    InvalidDiscCount { value: i64, min: u32, max: u32 },

    #[error("Invalid peg index: {0} (expected 0, 1 or 2)")]
    InvalidPeg(usize),

    #[error("Peg {0} used more than once in a peg triple")]
    DuplicatePeg(PegId),

    #[error("Invalid tick interval: {0}ms (expected 100..=2000)")]
    InvalidInterval(u64),

    #[error("Plan for {0} discs is too large to materialise")]
    PlanTooLarge(u32),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Peg invariant violated: {0}")]
    InvariantViolation(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for HanoiError {
    fn from(err: serde_json::Error) -> Self {
        HanoiError::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HanoiError>;
