//! Simulator error types
//!
//! Ticking itself never fails; these are construction-time errors.

use thiserror::Error;

/// Errors raised while setting up a simulator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulatorError {
    /// Tick interval must be strictly positive
    #[error("Invalid tick interval: must be greater than zero")]
    InvalidTickInterval,

    /// Initial snapshot is out of range
    #[error("Invalid initial snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Result type alias for simulator setup
pub type SimulatorResult<T> = Result<T, SimulatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimulatorError::InvalidTickInterval;
        assert_eq!(
            err.to_string(),
            "Invalid tick interval: must be greater than zero"
        );

        let err = SimulatorError::InvalidSnapshot("conversion_rate is NaN".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid initial snapshot: conversion_rate is NaN"
        );
    }
}
