//! Error types for the kinematics library.
//!
//! This module defines the errors that can occur while constructing a robot
//! model or advancing it by one tick.

use core::fmt;

/// Errors that can occur in kinematic calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// Error for an invalid robot or integrator configuration.
    /// This variant is returned when a maximum is negative or not finite, or
    /// when the display unit divisor is not positive.
    InvalidConfiguration(&'static str),
    /// Error for an invalid time scale.
    /// This variant is returned when a tick is requested with a negative or
    /// non-finite `dt_scale`.
    InvalidTimeScale(&'static str),
}

impl fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KinematicsError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            KinematicsError::InvalidTimeScale(msg) => write!(f, "Invalid time scale: {}", msg),
        }
    }
}

impl core::error::Error for KinematicsError {}
