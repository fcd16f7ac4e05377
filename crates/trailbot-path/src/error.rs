//! This module defines the error types used by the `trailbot-path` crate.

/// Error type for path construction.
#[derive(Debug, PartialEq)]
pub enum PathError {
    /// A waypoint has a NaN or infinite coordinate or heading.
    NonFiniteWaypoint {
        /// Position of the offending waypoint in the path.
        index: usize,
    },
}

impl core::fmt::Display for PathError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PathError::NonFiniteWaypoint { index } => {
                write!(f, "Waypoint {} has a non-finite coordinate or heading", index)
            }
        }
    }
}

impl core::error::Error for PathError {}
