#![warn(missing_docs)]
//! Waypoints and the ordered path a simulated robot is drawn against.
//!
//! A [`Path`] is built once and never mutated. Its order defines the drawn
//! polyline; waypoints need not be unique.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod demo;
pub mod error;
pub mod waypoint;

pub use demo::DEMO_WAYPOINTS;
pub use error::PathError;
pub use waypoint::{AUTO_SPEED, GoalSpeed, Waypoint};

/// An ordered, immutable sequence of waypoints.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Path {
    waypoints: Vec<Waypoint>,
}

impl Path {
    /// Creates a path from waypoints in drawing order.
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Self { waypoints }
    }

    /// Creates a path through `coords`, heading 0 and automatic speed at each.
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self::new(coords.iter().map(|&(x, y)| Waypoint::at(x, y)).collect())
    }

    /// The compiled-in demo path.
    pub fn demo() -> Self {
        Self::new(DEMO_WAYPOINTS.to_vec())
    }

    /// Checks every waypoint is finite.
    ///
    /// # Errors
    ///
    /// Returns `Err(PathError::NonFiniteWaypoint)` naming the first bad waypoint.
    pub fn validate(&self) -> Result<(), PathError> {
        match self.waypoints.iter().position(|w| !w.is_finite()) {
            Some(index) => Err(PathError::NonFiniteWaypoint { index }),
            None => Ok(()),
        }
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Whether the path has no waypoints.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// The waypoints in order.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Iterates the waypoints in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Waypoint> {
        self.waypoints.iter()
    }

    /// Waypoint coordinates in order.
    pub fn polyline(&self) -> Vec<(f64, f64)> {
        self.waypoints.iter().map(Waypoint::coord).collect()
    }

    /// The polyline with its first point repeated at the end, so it draws as
    /// a loop. An empty path gives an empty polyline.
    pub fn closed_polyline(&self) -> Vec<(f64, f64)> {
        let mut points = self.polyline();
        if let Some(&first) = points.first() {
            points.push(first);
        }
        points
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Waypoint;
    type IntoIter = std::slice::Iter<'a, Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_polyline_appends_first_point() {
        let path = Path::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        let closed = path.closed_polyline();
        assert_eq!(closed.len(), 4);
        assert_eq!(closed, vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
        assert_eq!(path.polyline().len(), 3);
    }

    #[test]
    fn test_closed_polyline_empty_path() {
        let path = Path::default();
        assert!(path.is_empty());
        assert!(path.closed_polyline().is_empty());
    }

    #[test]
    fn test_closed_polyline_single_point() {
        let path = Path::from_coords(&[(2.0, 3.0)]);
        assert_eq!(path.closed_polyline(), vec![(2.0, 3.0), (2.0, 3.0)]);
    }

    #[test]
    fn test_duplicates_and_order_kept() {
        let path = Path::from_coords(&[(1.0, 1.0), (0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(path.polyline(), vec![(1.0, 1.0), (0.0, 0.0), (1.0, 1.0)]);
    }

    #[test]
    fn test_demo_path() {
        let path = Path::demo();
        assert_eq!(path.len(), 43);
        assert_eq!(path.waypoints()[0].coord(), (0.0, 0.0));
        assert!(path.iter().all(|w| w.speed == GoalSpeed::Auto && w.heading == 0.0));
        assert!(path.validate().is_ok());
        let closed = path.closed_polyline();
        assert_eq!(closed.len(), 44);
        assert_eq!(closed.first(), closed.last());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let path = Path::from_coords(&[(0.0, 0.0), (f64::NAN, 1.0)]);
        assert_eq!(path.validate(), Err(PathError::NonFiniteWaypoint { index: 1 }));
    }
}
