use std::collections::VecDeque;

use crate::render::{Point, TrailSegment, velocity_color};

#[derive(Debug, Clone, Copy, PartialEq)]
struct TrailPoint {
    at: Point,
    /// Speed fraction sampled when the point was recorded.
    level: f64,
}

/// Motion trail behind the robot, coloured by the speed at each point.
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<TrailPoint>,
    /// 0 keeps every point.
    max_points: usize,
}

impl Trail {
    /// A trail starting at `start`.
    pub fn new(start: Point, max_points: usize) -> Self {
        let mut points = VecDeque::new();
        points.push_back(TrailPoint { at: start, level: 0.0 });
        Self { points, max_points }
    }

    pub fn push(&mut self, at: Point, level: f64) {
        self.points.push_back(TrailPoint { at, level });
        if self.max_points > 0 {
            while self.points.len() > self.max_points {
                self.points.pop_front();
            }
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Consecutive point pairs, each coloured by the speed at its end point.
    pub fn segments(&self) -> Vec<TrailSegment> {
        self.points
            .iter()
            .zip(self.points.iter().skip(1))
            .map(|(a, b)| TrailSegment { from: a.at, to: b.at, color: velocity_color(b.level) })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_pair_consecutive_points() {
        let mut trail = Trail::new((0.0, 0.0), 0);
        assert!(trail.segments().is_empty());

        trail.push((1.0, 0.0), 1.0);
        trail.push((1.0, 1.0), 0.0);
        let segs = trail.segments();
        assert_eq!(trail.len(), 3);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].from, (0.0, 0.0));
        assert_eq!(segs[0].to, (1.0, 0.0));
        assert_eq!(segs[0].color, velocity_color(1.0));
        assert_eq!(segs[1].color, velocity_color(0.0));
        assert_eq!(segs[1].to, (1.0, 1.0));
    }

    #[test]
    fn test_max_points_drops_oldest() {
        let mut trail = Trail::new((0.0, 0.0), 3);
        for i in 1..=5 {
            trail.push((i as f64, 0.0), 0.5);
        }
        assert_eq!(trail.len(), 3);
        let segs = trail.segments();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].from, (3.0, 0.0));
        assert_eq!(segs[1].to, (5.0, 0.0));
    }

    #[test]
    fn test_unbounded_trail() {
        let mut trail = Trail::new((0.0, 0.0), 0);
        for i in 0..1000 {
            trail.push((i as f64, 0.0), 0.0);
        }
        assert_eq!(trail.len(), 1001);
    }
}
