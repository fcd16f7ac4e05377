//! Backend-independent drawing model.
//!
//! The simulation describes each frame as a [`Scene`] of plain primitives in
//! plane units; a [`Renderer`] backend turns that into pixels.

pub mod drivetrain;
pub mod viewport;

pub use drivetrain::{DrivetrainVariant, robot_primitives};
pub use viewport::Viewport;

pub type Point = (f64, f64);

/// Straight-alpha RGBA colour, channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    pub const BLACK: Rgba = Rgba::rgb8(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb8(255, 255, 255);
    pub const DARK_SLATE_GREY: Rgba = Rgba::rgb8(47, 79, 79);
    pub const DARK_GREY: Rgba = Rgba::rgb8(169, 169, 169);
    pub const FIREBRICK: Rgba = Rgba::rgb8(178, 34, 34);
    /// Dashed planned path.
    pub const PATH: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.35);

    fn lerp(self, other: Rgba, t: f32) -> Rgba {
        Rgba::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }
}

const TRAIL_ALPHA: f32 = 0.5;
const VELOCITY_GRADIENT: [Rgba; 3] = [
    Rgba::new(1.0, 0.16, 0.0, TRAIL_ALPHA),
    Rgba::new(1.0, 0.79, 0.0, TRAIL_ALPHA),
    Rgba::new(0.47, 1.0, 0.0, TRAIL_ALPHA),
];

/// Trail colour for a speed fraction: red when slow, yellow midway, green at
/// full speed. `level` is clamped to `[0, 1]`.
pub fn velocity_color(level: f64) -> Rgba {
    let t = if level.is_nan() { 0.0 } else { level.clamp(0.0, 1.0) as f32 };
    let stops = (VELOCITY_GRADIENT.len() - 1) as f32;
    let pos = t * stops;
    let i = (pos.floor() as usize).min(VELOCITY_GRADIENT.len() - 2);
    VELOCITY_GRADIENT[i].lerp(VELOCITY_GRADIENT[i + 1], pos - i as f32)
}

/// Diagonal direction of hatch lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hatch {
    /// `/`
    Forward,
    /// `\`
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Filled,
    /// Outline plus diagonal hatching, no fill.
    Hatched(Hatch),
}

/// Rectangle rotated by `angle_deg` (counter-clockwise) about its centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Point,
    pub width: f64,
    pub height: f64,
    pub angle_deg: f64,
    pub style: Style,
    pub color: Rgba,
}

impl Rect {
    /// A rectangle given by its unrotated lower-left corner.
    pub fn from_corner(corner: Point, width: f64, height: f64, angle_deg: f64, style: Style, color: Rgba) -> Self {
        Self {
            center: (corner.0 + width / 2.0, corner.1 + height / 2.0),
            width,
            height,
            angle_deg,
            style,
            color,
        }
    }

    fn to_world(&self, local: Point) -> Point {
        let (s, c) = self.angle_deg.to_radians().sin_cos();
        (
            self.center.0 + local.0 * c - local.1 * s,
            self.center.1 + local.0 * s + local.1 * c,
        )
    }

    /// Corners counter-clockwise from the (unrotated) lower-left.
    pub fn corners(&self) -> [Point; 4] {
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)].map(|p| self.to_world(p))
    }

    /// `n` parallel hatch lines spanning the rectangle from its left edge to
    /// its right edge.
    pub fn hatch_segments(&self, hatch: Hatch, n: usize) -> Vec<(Point, Point)> {
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        let rise = (self.width / 2.0).min(self.height);
        let span = self.height - rise;
        (0..n)
            .map(|i| {
                let t = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.5 };
                let low = -hh + span * t;
                let (left, right) = match hatch {
                    Hatch::Forward => ((-hw, low), (hw, low + rise)),
                    Hatch::Back => ((-hw, low + rise), (hw, low)),
                };
                (self.to_world(left), self.to_world(right))
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect(Rect),
    Circle { center: Point, radius: f64, color: Rgba },
    Polygon { points: Vec<Point>, color: Rgba },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSegment {
    pub from: Point,
    pub to: Point,
    pub color: Rgba,
}

/// Everything drawn in one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    /// Closed planned path.
    pub path: Vec<Point>,
    pub trail: Vec<TrailSegment>,
    pub robot: Vec<Primitive>,
    /// Robot pose `(x, y, heading)` for overlays.
    pub pose: (f64, f64, f64),
    pub speed: f64,
}

/// A drawing backend.
pub trait Renderer {
    fn draw(&mut self, scene: &Scene);
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.0 - b.0).abs() < EPSILON && (a.1 - b.1).abs() < EPSILON
    }

    #[test]
    fn test_velocity_color_stops() {
        assert_eq!(velocity_color(0.0), VELOCITY_GRADIENT[0]);
        let full = velocity_color(1.0);
        assert!((full.r - 0.47).abs() < 1e-6 && (full.g - 1.0).abs() < 1e-6);
        let mid = velocity_color(0.5);
        assert!((mid.g - 0.79).abs() < 1e-6);
        assert!((mid.r - 1.0).abs() < 1e-6);
        let quarter = velocity_color(0.25);
        assert!((quarter.g - (0.16 + 0.79) / 2.0).abs() < 1e-6);
        assert_eq!(quarter.a, TRAIL_ALPHA);
    }

    #[test]
    fn test_velocity_color_clamped() {
        assert_eq!(velocity_color(-3.0), velocity_color(0.0));
        assert_eq!(velocity_color(7.0), velocity_color(1.0));
        assert_eq!(velocity_color(f64::NAN), velocity_color(0.0));
    }

    #[test]
    fn test_rect_from_corner_centres() {
        let r = Rect::from_corner((1.0, 2.0), 4.0, 2.0, 0.0, Style::Filled, Rgba::BLACK);
        assert!(close(r.center, (3.0, 3.0)));
        let c = r.corners();
        assert!(close(c[0], (1.0, 2.0)));
        assert!(close(c[2], (5.0, 4.0)));
    }

    #[test]
    fn test_rect_corners_rotate_about_centre() {
        let r = Rect { center: (0.0, 0.0), width: 2.0, height: 1.0, angle_deg: 90.0, style: Style::Filled, color: Rgba::BLACK };
        let c = r.corners();
        // (-1, -0.5) rotated 90 degrees counter-clockwise.
        assert!(close(c[0], (0.5, -1.0)));
        assert!(close(c[2], (-0.5, 1.0)));
    }

    #[test]
    fn test_hatch_segments_inside_rect() {
        let r = Rect { center: (0.0, 0.0), width: 0.1, height: 0.2, angle_deg: 0.0, style: Style::Filled, color: Rgba::BLACK };
        for hatch in [Hatch::Forward, Hatch::Back] {
            let segs = r.hatch_segments(hatch, 5);
            assert_eq!(segs.len(), 5);
            for (a, b) in segs {
                for p in [a, b] {
                    assert!(p.0.abs() <= 0.05 + EPSILON && p.1.abs() <= 0.1 + EPSILON);
                }
                match hatch {
                    Hatch::Forward => assert!(b.1 > a.1),
                    Hatch::Back => assert!(b.1 < a.1),
                }
            }
        }
    }
}
