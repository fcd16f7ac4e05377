//! Robot body geometry for the two drivetrain drawings.
//!
//! Offsets are in body units before `scaling`. Angles added to the heading
//! are measured counter-clockwise from +x, so the front of the body sits at
//! `heading + 90`.

use serde::Deserialize;
use trailbot_kinematics::Pose;

use super::{Hatch, Point, Primitive, Rect, Rgba, Style};

/// Which wheel layout is drawn. Has no effect on the kinematics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrivetrainVariant {
    Mecanum,
    #[default]
    DiffySwerve,
}

const EYE_RADIUS: f64 = 0.05;
const PUPIL_RADIUS: f64 = 0.02;
const CENTER_RADIUS: f64 = 0.01;
const WHEEL_HOLE_RADIUS: f64 = 0.055;

fn polar(pose: &Pose, radius: f64, angle: f64, scaling: f64) -> Point {
    let (s, c) = (pose.heading + angle).to_radians().sin_cos();
    (pose.x + radius * c * scaling, pose.y + radius * s * scaling)
}

fn circle(center: Point, radius: f64, color: Rgba) -> Primitive {
    Primitive::Circle { center, radius, color }
}

/// Eyes, then pupils, each given as `(radius, angle)` around the centre.
fn face(pose: &Pose, right: (f64, f64), left: (f64, f64), scaling: f64) -> [Primitive; 4] {
    let r = polar(pose, right.0, right.1, scaling);
    let l = polar(pose, left.0, left.1, scaling);
    [
        circle(r, EYE_RADIUS * scaling, Rgba::WHITE),
        circle(l, EYE_RADIUS * scaling, Rgba::WHITE),
        circle(r, PUPIL_RADIUS * scaling, Rgba::BLACK),
        circle(l, PUPIL_RADIUS * scaling, Rgba::BLACK),
    ]
}

fn mecanum(pose: &Pose, s: f64) -> Vec<Primitive> {
    let (x, y, h) = (pose.x, pose.y, pose.heading);
    let mut out = Vec::with_capacity(10);

    out.push(Primitive::Rect(Rect::from_corner(
        (x - 0.15 * s, y - 0.25 * s),
        0.30 * s,
        0.5 * s,
        h,
        Style::Filled,
        Rgba::DARK_SLATE_GREY,
    )));

    // fr, br, fl, bl; rollers on diagonal wheels share a direction
    let wheels = [
        (36.8698976, Hatch::Forward),
        (323.1301024, Hatch::Back),
        (143.1301024, Hatch::Back),
        (216.8698976, Hatch::Forward),
    ];
    for (angle, hatch) in wheels {
        let (sn, cs) = (h + angle).to_radians().sin_cos();
        out.push(Primitive::Rect(Rect::from_corner(
            (x + (0.25 * cs - 0.05) * s, y + (0.25 * sn - 0.1) * s),
            0.1 * s,
            0.2 * s,
            h,
            Style::Hatched(hatch),
            Rgba::BLACK,
        )));
    }

    out.extend(face(pose, (0.19235384061, 64.0), (0.19235384061, 110.0), s));
    out.push(circle((x, y), CENTER_RADIUS * s, Rgba::BLACK));
    out
}

fn diffy_swerve(pose: &Pose, velocity_angle: f64, s: f64) -> Vec<Primitive> {
    let (x, y, h) = (pose.x, pose.y, pose.heading);
    let mut out = Vec::with_capacity(15);

    out.push(Primitive::Rect(Rect::from_corner(
        (x - 0.25 * s, y - 0.25 * s),
        0.5 * s,
        0.5 * s,
        h,
        Style::Filled,
        Rgba::DARK_SLATE_GREY,
    )));

    let holes = [
        (0.24234531148, 45.0),
        (0.24234531148, 315.0),
        (0.23234531148, 133.0),
        (0.23234531148, 226.0),
    ];
    for (radius, angle) in holes {
        out.push(circle(polar(pose, radius, angle, s), WHEEL_HOLE_RADIUS * s, Rgba::DARK_GREY));
    }

    // Modules point along the direction of travel. Corner offsets (dx, dy).
    let wheels = [
        (46.3, -0.018, -0.0475),
        (316.3, -0.025, -0.0575),
        (133.7, -0.02425, -0.0475),
        (226.3, -0.024725, -0.046),
    ];
    for (angle, dx, dy) in wheels {
        let (sn, cs) = (h + angle).to_radians().sin_cos();
        out.push(Primitive::Rect(Rect::from_corner(
            (x + (0.2351728088 * cs + dx) * s, y + (0.2351728088 * sn + dy) * s),
            0.05 * s,
            0.1 * s,
            velocity_angle,
            Style::Filled,
            Rgba::BLACK,
        )));
    }

    out.extend(face(pose, (0.09848857801, 24.0), (0.08762257748, 156.0), s));

    out.push(Primitive::Polygon {
        points: vec![
            polar(pose, 0.24, 90.0, s),
            polar(pose, 0.18172781845, 82.0, s),
            polar(pose, 0.18172781845, 98.0, s),
        ],
        color: Rgba::FIREBRICK,
    });
    out.push(circle((x, y), CENTER_RADIUS * s, Rgba::BLACK));
    out
}

/// Primitives for the robot body at `pose`, back to front in draw order.
///
/// `velocity_angle` orients the swerve modules; mecanum wheels follow the
/// body heading.
pub fn robot_primitives(pose: &Pose, velocity_angle: f64, variant: DrivetrainVariant, scaling: f64) -> Vec<Primitive> {
    match variant {
        DrivetrainVariant::Mecanum => mecanum(pose, scaling),
        DrivetrainVariant::DiffySwerve => diffy_swerve(pose, velocity_angle, scaling),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    fn rects(prims: &[Primitive]) -> Vec<Rect> {
        prims
            .iter()
            .filter_map(|p| match p {
                Primitive::Rect(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_primitive_counts() {
        let pose = Pose::new(0.0, 0.0, 0.0);
        assert_eq!(robot_primitives(&pose, 0.0, DrivetrainVariant::Mecanum, 1.0).len(), 10);
        assert_eq!(robot_primitives(&pose, 0.0, DrivetrainVariant::DiffySwerve, 1.0).len(), 15);
    }

    #[test]
    fn test_mecanum_body_centred_on_pose() {
        let pose = Pose::new(1.0, -2.0, 0.0);
        let prims = robot_primitives(&pose, 0.0, DrivetrainVariant::Mecanum, 2.0);
        let body = rects(&prims)[0];
        assert!((body.center.0 - 1.0).abs() < EPSILON);
        assert!((body.center.1 - -2.0).abs() < EPSILON);
        assert!((body.width - 0.6).abs() < EPSILON);
        assert!((body.height - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_mecanum_wheels_hatched_at_radius() {
        let pose = Pose::new(0.0, 0.0, 30.0);
        let prims = robot_primitives(&pose, 0.0, DrivetrainVariant::Mecanum, 1.0);
        let wheels = &rects(&prims)[1..];
        assert_eq!(wheels.len(), 4);
        for w in wheels {
            assert!(matches!(w.style, Style::Hatched(_)));
            assert_eq!(w.angle_deg, 30.0);
            let r = (w.center.0.powi(2) + w.center.1.powi(2)).sqrt();
            assert!((r - 0.25).abs() < EPSILON);
        }
        assert!(!prims.iter().any(|p| matches!(p, Primitive::Polygon { .. })));
    }

    #[test]
    fn test_diffy_wheels_follow_velocity_angle() {
        let pose = Pose::new(0.0, 0.0, 0.0);
        let prims = robot_primitives(&pose, 123.0, DrivetrainVariant::DiffySwerve, 1.0);
        let rs = rects(&prims);
        assert_eq!(rs.len(), 5);
        assert_eq!(rs[0].angle_deg, 0.0);
        assert!(rs[1..].iter().all(|w| w.angle_deg == 123.0 && w.style == Style::Filled));
    }

    #[test]
    fn test_diffy_front_triangle_points_forward() {
        let pose = Pose::new(0.0, 0.0, 0.0);
        let prims = robot_primitives(&pose, 0.0, DrivetrainVariant::DiffySwerve, 1.0);
        let tip = prims.iter().find_map(|p| match p {
            Primitive::Polygon { points, color } => {
                assert_eq!(*color, Rgba::FIREBRICK);
                Some(points[0])
            }
            _ => None,
        });
        let (tx, ty) = tip.unwrap();
        assert!(tx.abs() < EPSILON);
        assert!((ty - 0.24).abs() < EPSILON);
    }

    #[test]
    fn test_scaling_scales_circles() {
        let pose = Pose::new(0.0, 0.0, 0.0);
        let prims = robot_primitives(&pose, 0.0, DrivetrainVariant::DiffySwerve, 3.0);
        let last = prims.last().unwrap();
        match last {
            Primitive::Circle { center, radius, .. } => {
                assert_eq!(*center, (0.0, 0.0));
                assert!((radius - 0.03).abs() < EPSILON);
            }
            other => panic!("expected centre point, got {:?}", other),
        }
    }
}
