use super::Point;

/// Maps a fixed plane-unit view range onto a pixel surface at 1:1 aspect,
/// y pointing up, the range centred on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    x_range: (f64, f64),
    y_range: (f64, f64),
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(x_range: (f64, f64), y_range: (f64, f64), width: f64, height: f64) -> Self {
        Self { x_range, y_range, width, height }
    }

    /// Pixels per plane unit.
    pub fn scale(&self) -> f64 {
        let sx = self.width / (self.x_range.1 - self.x_range.0);
        let sy = self.height / (self.y_range.1 - self.y_range.0);
        sx.min(sy)
    }

    pub fn to_screen(&self, p: Point) -> (f32, f32) {
        let scale = self.scale();
        let cx = (self.x_range.0 + self.x_range.1) / 2.0;
        let cy = (self.y_range.0 + self.y_range.1) / 2.0;
        (
            (self.width / 2.0 + (p.0 - cx) * scale) as f32,
            (self.height / 2.0 - (p.1 - cy) * scale) as f32,
        )
    }

    pub fn length(&self, plane_units: f64) -> f32 {
        (plane_units * self.scale()) as f32
    }
}

/// Split a screen-space polyline into dashes of `dash` pixels separated by
/// `gap` pixels. The dash pattern carries over across vertices.
pub fn dash_segments(points: &[(f32, f32)], dash: f32, gap: f32) -> Vec<((f32, f32), (f32, f32))> {
    let mut out = Vec::new();
    if dash <= 0.0 {
        return out;
    }
    let gap = gap.max(0.0);
    let mut drawing = true;
    let mut left = dash;

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let len = ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();
        if len == 0.0 {
            continue;
        }
        let dir = ((b.0 - a.0) / len, (b.1 - a.1) / len);
        let at = |d: f32| (a.0 + dir.0 * d, a.1 + dir.1 * d);

        let mut pos = 0.0;
        while pos < len {
            let run = left.min(len - pos);
            if drawing {
                out.push((at(pos), at(pos + run)));
            }
            pos += run;
            left -= run;
            if left <= 0.0 {
                drawing = !drawing;
                left = if drawing { dash } else { gap };
                if left <= 0.0 {
                    drawing = true;
                    left = dash;
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_keeps_aspect() {
        // 12 x 8 units into 800 x 600 px: width limits the scale.
        let vp = Viewport::new((-6.0, 6.0), (-4.0, 4.0), 800.0, 600.0);
        assert!((vp.scale() - 800.0 / 12.0).abs() < 1e-9);
        assert_eq!(vp.to_screen((0.0, 0.0)), (400.0, 300.0));
        let (sx, sy) = vp.to_screen((6.0, 4.0));
        assert!((sx - 800.0).abs() < 1e-3);
        // y up: the top of the range is above centre.
        assert!(sy < 300.0);
    }

    #[test]
    fn test_viewport_length() {
        let vp = Viewport::new((0.0, 10.0), (0.0, 10.0), 100.0, 200.0);
        assert!((vp.length(2.5) - 25.0).abs() < 1e-5);
    }

    #[test]
    fn test_dash_segments_single_line() {
        let dashes = dash_segments(&[(0.0, 0.0), (13.0, 0.0)], 5.0, 1.0);
        // 0-5, 6-11, 12-13
        assert_eq!(dashes.len(), 3);
        assert_eq!(dashes[0], ((0.0, 0.0), (5.0, 0.0)));
        assert_eq!(dashes[1], ((6.0, 0.0), (11.0, 0.0)));
        assert_eq!(dashes[2], ((12.0, 0.0), (13.0, 0.0)));
    }

    #[test]
    fn test_dash_pattern_continues_across_vertex() {
        let dashes = dash_segments(&[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)], 5.0, 1.0);
        assert_eq!(dashes[0], ((0.0, 0.0), (3.0, 0.0)));
        assert_eq!(dashes[1], ((3.0, 0.0), (3.0, 2.0)));
        assert_eq!(dashes[2], ((3.0, 3.0), (3.0, 4.0)));
    }

    #[test]
    fn test_dash_degenerate_inputs() {
        assert!(dash_segments(&[], 5.0, 1.0).is_empty());
        assert!(dash_segments(&[(1.0, 1.0)], 5.0, 1.0).is_empty());
        assert!(dash_segments(&[(0.0, 0.0), (10.0, 0.0)], 0.0, 1.0).is_empty());
        // No gap draws the whole line in dash-length pieces.
        assert_eq!(dash_segments(&[(0.0, 0.0), (10.0, 0.0)], 5.0, 0.0).len(), 2);
    }
}
