use macroquad::prelude::*;
use tracing::{error, info, trace};

use crate::clock::SystemClock;
use crate::render::viewport::dash_segments;
use crate::render::{Primitive, Rect, Renderer, Rgba, Scene, Style, Viewport};
use crate::settings::WindowConfig;
use crate::sim::Simulation;

const PATH_WIDTH: f32 = 1.5;
/// Dash and gap as multiples of the path line width.
const PATH_DASH: (f32, f32) = (5.0, 1.0);
const TRAIL_WIDTH: f32 = 5.0;
const HATCH_LINES: usize = 6;
const OUTLINE_WIDTH: f32 = 1.0;

// Function to configure the macroquad window
pub fn window_conf(window: &WindowConfig) -> Conf {
    Conf {
        window_title: window.title.clone(),
        window_width: window.width,
        window_height: window.height,
        high_dpi: window.high_dpi,
        ..Default::default()
    }
}

fn color(c: Rgba) -> Color {
    Color::new(c.r, c.g, c.b, c.a)
}

fn vec2_of((x, y): (f32, f32)) -> Vec2 {
    Vec2::new(x, y)
}

/// Draws scenes into the current macroquad window.
pub struct MacroquadRenderer {
    x_range: (f64, f64),
    y_range: (f64, f64),
}

impl MacroquadRenderer {
    pub fn new(window: &WindowConfig) -> Self {
        Self { x_range: (window.x_min, window.x_max), y_range: (window.y_min, window.y_max) }
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(self.x_range, self.y_range, screen_width() as f64, screen_height() as f64)
    }

    fn draw_rect(vp: &Viewport, rect: &Rect) {
        let [a, b, c, d] = rect.corners().map(|p| vec2_of(vp.to_screen(p)));
        let col = color(rect.color);
        match rect.style {
            Style::Filled => {
                draw_triangle(a, b, c, col);
                draw_triangle(a, c, d, col);
            }
            Style::Hatched(hatch) => {
                for (p, q) in [(a, b), (b, c), (c, d), (d, a)] {
                    draw_line(p.x, p.y, q.x, q.y, OUTLINE_WIDTH, col);
                }
                for (p, q) in rect.hatch_segments(hatch, HATCH_LINES) {
                    let (p, q) = (vp.to_screen(p), vp.to_screen(q));
                    draw_line(p.0, p.1, q.0, q.1, OUTLINE_WIDTH, col);
                }
            }
        }
    }

    fn draw_primitive(vp: &Viewport, primitive: &Primitive) {
        match primitive {
            Primitive::Rect(rect) => Self::draw_rect(vp, rect),
            Primitive::Circle { center, radius, color: c } => {
                let (x, y) = vp.to_screen(*center);
                draw_circle(x, y, vp.length(*radius), color(*c));
            }
            Primitive::Polygon { points, color: c } => {
                // fan from the first vertex; robot polygons are convex
                let pts: Vec<Vec2> = points.iter().map(|p| vec2_of(vp.to_screen(*p))).collect();
                if pts.len() >= 3 {
                    for pair in pts[1..].windows(2) {
                        draw_triangle(pts[0], pair[0], pair[1], color(*c));
                    }
                }
            }
        }
    }
}

impl Renderer for MacroquadRenderer {
    fn draw(&mut self, scene: &Scene) {
        let vp = self.viewport();
        clear_background(WHITE);

        let path: Vec<(f32, f32)> = scene.path.iter().map(|p| vp.to_screen(*p)).collect();
        for (a, b) in dash_segments(&path, PATH_DASH.0 * PATH_WIDTH, PATH_DASH.1 * PATH_WIDTH) {
            draw_line(a.0, a.1, b.0, b.1, PATH_WIDTH, color(Rgba::PATH));
        }

        for seg in &scene.trail {
            let (a, b) = (vp.to_screen(seg.from), vp.to_screen(seg.to));
            draw_line(a.0, a.1, b.0, b.1, TRAIL_WIDTH, color(seg.color));
        }

        for primitive in &scene.robot {
            Self::draw_primitive(&vp, primitive);
        }

        let (x, y, th) = scene.pose;
        draw_text(&format!("Robot: x={:.2} y={:.2} heading={:.1}", x, y, th), 10.0, 20.0, 20.0, BLACK);
        draw_text(&format!("Speed: {:.2}", scene.speed), 10.0, 40.0, 20.0, BLACK);
    }
}

pub async fn run_visualization_loop(mut sim: Simulation<SystemClock>, window: WindowConfig) {
    let mut renderer = MacroquadRenderer::new(&window);

    info!("Visualization loop starting inside graphics module...");

    loop {
        match sim.tick() {
            Ok(out) => trace!(?out, "Frame"),
            Err(e) => {
                error!("Simulation tick failed: {:?}. Exiting visualization loop.", e);
                break;
            }
        }

        renderer.draw(&sim.scene());

        next_frame().await
    }
}
