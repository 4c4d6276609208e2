mod input;

pub use input::MouseWatch;

use std::time::Duration;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

use crate::curve::{CurveGenerator, Pose};
use crate::error::Result;
use crate::math::{point_at, Disc, Point2};
use crate::raster::{Color, CurvePen, SegmentStyle, Surface};

/// Pause between drawn segments.
const SEGMENT_PAUSE: Duration = Duration::from_millis(50);
/// Pause between the last segment of a curve and its closing composite.
const SETTLE_PAUSE: Duration = Duration::from_millis(10);
/// Pause between curves.
const CURVE_PAUSE: Duration = Duration::from_millis(500);

/// Fixed parameters of a saver run.
#[derive(Debug, Clone, Copy)]
pub struct SaverConfig {
    /// Display width in pixels.
    pub width: u32,
    /// Display height in pixels.
    pub height: u32,
    /// Stroke width of the framing ring.
    pub ring_width: u32,
    /// Stroke width of the curve ink.
    pub line_width: u32,
    /// Erasing-tail mode.
    pub strobo: bool,
    /// Segment budget before a strobe wipe.
    pub strobo_tail: u32,
    /// Straight displacement taken before each new curve so successive
    /// curves do not share an endpoint.
    pub seed_step: f64,
    /// Number of curves after which the whole screen is wiped.
    pub wipe_after: u32,
}

impl SaverConfig {
    /// Baseline configuration for a display of the given size.
    #[must_use]
    pub fn for_display(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ring_width: 5,
            line_width: 1,
            strobo: false,
            strobo_tail: 50,
            seed_step: 10.0,
            wipe_after: 30,
        }
    }
}

/// Where the render loop is within the current curve.
#[derive(Debug)]
enum Phase {
    /// Pick colors, restamp the frame, seed a pose, generate a curve.
    Begin,
    /// Stream the generated vertices one segment at a time.
    Drawing { points: Vec<Point2>, next: usize },
    /// Close the curve: composite, flip the pose, rest.
    Settle { endpoint: Point2 },
}

/// The render-loop driver.
///
/// Owns the containment disc, both drawing surfaces, the pen, and the
/// RNG. The render loop is a cooperative state machine: each
/// [`SaverDriver::step`] performs one quantum and returns the pause to
/// observe before the next, so the windowing glue stays in control of
/// pacing and of the exit check between quanta.
#[derive(Debug)]
pub struct SaverDriver {
    config: SaverConfig,
    generator: CurveGenerator,
    pen: CurvePen,
    style: SegmentStyle,
    /// Frame overlay: the colored ring plus the outside mask. Painted
    /// pixels only; transparent elsewhere so compositing keeps the ink.
    frame_layer: Surface,
    /// Accumulated ink; this is what the user sees.
    canvas: Surface,
    rng: StdRng,
    point: Point2,
    direction: f64,
    curve_counter: u32,
    circle_color: Color,
    bg_color: Color,
    phase: Phase,
}

impl SaverDriver {
    /// Creates a driver for the given display, seeding the first pose on
    /// the containment circle's rim pointing inward.
    ///
    /// # Errors
    ///
    /// Returns an error if the derived containment disc is degenerate
    /// (display too small) or the configured segment style is invalid.
    pub fn new(config: SaverConfig, mut rng: StdRng) -> Result<Self> {
        let center = Point2::new(f64::from(config.width / 2), f64::from(config.height / 2));
        let radius = f64::from(config.height / 2) - 10.0;
        let disc = Disc::new(center, radius)?;
        let style = SegmentStyle::new(Color::new(250, 250, 250), config.line_width)?;

        let start_angle = f64::from(rng.random_range(0..=359_i32));
        let point = disc.point_on_rim(start_angle);
        let direction = flip_heading(start_angle);

        info!(
            width = config.width,
            height = config.height,
            radius,
            strobo = config.strobo,
            "saver initialized"
        );

        let mut canvas = Surface::new(config.width, config.height);
        canvas.fill(Color::BLACK);

        Ok(Self {
            config,
            generator: CurveGenerator::new(disc),
            pen: CurvePen::new(),
            style,
            frame_layer: Surface::new(config.width, config.height),
            canvas,
            rng,
            point,
            direction,
            curve_counter: 0,
            circle_color: Color::new(128, 128, 128),
            bg_color: Color::BLACK,
            phase: Phase::Begin,
        })
    }

    /// Returns the surface to present.
    #[must_use]
    pub fn frame(&self) -> &Surface {
        &self.canvas
    }

    /// Advances one quantum of the render loop and returns the pause to
    /// observe before the next one.
    pub fn step(&mut self) -> Duration {
        match std::mem::replace(&mut self.phase, Phase::Begin) {
            Phase::Begin => self.begin_curve(),
            Phase::Drawing { points, next } => self.draw_next_segment(points, next),
            Phase::Settle { endpoint } => self.finish_curve(endpoint),
        }
    }

    fn begin_curve(&mut self) -> Duration {
        if self.curve_counter > self.config.wipe_after {
            self.canvas.fill(Color::BLACK);
            self.frame_layer.clear();
            self.curve_counter = 0;
        }

        let ink = self.sample_ink_color();
        self.circle_color = ink;
        self.bg_color = ink.dimmed();
        self.style.set_color(ink);
        self.redraw_frame();
        self.canvas.blit(&self.frame_layer, (0, 0));

        self.point = point_at(self.point, self.config.seed_step, self.direction);
        let pose = Pose::new(self.point, self.direction, 1);
        let curve = self.generator.generate_random(&pose, &mut self.rng);
        debug!(vertices = curve.points.len(), "curve generated");

        self.curve_counter += 1;
        self.phase = Phase::Drawing {
            points: curve.points,
            next: 0,
        };
        Duration::ZERO
    }

    fn draw_next_segment(&mut self, points: Vec<Point2>, next: usize) -> Duration {
        if next + 1 >= points.len() {
            // Single-vertex curve: nothing to stream.
            self.phase = Phase::Settle {
                endpoint: points[points.len() - 1],
            };
            return SETTLE_PAUSE;
        }

        self.pen
            .draw_segment(points[next], points[next + 1], &self.style, &mut self.canvas);
        self.canvas.blit(&self.frame_layer, (0, 0));

        if self.config.strobo && self.pen.segment_count() > self.config.strobo_tail {
            // Erasing tail: drop the ink and restamp the frame.
            self.pen.reset();
            self.canvas.fill(Color::BLACK);
            self.canvas.blit(&self.frame_layer, (0, 0));
        }

        if next + 2 < points.len() {
            self.phase = Phase::Drawing {
                points,
                next: next + 1,
            };
            SEGMENT_PAUSE
        } else {
            self.phase = Phase::Settle {
                endpoint: points[points.len() - 1],
            };
            SETTLE_PAUSE
        }
    }

    fn finish_curve(&mut self, endpoint: Point2) -> Duration {
        self.redraw_frame();
        self.canvas.blit(&self.frame_layer, (0, 0));
        self.point = endpoint;
        self.direction = flip_heading(self.direction);
        self.phase = Phase::Begin;
        CURVE_PAUSE
    }

    /// Restamps the frame overlay: ring in the current ink color, outside
    /// mask in the background tone.
    fn redraw_frame(&mut self) {
        let disc = self.generator.disc();
        self.frame_layer.draw_ring(
            disc.center(),
            disc.radius(),
            self.config.ring_width,
            self.circle_color,
        );
        self.frame_layer
            .fill_outside(disc.center(), disc.radius(), self.bg_color);
    }

    /// Samples the ink: one randomly chosen channel at full brightness,
    /// the other two uniform in [0, 250].
    fn sample_ink_color(&mut self) -> Color {
        let bright = self.rng.random_range(0..3_usize);
        let mut channels = [0_u8; 3];
        for channel in &mut channels {
            *channel = self.rng.random_range(0..=250);
        }
        channels[bright] = 250;
        Color::new(channels[0], channels[1], channels[2])
    }
}

/// Turns a heading back toward the disc interior: adds 180° and wraps by
/// a single subtraction once the raw sum exceeds 360.
fn flip_heading(direction: f64) -> f64 {
    let flipped = direction + 180.0;
    if flipped > 360.0 {
        flipped - 360.0
    } else {
        flipped
    }
}
