mod arc;
mod ellipse;
mod random;

pub use random::{random_handedness, random_spec};

use rand::Rng;

use crate::math::{Disc, Point2};

/// Start state for a curve walk: where the pen is, which way it points,
/// and which way it curls.
#[derive(Debug, Clone, Copy)]
pub struct Pose {
    /// Seed point; always the first emitted vertex.
    pub point: Point2,
    /// Heading in degrees. Headings are never normalized inside a walk.
    pub direction: f64,
    /// Curl direction: `+1` or `-1`. Random mode may sample `0`, which
    /// degenerates the arc walk to a straight line.
    pub handedness: i32,
}

impl Pose {
    /// Creates a new pose.
    #[must_use]
    pub fn new(point: Point2, direction: f64, handedness: i32) -> Self {
        Self {
            point,
            direction,
            handedness,
        }
    }
}

/// Parameters for an arc walk: constant turn, constant displacement.
#[derive(Debug, Clone, Copy)]
pub struct ArcParams {
    /// Degrees added to the heading each step; the sign combines with the
    /// pose handedness.
    pub deflection: i32,
    /// Displacement from each vertex to the next.
    pub step_length: f64,
    /// Hard upper bound on the number of segments.
    pub n_steps: u32,
}

/// Displacement schedule for the ellipse walk.
#[derive(Debug, Clone, Copy)]
pub struct DisplacementRange {
    /// Walk ends once the displacement is no longer above this floor.
    pub min: f64,
    /// Displacement before the first step.
    pub start: f64,
    /// Amount the displacement shrinks by each step.
    pub delta: f64,
}

/// Parameters for an ellipse walk: growing turn, shrinking displacement.
#[derive(Debug, Clone, Copy)]
pub struct EllipseParams {
    /// Turn budget; the growth phase stops when the accumulated
    /// deflection reaches it.
    pub max_deflection: i32,
    /// Displacement schedule shared by the growth and mirror passes.
    pub displacement: DisplacementRange,
    /// Mirror each growth step to close the figure.
    pub closed: bool,
}

/// A curve kind together with its parameter bundle.
#[derive(Debug, Clone, Copy)]
pub enum CurveSpec {
    Arc(ArcParams),
    Ellipse(EllipseParams),
}

/// An emitted curve: the ordered vertices and the heading at the end of
/// the walk.
#[derive(Debug, Clone)]
pub struct CurveResult {
    /// Never empty; the first vertex is the pose's seed point. Every
    /// vertex except the seed and the last one lies strictly inside the
    /// generator's disc.
    pub points: Vec<Point2>,
    /// Heading when the walk stopped, in degrees. On early exit this is
    /// the heading at the moment the pen left the disc.
    pub end_direction: f64,
}

impl CurveResult {
    /// Returns the last emitted vertex.
    #[must_use]
    pub fn endpoint(&self) -> Point2 {
        // points is never empty: every walk seeds it with the pose point.
        self.points[self.points.len() - 1]
    }
}

/// Walks random curves inside a fixed containment disc.
#[derive(Debug, Clone, Copy)]
pub struct CurveGenerator {
    disc: Disc,
}

impl CurveGenerator {
    /// Creates a generator confined to `disc`.
    #[must_use]
    pub fn new(disc: Disc) -> Self {
        Self { disc }
    }

    /// Returns the containment disc.
    #[must_use]
    pub fn disc(&self) -> Disc {
        self.disc
    }

    /// Walks the curve described by `spec`.
    #[must_use]
    pub fn generate(&self, pose: &Pose, spec: &CurveSpec) -> CurveResult {
        match spec {
            CurveSpec::Arc(params) => self.generate_arc(pose, params),
            CurveSpec::Ellipse(params) => self.generate_ellipse(pose, params),
        }
    }

    /// Random mode: samples the handedness, the curve kind, and its
    /// parameter bundle from `rng`, ignoring the pose's own handedness.
    #[must_use]
    pub fn generate_random<R: Rng>(&self, pose: &Pose, rng: &mut R) -> CurveResult {
        let pose = Pose {
            handedness: random_handedness(rng),
            ..*pose
        };
        let spec = random_spec(rng);
        self.generate(&pose, &spec)
    }
}
