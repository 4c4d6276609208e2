use crate::math::point_at;

use super::{ArcParams, CurveGenerator, CurveResult, Pose};

impl CurveGenerator {
    /// Walks an arc: constant per-step turn, constant per-step
    /// displacement.
    ///
    /// The containment test inspects the most recently emitted vertex
    /// before each step, so a step that begins inside the disc is always
    /// committed; a curve may therefore place its final vertex just
    /// outside. A vertex that *starts* outside ends the walk instead.
    #[must_use]
    pub fn generate_arc(&self, pose: &Pose, params: &ArcParams) -> CurveResult {
        let step_turn = f64::from(pose.handedness * params.deflection);
        let mut current = pose.point;
        let mut heading = pose.direction;
        let mut points = vec![current];

        for _ in 0..params.n_steps {
            if !self.disc.contains(current) {
                break;
            }
            heading += step_turn;
            current = point_at(current, params.step_length, heading);
            points.push(current);
        }

        CurveResult {
            points,
            end_direction: heading,
        }
    }
}
