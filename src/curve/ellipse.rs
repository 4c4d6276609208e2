use crate::math::point_at;

use super::{CurveGenerator, CurveResult, EllipseParams, Pose};

impl CurveGenerator {
    /// Walks an "ellipse": the per-step turn grows by one unit each step
    /// while the displacement shrinks by `delta`, until either the turn
    /// budget or the displacement floor is hit.
    ///
    /// With `closed`, every growth step is immediately followed by a
    /// mirror pass that walks the accumulated turn back down, appending
    /// the reflected half behind the pen. The mirror pass counts on its
    /// own copies of the deflection and displacement, so the growth
    /// budget resumes untouched and the walk still terminates on it.
    /// The drawn figure depends on this interleaving of mirror
    /// fragments with growth steps.
    ///
    /// The displacement schedule advances before each containment check.
    #[must_use]
    pub fn generate_ellipse(&self, pose: &Pose, params: &EllipseParams) -> CurveResult {
        let mut current = pose.point;
        let mut heading = pose.direction;
        let mut points = vec![current];
        let mut deflection = 0_i32;
        let mut displacement = params.displacement.start;
        let mut growth_steps = 0_u32;

        while displacement > params.displacement.min && deflection < params.max_deflection {
            displacement -= params.displacement.delta;
            if !self.disc.contains(current) {
                return CurveResult {
                    points,
                    end_direction: heading,
                };
            }
            deflection += 1;
            growth_steps += 1;
            heading += f64::from(pose.handedness * deflection);
            current = point_at(current, displacement, heading);
            points.push(current);

            if params.closed {
                let mut mirror_deflection = deflection;
                let mut mirror_displacement = displacement;
                for _ in 1..growth_steps {
                    if !self.disc.contains(current) {
                        return CurveResult {
                            points,
                            end_direction: heading,
                        };
                    }
                    mirror_deflection -= 1;
                    mirror_displacement += params.displacement.delta;
                    heading -= f64::from(pose.handedness * mirror_deflection);
                    current = point_at(current, mirror_displacement, heading);
                    points.push(current);
                }
            }
        }

        CurveResult {
            points,
            end_direction: heading,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::math::{Disc, Point2};

    use super::super::{CurveGenerator, DisplacementRange, EllipseParams, Pose};

    const TOL: f64 = 1e-6;

    fn generator(radius: f64) -> CurveGenerator {
        CurveGenerator::new(Disc::new(Point2::origin(), radius).unwrap())
    }

    fn segment_lengths(points: &[Point2]) -> Vec<f64> {
        points.windows(2).map(|w| (w[1] - w[0]).norm()).collect()
    }

    #[test]
    fn open_walk_exhausts_the_turn_budget() {
        let g = generator(1.0e6);
        let pose = Pose::new(Point2::origin(), 0.0, 1);
        let params = EllipseParams {
            max_deflection: 3,
            displacement: DisplacementRange {
                min: 1.0,
                start: 10.0,
                delta: 1.0,
            },
            closed: false,
        };
        let curve = g.generate_ellipse(&pose, &params);
        // Three growth steps at displacements 9, 8, 7 and turns 1, 2, 3.
        assert_eq!(curve.points.len(), 4);
        let lengths = segment_lengths(&curve.points);
        for (got, want) in lengths.iter().zip([9.0, 8.0, 7.0]) {
            assert!((got - want).abs() < TOL, "length {got} expected {want}");
        }
        assert!((curve.end_direction - 6.0).abs() < TOL);
    }

    #[test]
    fn closed_walk_interleaves_mirror_fragments() {
        let g = generator(1.0e6);
        let pose = Pose::new(Point2::origin(), 0.0, 1);
        let params = EllipseParams {
            max_deflection: 3,
            displacement: DisplacementRange {
                min: 1.0,
                start: 10.0,
                delta: 1.0,
            },
            closed: true,
        };
        let curve = g.generate_ellipse(&pose, &params);
        // Mirror passes of 0, 1, and 2 steps follow the three growth
        // steps: 1 + 3 + (0 + 1 + 2) vertices.
        assert_eq!(curve.points.len(), 7);
        let lengths = segment_lengths(&curve.points);
        for (got, want) in lengths.iter().zip([9.0, 8.0, 9.0, 7.0, 8.0, 9.0]) {
            assert!((got - want).abs() < TOL, "length {got} expected {want}");
        }
        // Growth turned +1+2+3, mirrors turned back -1 and -2-1.
        assert!((curve.end_direction - 2.0).abs() < TOL);
    }

    #[test]
    fn stops_at_the_displacement_floor() {
        let g = generator(1.0e6);
        let pose = Pose::new(Point2::origin(), 0.0, 1);
        let params = EllipseParams {
            max_deflection: 100,
            displacement: DisplacementRange {
                min: 5.0,
                start: 8.0,
                delta: 2.0,
            },
            closed: false,
        };
        let curve = g.generate_ellipse(&pose, &params);
        // Displacements 6 then 4; 4 is below the floor, so the loop exits.
        assert_eq!(curve.points.len(), 3);
        let lengths = segment_lengths(&curve.points);
        assert!((lengths[0] - 6.0).abs() < TOL);
        assert!((lengths[1] - 4.0).abs() < TOL);
    }

    #[test]
    fn floor_at_or_above_start_yields_only_the_seed() {
        // The random-mode distributions routinely sample a floor above the
        // starting displacement; the walk must degenerate to its seed.
        let g = generator(1.0e6);
        let pose = Pose::new(Point2::new(4.0, 5.0), 90.0, -1);
        let params = EllipseParams {
            max_deflection: 5,
            displacement: DisplacementRange {
                min: 30.0,
                start: 6.0,
                delta: 1.0,
            },
            closed: true,
        };
        let curve = g.generate_ellipse(&pose, &params);
        assert_eq!(curve.points.len(), 1);
        assert!((curve.points[0] - pose.point).norm() < TOL);
        assert!((curve.end_direction - 90.0).abs() < TOL);
    }

    #[test]
    fn returns_early_when_the_pen_leaves_the_disc() {
        // The first step lands outside r=10, so the second iteration's
        // containment check ends the walk with two vertices.
        let g = generator(10.0);
        let pose = Pose::new(Point2::origin(), 0.0, 1);
        let params = EllipseParams {
            max_deflection: 100,
            displacement: DisplacementRange {
                min: 1.0,
                start: 30.0,
                delta: 1.0,
            },
            closed: false,
        };
        let curve = g.generate_ellipse(&pose, &params);
        assert_eq!(curve.points.len(), 2);
        assert!((curve.end_direction - 1.0).abs() < TOL);
    }

    #[test]
    fn interior_vertices_stay_strictly_inside() {
        let g = generator(25.0);
        let pose = Pose::new(Point2::new(-20.0, 0.0), 10.0, 1);
        let params = EllipseParams {
            max_deflection: 40,
            displacement: DisplacementRange {
                min: 1.0,
                start: 14.0,
                delta: 0.25,
            },
            closed: true,
        };
        let curve = g.generate_ellipse(&pose, &params);
        assert!(curve.points.len() >= 2);
        let disc = g.disc();
        for p in &curve.points[1..curve.points.len() - 1] {
            assert!(disc.contains(*p), "interior vertex escaped: {p}");
        }
    }

    #[test]
    fn handedness_mirrors_the_figure() {
        let g = generator(1.0e6);
        let params = EllipseParams {
            max_deflection: 4,
            displacement: DisplacementRange {
                min: 1.0,
                start: 12.0,
                delta: 1.0,
            },
            closed: true,
        };
        let left = g.generate_ellipse(&Pose::new(Point2::origin(), 0.0, 1), &params);
        let right = g.generate_ellipse(&Pose::new(Point2::origin(), 0.0, -1), &params);
        assert_eq!(left.points.len(), right.points.len());
        // Reflection across the launch axis: same x, negated y.
        for (l, r) in left.points.iter().zip(&right.points) {
            assert!((l.x - r.x).abs() < TOL);
            assert!((l.y + r.y).abs() < TOL);
        }
    }
}
