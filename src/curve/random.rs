use rand::Rng;

use super::{ArcParams, CurveSpec, DisplacementRange, EllipseParams};

/// Samples the curl direction for random mode.
///
/// The sample space is {-1, 0, +1}; zero degenerates the arc walk to a
/// straight line.
pub fn random_handedness<R: Rng>(rng: &mut R) -> i32 {
    rng.random_range(-1..=1)
}

/// Samples a curve kind together with its parameter bundle.
pub fn random_spec<R: Rng>(rng: &mut R) -> CurveSpec {
    if rng.random_bool(0.5) {
        CurveSpec::Arc(random_arc_params(rng))
    } else {
        CurveSpec::Ellipse(random_ellipse_params(rng))
    }
}

fn random_arc_params<R: Rng>(rng: &mut R) -> ArcParams {
    ArcParams {
        deflection: rng.random_range(1..=5),
        step_length: f64::from(rng.random_range(3..=10_i32)),
        n_steps: rng.random_range(30..=70),
    }
}

fn random_ellipse_params<R: Rng>(rng: &mut R) -> EllipseParams {
    EllipseParams {
        max_deflection: rng.random_range(1..=5),
        // The floor usually lands above the start, collapsing the walk
        // to its seed vertex.
        displacement: DisplacementRange {
            min: f64::from(rng.random_range(20..=50_i32)),
            start: f64::from(rng.random_range(4..=7_i32)),
            delta: f64::from(rng.random_range(1..=2_i32)),
        },
        closed: rng.random_bool(0.5),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn handedness_samples_cover_the_three_values() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let h = random_handedness(&mut rng);
            assert!((-1..=1).contains(&h), "handedness out of range: {h}");
            #[allow(clippy::cast_sign_loss)]
            {
                seen[(h + 1) as usize] = true;
            }
        }
        assert!(seen.iter().all(|s| *s), "a handedness value never came up");
    }

    #[test]
    fn sampled_parameters_stay_in_their_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut arcs = 0_u32;
        let mut ellipses = 0_u32;
        for _ in 0..400 {
            match random_spec(&mut rng) {
                CurveSpec::Arc(p) => {
                    arcs += 1;
                    assert!((1..=5).contains(&p.deflection));
                    assert!((3.0..=10.0).contains(&p.step_length));
                    assert!((30..=70).contains(&p.n_steps));
                }
                CurveSpec::Ellipse(p) => {
                    ellipses += 1;
                    assert!((1..=5).contains(&p.max_deflection));
                    assert!((20.0..=50.0).contains(&p.displacement.min));
                    assert!((4.0..=7.0).contains(&p.displacement.start));
                    assert!((1.0..=2.0).contains(&p.displacement.delta));
                }
            }
        }
        assert!(arcs > 0, "no arc specs sampled");
        assert!(ellipses > 0, "no ellipse specs sampled");
    }
}
