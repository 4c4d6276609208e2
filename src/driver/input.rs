/// Detects cursor motion between input polls.
///
/// The first observed position only records a baseline; any later,
/// different position reports motion. The saver treats motion as its
/// quit signal, so the watch is the whole input layer.
#[derive(Debug, Default)]
pub struct MouseWatch {
    previous: Option<(f64, f64)>,
}

impl MouseWatch {
    /// Creates a watch with no baseline yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Observes the current cursor position, returning whether it moved
    /// since the previous observation.
    pub fn moved(&mut self, current: (f64, f64)) -> bool {
        let moved = match self.previous {
            Some(previous) => (previous.0 - current.0).abs() > f64::EPSILON
                || (previous.1 - current.1).abs() > f64::EPSILON,
            None => false,
        };
        self.previous = Some(current);
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_is_a_baseline() {
        let mut watch = MouseWatch::new();
        assert!(!watch.moved((100.0, 200.0)));
    }

    #[test]
    fn same_position_does_not_report_motion() {
        let mut watch = MouseWatch::new();
        assert!(!watch.moved((100.0, 200.0)));
        assert!(!watch.moved((100.0, 200.0)));
    }

    #[test]
    fn changed_position_reports_motion_on_the_second_poll() {
        let mut watch = MouseWatch::new();
        assert!(!watch.moved((100.0, 200.0)));
        assert!(watch.moved((101.0, 200.0)));
    }

    #[test]
    fn motion_resets_the_baseline() {
        let mut watch = MouseWatch::new();
        assert!(!watch.moved((0.0, 0.0)));
        assert!(watch.moved((5.0, 5.0)));
        assert!(!watch.moved((5.0, 5.0)));
    }
}
