// Touch gesture state for the document-wide swipe detector.

/// Minimum vertical travel (px) before a touch counts as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Up,
}

#[derive(Default, Debug, Clone)]
pub struct TouchState {
    start_x: f64,
    start_y: f64,
    active: bool,
}

impl TouchState {
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start_x = x;
        self.start_y = y;
        self.active = true;
    }

    /// Classify the gesture ending at (`end_x`, `end_y`) and reset. A finish
    /// without a recorded start yields nothing. Only a vertically-dominant
    /// upward move past the threshold counts.
    pub fn finish(&mut self, end_x: f64, end_y: f64) -> Option<Swipe> {
        if !self.active {
            return None;
        }
        let diff_y = self.start_y - end_y;
        let diff_x = self.start_x - end_x;
        *self = Self::default();
        if diff_y.abs() > diff_x.abs() && diff_y > SWIPE_THRESHOLD_PX {
            Some(Swipe::Up)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upward_swipe_is_detected() {
        let mut touch = TouchState::default();
        touch.begin(100.0, 400.0);
        assert_eq!(touch.finish(110.0, 300.0), Some(Swipe::Up));
    }

    #[test]
    fn downward_move_is_ignored() {
        let mut touch = TouchState::default();
        touch.begin(100.0, 100.0);
        assert_eq!(touch.finish(100.0, 400.0), None);
    }

    #[test]
    fn horizontally_dominant_move_is_ignored() {
        let mut touch = TouchState::default();
        touch.begin(300.0, 400.0);
        assert_eq!(touch.finish(100.0, 320.0), None);
    }

    #[test]
    fn short_flick_is_ignored() {
        let mut touch = TouchState::default();
        touch.begin(100.0, 400.0);
        assert_eq!(touch.finish(100.0, 360.0), None);
    }

    #[test]
    fn finish_without_start_is_ignored() {
        let mut touch = TouchState::default();
        assert_eq!(touch.finish(100.0, 0.0), None);
    }

    #[test]
    fn state_resets_after_finish() {
        let mut touch = TouchState::default();
        touch.begin(100.0, 400.0);
        assert_eq!(touch.finish(100.0, 200.0), Some(Swipe::Up));
        // Second finish with no new start must not re-report.
        assert_eq!(touch.finish(100.0, 0.0), None);
    }
}
