use std::time::Duration;

use tracing::trace;

use crate::constants::MAX_FRAME_DELTA;

/// Timestamps of the previous frame and the previous world update.
///
/// The two are tracked separately: frames keep running while overlays pause the world,
/// so the update delta spans the whole pause.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameTimer {
    last_frame: Option<Duration>,
    last_update: Option<Duration>,
}

impl FrameTimer {
    /// Time since the previous frame, clamped to [`MAX_FRAME_DELTA`].
    pub fn frame_delta(&mut self, now: Duration) -> Duration {
        let delta = Self::delta(self.last_frame.replace(now), now);
        if delta > MAX_FRAME_DELTA {
            trace!(delta = ?delta, "Clamping frame delta");
            return MAX_FRAME_DELTA;
        }
        delta
    }

    /// Time since the previous world update. Zero for the first update.
    pub fn update_delta(&mut self, now: Duration) -> Duration {
        Self::delta(self.last_update.replace(now), now)
    }

    /// Restarts both clocks at `now`, so the next deltas do not include time spent hidden.
    pub fn resync(&mut self, now: Duration) {
        self.last_frame = Some(now);
        self.last_update = Some(now);
    }

    fn delta(previous: Option<Duration>, now: Duration) -> Duration {
        previous.map_or(Duration::ZERO, |previous| now.saturating_sub(previous))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_delta_is_clamped() {
        let mut timer = FrameTimer::default();
        assert_eq!(timer.frame_delta(Duration::from_millis(1000)), Duration::ZERO);
        assert_eq!(timer.frame_delta(Duration::from_millis(1016)), Duration::from_millis(16));
        assert_eq!(timer.frame_delta(Duration::from_millis(5000)), MAX_FRAME_DELTA);
    }

    #[test]
    fn test_update_delta_is_independent() {
        let mut timer = FrameTimer::default();
        timer.frame_delta(Duration::from_millis(0));
        assert_eq!(timer.update_delta(Duration::from_millis(0)), Duration::ZERO);

        timer.frame_delta(Duration::from_millis(16));
        timer.frame_delta(Duration::from_millis(32));
        assert_eq!(timer.update_delta(Duration::from_millis(48)), Duration::from_millis(48));
    }

    #[test]
    fn test_resync() {
        let mut timer = FrameTimer::default();
        timer.frame_delta(Duration::from_secs(1));
        timer.update_delta(Duration::from_secs(1));

        timer.resync(Duration::from_secs(60));
        assert_eq!(timer.frame_delta(Duration::from_millis(60_010)), Duration::from_millis(10));
        assert_eq!(timer.update_delta(Duration::from_millis(60_010)), Duration::from_millis(10));
    }
}
