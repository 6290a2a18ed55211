//! Math behind the visibility-gated counters on the About section.

/// Intersection ratio that arms the counter animation.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;
/// Default animation length.
pub const DEFAULT_DURATION_MS: u32 = 2_000;
/// Sampling tick, roughly one animation frame.
pub const FRAME_MS: u32 = 16;

/// Ease-out quadratic: f(t) = t(2 - t) on [0, 1].
pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

/// Counter value at `elapsed_ms` into the animation: eased progress
/// scaled to `end` and floored, so the display only ever shows whole
/// numbers and finishes at exactly `end`.
pub fn sample_count(end: u32, duration_ms: u32, elapsed_ms: f64) -> u32 {
    if duration_ms == 0 {
        return end;
    }
    let progress = (elapsed_ms / duration_ms as f64).clamp(0.0, 1.0);
    (ease_out_quad(progress) * end as f64).floor() as u32
}

/// One-shot trigger for the animation. Arms on the first visible report
/// and never again, no matter how visibility flips afterwards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CounterLatch {
    armed: bool,
}

impl CounterLatch {
    /// Feeds one visibility report. Returns true exactly once, when the
    /// first visible report arms the latch.
    pub fn arm(&mut self, visible: bool) -> bool {
        if visible && !self.armed {
            self.armed = true;
            true
        } else {
            false
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_finishes_exactly_at_end() {
        assert_eq!(sample_count(25, 2_000, 0.0), 0);
        assert_eq!(sample_count(25, 2_000, 2_000.0), 25);
        // Past the duration it stays pinned at end.
        assert_eq!(sample_count(25, 2_000, 10_000.0), 25);
    }

    #[test]
    fn easing_front_loads_the_motion() {
        // At the halfway point the eased value is 75% of the target.
        assert_eq!(sample_count(100, 2_000, 1_000.0), 75);
        assert_eq!(sample_count(25, 2_000, 1_000.0), 18); // floor(18.75)
    }

    #[test]
    fn samples_are_monotonic() {
        let mut last = 0;
        for ms in (0..=2_000).step_by(16) {
            let value = sample_count(50, 2_000, ms as f64);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn zero_duration_jumps_straight_to_end() {
        assert_eq!(sample_count(50, 0, 0.0), 50);
    }

    #[test]
    fn negative_elapsed_clamps_to_zero() {
        assert_eq!(sample_count(50, 2_000, -5.0), 0);
    }

    #[test]
    fn latch_arms_exactly_once() {
        let mut latch = CounterLatch::default();
        assert!(!latch.arm(false));
        assert!(!latch.is_armed());

        assert!(latch.arm(true));
        assert!(latch.is_armed());

        // Scrolling the element out and back in never restarts it.
        assert!(!latch.arm(true));
        assert!(!latch.arm(false));
        assert!(!latch.arm(true));
        assert!(latch.is_armed());
    }
}
