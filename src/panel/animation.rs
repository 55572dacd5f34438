use std::time::{Duration, Instant};

/// A single in-flight interpolation between two heights.
///
/// There is never more than one tween: `retarget` replaces the current one
/// with a new tween that starts from whatever value is displayed right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelAnimation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl PanelAnimation {
    /// A finished animation resting at `value`
    pub fn at_rest(value: f32, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            started: now,
            duration: Duration::ZERO,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Displayed value at `now`
    pub fn value_at(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        self.from + (self.to - self.from) * ease_in_out(progress)
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }

    /// Cancel the current tween and start a new one toward `to` from the
    /// value displayed at `now`.
    pub fn retarget(&mut self, to: f32, duration: Duration, now: Instant) {
        let from = self.value_at(now);
        *self = Self {
            from,
            to,
            started: now,
            duration,
        };
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

/// Cubic ease-in-out over `t` in `[0, 1]`
fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
#[path = "animation_tests.rs"]
mod animation_tests;
