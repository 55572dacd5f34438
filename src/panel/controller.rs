use std::time::{Duration, Instant};

use super::animation::PanelAnimation;

/// Duration of every open/close tween
pub const PANEL_ANIMATION_DURATION: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Open,
}

pub struct PanelController {
    animation: PanelAnimation,
    row_height: f32,
    horizontal: bool,
    max_visible_rows: Option<usize>,
}

impl PanelController {
    pub fn new(row_height: f32, horizontal: bool, max_visible_rows: Option<usize>) -> Self {
        Self {
            animation: PanelAnimation::at_rest(0.0, Instant::now()),
            row_height,
            horizontal,
            max_visible_rows,
        }
    }

    pub fn state(&self) -> PanelState {
        if self.animation.target() > 0.0 {
            PanelState::Open
        } else {
            PanelState::Closed
        }
    }

    /// Height the panel is heading toward
    pub fn target(&self) -> f32 {
        self.animation.target()
    }

    pub fn height_at(&self, now: Instant) -> f32 {
        self.animation.value_at(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.animation.is_running(now)
    }

    pub fn open(&mut self, height: Option<f32>) {
        self.open_at(height, Instant::now());
    }

    /// Animate toward `height`, or one row when no usable height is given
    pub fn open_at(&mut self, height: Option<f32>, now: Instant) {
        let target = height.filter(|h| *h > 0.0).unwrap_or(self.row_height);
        self.animation.retarget(target, PANEL_ANIMATION_DURATION, now);
    }

    pub fn close(&mut self) {
        self.close_at(Instant::now());
    }

    pub fn close_at(&mut self, now: Instant) {
        self.animation.retarget(0.0, PANEL_ANIMATION_DURATION, now);
    }

    /// Panel height for `count` suggestions in vertical layout.
    ///
    /// Horizontal panels keep their single-row height, so this is `None`
    /// for them. The row count is capped by `max_visible_rows` when set.
    pub fn height_for_rows(&self, count: usize) -> Option<f32> {
        if self.horizontal {
            return None;
        }
        let rows = self.max_visible_rows.map_or(count, |max| count.min(max));
        Some(rows as f32 * self.row_height)
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
