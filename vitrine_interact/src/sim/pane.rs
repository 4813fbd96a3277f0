// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::host::ScrollPane;

/// Scroll pane with exponential ease-out toward a clamped target.
///
/// Each [`tick`](Self::tick) closes a fixed fraction of the remaining
/// distance; the offset snaps to the target once it is within half a unit.
#[derive(Clone, Debug)]
pub struct SmoothScrollPane {
    offset: f64,
    target: f64,
    content_height: f64,
    viewport_height: f64,
    speed: f64,
}

impl SmoothScrollPane {
    /// Default fraction of the remaining distance covered per tick.
    pub const DEFAULT_SPEED: f64 = 0.3;

    /// Pane at offset zero.
    pub fn new(content_height: f64, viewport_height: f64) -> Self {
        Self {
            offset: 0.0,
            target: 0.0,
            content_height,
            viewport_height,
            speed: Self::DEFAULT_SPEED,
        }
    }

    /// Replace the easing speed, clamped to `[0.05, 1.0]`.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed.clamp(0.05, 1.0);
        self
    }

    /// Largest reachable offset.
    pub fn max_offset(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Where the current animation is heading.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Whether the offset is still moving.
    pub fn is_animating(&self) -> bool {
        self.offset != self.target
    }

    /// Move instantly, e.g. for a user wheel scroll. Cancels any animation.
    pub fn jump_to(&mut self, offset: f64) -> f64 {
        self.offset = self.clamp(offset);
        self.target = self.offset;
        self.offset
    }

    /// Advance the animation by one frame. Returns the new offset if it moved.
    pub fn tick(&mut self) -> Option<f64> {
        if !self.is_animating() {
            return None;
        }
        self.offset += (self.target - self.offset) * self.speed;
        if (self.target - self.offset).abs() < 0.5 {
            self.offset = self.target;
        }
        Some(self.offset)
    }

    /// Tick until the pane rests or `max_ticks` frames ran. Returns every
    /// intermediate offset.
    pub fn run(&mut self, max_ticks: usize) -> Vec<f64> {
        (0..max_ticks).map_while(|_| self.tick()).collect()
    }

    /// Change the visible height, re-clamping offset and target.
    pub fn set_viewport_height(&mut self, viewport_height: f64) {
        self.viewport_height = viewport_height;
        self.offset = self.clamp(self.offset);
        self.target = self.clamp(self.target);
    }

    fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_offset())
    }
}

impl ScrollPane for SmoothScrollPane {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn animate_to(&mut self, offset: f64) {
        self.target = self.clamp(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_out_and_settles() {
        let mut p = SmoothScrollPane::new(3000.0, 800.0);
        p.animate_to(1000.0);
        let steps = p.run(200);
        assert!(steps.len() > 3);
        assert!(steps.windows(2).all(|w| w[0] < w[1]));
        // Each step covers less distance than the one before.
        assert!(steps[1] - steps[0] < steps[0]);
        assert_eq!(p.scroll_offset(), 1000.0);
        assert!(!p.is_animating());
        assert_eq!(p.tick(), None);
    }

    #[test]
    fn targets_are_clamped() {
        let mut p = SmoothScrollPane::new(3000.0, 800.0);
        p.animate_to(10_000.0);
        assert_eq!(p.target(), 2200.0);
        assert_eq!(p.jump_to(-50.0), 0.0);
        assert!(!p.is_animating());
    }

    #[test]
    fn short_content_does_not_scroll() {
        let mut p = SmoothScrollPane::new(400.0, 800.0);
        p.animate_to(300.0);
        assert!(p.run(10).is_empty());
        assert_eq!(p.scroll_offset(), 0.0);
    }
}
