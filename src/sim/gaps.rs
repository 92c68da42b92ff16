//! Rolling window of gated obstacles
//!
//! The window is a fixed arena of [`GAP_COUNT`] slots. Slots are never added or
//! removed: once a gap scrolls behind the player it is moved to the frontier
//! and given a fresh opening.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::GAP_COUNT;
use crate::tuning::Tuning;

/// One obstacle: a top and a bottom pipe around a vertical opening
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    /// Horizontal centre in world space
    pub center_x: f32,
    /// Vertical centre of the opening
    pub center_y: f32,
    /// Frames of shaking left (only `> 0` is meaningful)
    pub shake_timer: i32,
    pub top_shaking: bool,
    pub bottom_shaking: bool,
}

impl Gap {
    fn spawn(center_x: f32, center_y: f32) -> Self {
        Self {
            center_x,
            center_y,
            ..Default::default()
        }
    }

    /// Left edge of the pipe collision rectangles in screen space
    fn collision_left(&self, scroll_x: f32, tuning: &Tuning) -> f32 {
        self.center_x - tuning.obstacle_half_width() - scroll_x + tuning.obstacle_inset
    }

    /// Collision rectangle of the upper pipe, from the screen top to the opening
    pub fn top_rect(&self, scroll_x: f32, tuning: &Tuning) -> Rect {
        let left = self.collision_left(scroll_x, tuning);
        Rect::new(
            left,
            0.0,
            left + tuning.obstacle_width - 2.0 * tuning.obstacle_inset,
            self.center_y - tuning.gap_height / 2.0 - tuning.gap_inset,
        )
    }

    /// Collision rectangle of the lower pipe, from the opening to the screen bottom
    pub fn bottom_rect(&self, scroll_x: f32, tuning: &Tuning) -> Rect {
        let left = self.collision_left(scroll_x, tuning);
        Rect::new(
            left,
            self.center_y + tuning.gap_height / 2.0 + tuning.gap_inset,
            left + tuning.obstacle_width - 2.0 * tuning.obstacle_inset,
            tuning.screen_height,
        )
    }

    /// True while the pipe shake animation is running
    #[inline]
    pub fn is_shaking(&self) -> bool {
        self.shake_timer > 0
    }
}

/// Fixed-size window of gaps ahead of the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapWindow {
    gaps: [Gap; GAP_COUNT],
    /// World x of the next recycled gap
    next_spawn_x: f32,
    spacing: f32,
    /// `(top, bottom)` range for random opening centres
    band: (f32, f32),
}

impl GapWindow {
    /// Place all gaps, `gap_spacing` apart, starting at `first_gap_x`
    pub fn new<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> Self {
        let mut window = Self {
            gaps: [Gap::default(); GAP_COUNT],
            next_spawn_x: tuning.first_gap_x,
            spacing: tuning.gap_spacing,
            band: tuning.gap_band(),
        };
        for i in 0..GAP_COUNT {
            window.respawn(i, rng);
        }
        window
    }

    /// Move slot `index` to the frontier with a fresh opening
    fn respawn<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) {
        let (top, bottom) = self.band;
        self.gaps[index] = Gap::spawn(self.next_spawn_x, rng.random_range(top..bottom));
        self.next_spawn_x += self.spacing;
    }

    /// Recycle every gap that has scrolled fully off the left edge
    ///
    /// Returns how many gaps were recycled; each one is worth a point.
    pub fn advance<R: Rng + ?Sized>(&mut self, scroll_x: f32, half_width: f32, rng: &mut R) -> u32 {
        let mut recycled = 0;
        for i in 0..GAP_COUNT {
            if self.gaps[i].center_x - scroll_x < -half_width {
                log::debug!(
                    "Recycling gap {} at x={} -> {}",
                    i,
                    self.gaps[i].center_x,
                    self.next_spawn_x
                );
                self.respawn(i, rng);
                recycled += 1;
            }
        }
        recycled
    }

    /// Count every shake timer down by one frame
    pub fn tick_shake(&mut self) {
        for gap in &mut self.gaps {
            gap.shake_timer = gap.shake_timer.saturating_sub(1);
        }
    }

    /// Start shaking the hit segments of gap `index`
    pub fn mark_hit(&mut self, index: usize, top: bool, bottom: bool, frames: i32) {
        let gap = &mut self.gaps[index];
        gap.top_shaking = top;
        gap.bottom_shaking = bottom;
        gap.shake_timer = frames;
    }

    #[inline]
    pub fn gaps(&self) -> &[Gap] {
        &self.gaps
    }

    #[inline]
    pub fn next_spawn_x(&self) -> f32 {
        self.next_spawn_x
    }

    #[cfg(test)]
    pub(crate) fn gaps_mut(&mut self) -> &mut [Gap; GAP_COUNT] {
        &mut self.gaps
    }
}
