//! Flight physics for the player
//!
//! World x grows with scrolling; the player is drawn at a fixed screen column
//! so `pos.x` doubles as the scroll offset of the whole playfield.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Circle;
use super::lifecycle::LifeState;
use crate::tuning::Tuning;

/// The player-controlled flyer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// `x` is the scroll distance, `y` the top of the sprite in screen space
    pub pos: Vec2,
    pub vel: Vec2,
    /// Smoothed rotation used for drawing
    pub rotation: f32,
    pub target_rotation: f32,
    pub life: LifeState,
    /// Died from hitting the ceiling
    pub bump_on_head: bool,
    /// Current wing animation frame
    pub animation_index: usize,
    /// Frames until the next wing frame
    pub next_flap_in: i32,
}

impl Player {
    /// Fresh player at the start of a run (already moving up and right)
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(0.0, tuning.start_y),
            vel: Vec2::new(tuning.scroll_speed, tuning.flap_impulse),
            rotation: 0.0,
            target_rotation: 0.0,
            life: LifeState::Alive,
            bump_on_head: false,
            animation_index: 0,
            next_flap_in: 0,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life.is_alive()
    }

    /// Kick upward. Ignored once dead.
    pub fn flap(&mut self, tuning: &Tuning) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.vel.y = tuning.flap_impulse;
        self.next_flap_in = 0;
        true
    }

    /// Integrate one frame of motion
    pub fn integrate(&mut self, tuning: &Tuning) {
        self.pace_wings(tuning);

        if !self.is_alive() && self.vel.x > 0.0 {
            self.vel.x = (self.vel.x - tuning.death_deceleration).max(0.0);
        }
        self.pos.x += self.vel.x;

        self.vel.y += tuning.gravity;
        self.pos.y += self.vel.y;
    }

    /// Advance the wing animation; faster upward motion flaps faster
    fn pace_wings(&mut self, tuning: &Tuning) {
        self.next_flap_in -= 1;
        if self.next_flap_in <= 0 {
            self.next_flap_in = flap_interval(self.vel.y, tuning);
            self.animation_index = (self.animation_index + 1) % tuning.animation_frames;
        }
    }

    /// Low-pass the drawn rotation toward the velocity-derived target
    pub fn settle_rotation(&mut self, tuning: &Tuning) {
        self.target_rotation = self.vel.y * tuning.rotation_factor;
        self.rotation = 0.5 * self.target_rotation + 0.5 * self.rotation;
    }

    /// Collision circle centred on the sprite, in screen space
    pub fn collision_circle(&self, tuning: &Tuning) -> Circle {
        let center = Vec2::new(
            tuning.player_screen_x + tuning.player_size.x / 2.0,
            self.pos.y + tuning.player_size.y / 2.0,
        );
        Circle::new(center, tuning.collision_radius)
    }
}

/// Frames between wing beats for a given vertical speed
///
/// Interpolates between `min_flap_frames` (at the flap impulse) and
/// `max_flap_frames` (at `slowest_flap_speed`). Speeds outside that range
/// extrapolate, as the countdown only needs to be an integer.
pub fn flap_interval(vel_y: f32, tuning: &Tuning) -> i32 {
    let relative =
        (vel_y - tuning.flap_impulse) / (tuning.slowest_flap_speed - tuning.flap_impulse);
    let span = (tuning.max_flap_frames - tuning.min_flap_frames) as f32;
    (tuning.min_flap_frames as f32 + relative * span).round() as i32
}
