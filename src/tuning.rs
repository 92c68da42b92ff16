//! Data-driven gameplay constants
//!
//! Every number the simulation uses lives in [`Tuning`]. Defaults come from
//! [`crate::consts`]; a JSON document may override any subset of fields.
//! Values are validated once, up front, so the frame loop never has to.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Reasons a [`Tuning`] is rejected
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    /// The JSON document could not be parsed
    Parse(String),
    /// A field is infinite or NaN
    NonFinite(&'static str),
    /// Screen width or height is not positive
    ScreenSize { width: f32, height: f32 },
    /// Collision radius is not positive
    CollisionRadius(f32),
    /// The band gap centres are drawn from is empty
    EmptyGapBand { top: f32, bottom: f32 },
    /// Gap spacing is not positive
    GapSpacing(f32),
    /// Obstacle width is not positive, or the insets swallow it
    ObstacleWidth { width: f32, inset: f32 },
    /// Flap pacing bounds are out of order or the reference speeds coincide
    FlapPacing,
    /// No wing animation frames
    AnimationFrames,
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "invalid tuning document: {msg}"),
            Self::NonFinite(field) => write!(f, "{field} must be a finite number"),
            Self::ScreenSize { width, height } => {
                write!(f, "screen size must be positive, got {width}x{height}")
            }
            Self::CollisionRadius(r) => write!(f, "collision radius must be positive, got {r}"),
            Self::EmptyGapBand { top, bottom } => {
                write!(f, "gap centre band is empty ({top}..{bottom})")
            }
            Self::GapSpacing(s) => write!(f, "gap spacing must be positive, got {s}"),
            Self::ObstacleWidth { width, inset } => {
                write!(f, "obstacle width {width} too small for inset {inset}")
            }
            Self::FlapPacing => write!(f, "flap pacing bounds are inconsistent"),
            Self::AnimationFrames => write!(f, "at least one wing animation frame is required"),
        }
    }
}

impl std::error::Error for TuningError {}

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Flight ===
    pub gravity: f32,
    pub flap_impulse: f32,
    pub scroll_speed: f32,
    pub death_deceleration: f32,
    /// Target rotation per unit of vertical velocity
    pub rotation_factor: f32,

    // === Player ===
    pub start_y: f32,
    pub player_screen_x: f32,
    pub player_size: Vec2,
    pub collision_radius: f32,

    // === Boundaries ===
    pub ceiling_y: f32,
    pub floor_margin: f32,
    pub floor_rebound: f32,
    /// Restartable once `y > restart_depth * screen_height`
    pub restart_depth: f32,

    // === Gaps ===
    pub gap_height: f32,
    pub gap_spacing: f32,
    pub first_gap_x: f32,
    pub obstacle_width: f32,
    /// Horizontal shrink of each pipe's collision rectangle, per side
    pub obstacle_inset: f32,
    /// Extra clearance between the gap opening and the pipe rectangles
    pub gap_inset: f32,
    pub min_visible_segment: f32,
    pub shake_frames: i32,

    // === Wing animation ===
    pub animation_frames: usize,
    pub slowest_flap_speed: f32,
    pub min_flap_frames: i32,
    pub max_flap_frames: i32,

    // === Event pacing ===
    pub flap_sound_cooldown: i32,
    pub ceiling_death_sound_delay: u32,
    pub floor_death_sound_delay: u32,
    pub pipe_death_sound_delay: u32,
    pub score_pulse_decay: f32,
    pub cursor_hide_frames: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            scroll_speed: SCROLL_SPEED,
            death_deceleration: DEATH_DECELERATION,
            rotation_factor: 1.5,

            start_y: START_Y,
            player_screen_x: PLAYER_SCREEN_X,
            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            collision_radius: COLLISION_RADIUS,

            ceiling_y: CEILING_Y,
            floor_margin: FLOOR_MARGIN,
            floor_rebound: FLOOR_REBOUND,
            restart_depth: 3.0,

            gap_height: GAP_HEIGHT,
            gap_spacing: GAP_SPACING,
            first_gap_x: FIRST_GAP_X,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_inset: 5.0,
            gap_inset: 2.0,
            min_visible_segment: MIN_VISIBLE_SEGMENT,
            shake_frames: SHAKE_FRAMES,

            animation_frames: 4,
            slowest_flap_speed: 10.0,
            min_flap_frames: 1,
            max_flap_frames: 10,

            flap_sound_cooldown: 30,
            ceiling_death_sound_delay: 30,
            floor_death_sound_delay: 60,
            pipe_death_sound_delay: 25,
            score_pulse_decay: 0.05,
            cursor_hide_frames: 120,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON document and validate the result
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        if let Some((field, _)) = self.float_fields().into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(TuningError::NonFinite(field));
        }
        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            return Err(TuningError::ScreenSize {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if self.collision_radius <= 0.0 {
            return Err(TuningError::CollisionRadius(self.collision_radius));
        }
        let (top, bottom) = self.gap_band();
        if !top.is_finite() || !bottom.is_finite() || top >= bottom {
            return Err(TuningError::EmptyGapBand { top, bottom });
        }
        if self.gap_spacing <= 0.0 {
            return Err(TuningError::GapSpacing(self.gap_spacing));
        }
        if self.obstacle_width <= 2.0 * self.obstacle_inset {
            return Err(TuningError::ObstacleWidth {
                width: self.obstacle_width,
                inset: self.obstacle_inset,
            });
        }
        if self.min_flap_frames > self.max_flap_frames
            || self.min_flap_frames < 0
            || self.slowest_flap_speed == self.flap_impulse
        {
            return Err(TuningError::FlapPacing);
        }
        if self.animation_frames == 0 {
            return Err(TuningError::AnimationFrames);
        }
        if !self.restart_y().is_finite() {
            return Err(TuningError::NonFinite("restart_depth"));
        }
        Ok(())
    }

    fn float_fields(&self) -> [(&'static str, f32); 25] {
        [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("gravity", self.gravity),
            ("flap_impulse", self.flap_impulse),
            ("scroll_speed", self.scroll_speed),
            ("death_deceleration", self.death_deceleration),
            ("rotation_factor", self.rotation_factor),
            ("start_y", self.start_y),
            ("player_screen_x", self.player_screen_x),
            ("player_size.x", self.player_size.x),
            ("player_size.y", self.player_size.y),
            ("collision_radius", self.collision_radius),
            ("ceiling_y", self.ceiling_y),
            ("floor_margin", self.floor_margin),
            ("floor_rebound", self.floor_rebound),
            ("restart_depth", self.restart_depth),
            ("gap_height", self.gap_height),
            ("gap_spacing", self.gap_spacing),
            ("first_gap_x", self.first_gap_x),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_inset", self.obstacle_inset),
            ("gap_inset", self.gap_inset),
            ("min_visible_segment", self.min_visible_segment),
            ("slowest_flap_speed", self.slowest_flap_speed),
            ("score_pulse_decay", self.score_pulse_decay),
        ]
    }

    /// Range (`top..bottom`) that gap centres are drawn from
    pub fn gap_band(&self) -> (f32, f32) {
        let half = self.gap_height / 2.0;
        (
            half + self.min_visible_segment,
            self.screen_height - half - self.min_visible_segment,
        )
    }

    /// Height at which the player hits the floor
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.screen_height - self.floor_margin
    }

    /// Height below which the run may be restarted
    #[inline]
    pub fn restart_y(&self) -> f32 {
        self.restart_depth * self.screen_height
    }

    #[inline]
    pub fn obstacle_half_width(&self) -> f32 {
        self.obstacle_width / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_gap_band() {
        let (top, bottom) = Tuning::default().gap_band();
        assert_eq!(top, 230.0);
        assert_eq!(bottom, 570.0);
    }

    #[test]
    fn test_partial_json_overrides() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.75, "gap_spacing": 450.0 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.75);
        assert_eq!(tuning.gap_spacing, 450.0);
        assert_eq!(tuning.flap_impulse, FLAP_IMPULSE);
    }

    #[test]
    fn test_rejects_negative_radius() {
        let result = Tuning::from_json(r#"{ "collision_radius": -1.0 }"#);
        assert_eq!(result, Err(TuningError::CollisionRadius(-1.0)));
    }

    #[test]
    fn test_rejects_non_finite() {
        // Out-of-range JSON floats parse as infinity
        assert_eq!(
            Tuning::from_json(r#"{ "screen_height": 1e39 }"#),
            Err(TuningError::NonFinite("screen_height"))
        );
        let tuning = Tuning {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::NonFinite("gravity")));
        let tuning = Tuning {
            player_size: Vec2::new(110.0, f32::NEG_INFINITY),
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::NonFinite("player_size.y")));
    }

    #[test]
    fn test_rejects_overflowing_gap_band() {
        let tuning = Tuning {
            screen_height: f32::MAX,
            gap_height: f32::MAX,
            min_visible_segment: f32::MAX,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::EmptyGapBand { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_gap_band() {
        let tuning = Tuning {
            gap_height: 700.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::EmptyGapBand { .. })
        ));
    }

    #[test]
    fn test_rejects_garbage_json() {
        assert!(matches!(
            Tuning::from_json("not json"),
            Err(TuningError::Parse(_))
        ));
    }
}
