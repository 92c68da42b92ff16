//! Flappy Gopher - simulation core of a side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic per-frame simulation (flight, gaps, collisions, life cycle)
//! - `session`: Frame orchestrator wiring the simulation to persistence
//! - `history`: Run history and high score text codec
//! - `persistence`: Storage collaborators (file, LocalStorage, memory)
//! - `tuning`: Data-driven gameplay constants
//! - `settings`: Player preferences
//! - `audio`: Sound effect routing

pub mod audio;
pub mod history;
pub mod persistence;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use history::RunRecord;
pub use session::Session;
pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Default gameplay constants (see [`Tuning`] for the runtime copy)
pub mod consts {
    /// Number of gap slots in the rolling obstacle window
    pub const GAP_COUNT: usize = 10;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 1500.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Per-frame downward acceleration
    pub const GRAVITY: f32 = 0.5;
    /// Vertical velocity set by a flap
    pub const FLAP_IMPULSE: f32 = -14.0;
    /// Horizontal scroll speed while alive
    pub const SCROLL_SPEED: f32 = 5.0;
    /// Per-frame horizontal slowdown after death
    pub const DEATH_DECELERATION: f32 = 0.15;

    /// Player spawn height
    pub const START_Y: f32 = 400.0;
    /// Fixed screen column of the player sprite's left edge
    pub const PLAYER_SCREEN_X: f32 = 100.0;
    /// Player sprite size (collision circle is centred on it)
    pub const PLAYER_WIDTH: f32 = 110.0;
    pub const PLAYER_HEIGHT: f32 = 100.0;
    pub const COLLISION_RADIUS: f32 = 50.0;

    /// Dying on the ceiling happens at or above this height
    pub const CEILING_Y: f32 = -30.0;
    /// Floor death happens at `SCREEN_HEIGHT - FLOOR_MARGIN`
    pub const FLOOR_MARGIN: f32 = 145.0;
    /// Upward kick after hitting the floor
    pub const FLOOR_REBOUND: f32 = -25.0;

    /// Gap geometry
    pub const GAP_HEIGHT: f32 = 300.0;
    pub const GAP_SPACING: f32 = 600.0;
    pub const FIRST_GAP_X: f32 = 1000.0;
    pub const OBSTACLE_WIDTH: f32 = 150.0;
    pub const MIN_VISIBLE_SEGMENT: f32 = 80.0;

    /// Frames a pipe shakes after being hit
    pub const SHAKE_FRAMES: i32 = 40;
}
