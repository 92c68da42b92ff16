//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per displayed frame
//! - Seeded RNG only
//! - Fixed-size gap window, no allocation in the frame loop
//! - No rendering, audio or storage dependencies

pub mod collision;
pub mod flight;
pub mod gaps;
pub mod identity;
pub mod lifecycle;
pub mod state;
pub mod tick;

pub use collision::{Circle, Rect, collides};
pub use flight::Player;
pub use gaps::{Gap, GapWindow};
pub use identity::RunIdentity;
pub use lifecycle::{DeathCause, LifeState};
pub use state::{GameEvent, GameState};
pub use tick::{FrameInput, Snapshot, tick};
