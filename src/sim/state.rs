//! Session state and simulation events
//!
//! Everything the simulation mutates lives in [`GameState`]; one owner, no
//! globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::flight::Player;
use super::gaps::GapWindow;
use super::identity::RunIdentity;
use crate::history::{self, RunRecord};
use crate::tuning::Tuning;

/// Discrete things that happened during a frame
///
/// Each kind is reported at most once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Wing flap (rate limited by the flap sound cooldown)
    Flap,
    /// A gap was passed
    Score,
    /// The current score became the best score
    NewBest,
    HitCeiling,
    HitFloor,
    HitPipe,
    /// Delayed jingle after a fatal hit
    Death,
    /// A run ended and was appended to the history
    RunEnded,
    /// The player fell far enough to allow a restart
    Restartable,
    /// A new run started
    Restart,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub player: Player,
    pub gaps: GapWindow,
    pub identity: RunIdentity,
    pub score: u32,
    pub best_score: u32,
    /// Score pop animation (1 on score, decays to 0)
    pub score_pulse: f32,
    /// Frames spent restartable this run
    pub restartable_time: u32,
    /// Runs counted as finished (bumped on first reaching restartable)
    pub kill_count: u32,
    /// Finished runs, oldest first
    pub history: Vec<RunRecord>,
    /// Frames since the pointer last moved
    pub cursor_idle_frames: u32,
    pub(crate) last_pointer: Option<Vec2>,
    pub(crate) counted_kill: bool,
    pub(crate) flap_sound_cooldown: i32,
    pub(crate) want_flap_sound: bool,
    pub(crate) death_sound_in: Option<u32>,
    /// Events raised this frame (cleared at the start of each tick)
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Start a session from previously persisted history and high score
    pub fn new(seed: u64, tuning: &Tuning, history: Vec<RunRecord>, high_score: u32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let gaps = GapWindow::new(tuning, &mut rng);
        let identity = RunIdentity::random(&mut rng);
        let best_score = history::best_score(&history).unwrap_or(0).max(high_score);
        let kill_count = history.len() as u32;

        log::info!(
            "Session started (seed {}, {} past runs, best {})",
            seed,
            history.len(),
            best_score
        );

        Self {
            seed,
            rng,
            player: Player::new(tuning),
            gaps,
            identity,
            score: 0,
            best_score,
            score_pulse: 0.0,
            restartable_time: 0,
            kill_count,
            history,
            cursor_idle_frames: 0,
            last_pointer: None,
            counted_kill: false,
            flap_sound_cooldown: 0,
            want_flap_sound: true,
            death_sound_in: None,
            events: Vec::with_capacity(8),
        }
    }

    /// Reset everything run-scoped; history, best score and kill count survive
    pub fn restart(&mut self, tuning: &Tuning) {
        self.player = Player::new(tuning);
        self.gaps = GapWindow::new(tuning, &mut self.rng);
        self.identity = RunIdentity::random(&mut self.rng);
        self.score = 0;
        self.score_pulse = 0.0;
        self.restartable_time = 0;
        self.counted_kill = false;
        self.want_flap_sound = true;
        self.death_sound_in = None;
        log::info!("Run restarted as {}", self.identity.name);
    }

    /// Raise an event unless it was already raised this frame
    pub(crate) fn emit(&mut self, event: GameEvent) {
        if !self.events.contains(&event) {
            self.events.push(event);
        }
    }

    /// Events raised during the last tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Best score including the run in progress
    pub fn effective_best(&self) -> u32 {
        self.best_score.max(self.score)
    }
}
