//! Session orchestrator
//!
//! Owns the simulation state, the tuning and the persistence collaborator.
//! [`Session::advance_frame`] is the only way state changes; storage writes
//! happen synchronously at the transition points the frame reports.

use crate::history::RunRecord;
use crate::persistence::{Persistence, Storage};
use crate::sim::{FrameInput, GameEvent, GameState, Snapshot, tick};
use crate::tuning::{Tuning, TuningError};

/// One play session: a sequence of runs sharing history and best score
#[derive(Debug)]
pub struct Session<S: Storage> {
    tuning: Tuning,
    state: GameState,
    persistence: Persistence<S>,
}

impl<S: Storage> Session<S> {
    /// Validate the tuning, load persisted data and start the first run
    pub fn new(tuning: Tuning, storage: S, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;
        let persistence = Persistence::new(storage);
        let history = persistence.load_history();
        let high_score = persistence.load_high_score();
        let state = GameState::new(seed, &tuning, history, high_score);
        Ok(Self {
            tuning,
            state,
            persistence,
        })
    }

    /// Run one frame and return what to draw
    pub fn advance_frame(&mut self, input: &FrameInput) -> Snapshot<'_> {
        tick(&mut self.state, input, &self.tuning);

        for &event in self.state.events() {
            match event {
                GameEvent::NewBest => {
                    log::info!("New best score: {}", self.state.best_score);
                    self.persistence.save_high_score(self.state.best_score);
                }
                GameEvent::RunEnded => self.persistence.save_history(&self.state.history),
                _ => {}
            }
        }

        self.snapshot()
    }

    /// View of the current frame without advancing
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::of(&self.state, &self.tuning)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn history(&self) -> &[RunRecord] {
        &self.state.history
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }
}
