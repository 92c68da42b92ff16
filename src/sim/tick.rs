//! Per-frame simulation step
//!
//! Core game loop that advances the session by exactly one displayed frame.

use glam::Vec2;

use super::flight::Player;
use super::gaps::Gap;
use super::identity::RunIdentity;
use super::lifecycle::{self, DeathCause};
use super::state::{GameEvent, GameState};
use crate::history::RunRecord;
use crate::tuning::Tuning;

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Confirm/flap: any click, key press or typed character this frame
    pub flap: bool,
    /// Pointer position, if the host tracks one
    pub pointer: Option<Vec2>,
}

/// Read-only view of the session handed to the renderer
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub player: &'a Player,
    pub gaps: &'a [Gap],
    /// World x of the playfield's left screen edge
    pub scroll_x: f32,
    pub score: u32,
    pub best_score: u32,
    pub score_pulse: f32,
    pub restartable: bool,
    pub restartable_time: u32,
    pub kill_count: u32,
    pub identity: &'a RunIdentity,
    pub cursor_visible: bool,
    pub events: &'a [GameEvent],
}

impl<'a> Snapshot<'a> {
    pub fn of(state: &'a GameState, tuning: &Tuning) -> Self {
        Self {
            player: &state.player,
            gaps: state.gaps.gaps(),
            scroll_x: state.player.pos.x,
            score: state.score,
            best_score: state.effective_best(),
            score_pulse: state.score_pulse,
            restartable: lifecycle::is_restartable(&state.player, tuning),
            restartable_time: state.restartable_time,
            kill_count: state.kill_count,
            identity: &state.identity,
            cursor_visible: state.cursor_idle_frames < tuning.cursor_hide_frames,
            events: state.events(),
        }
    }
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &FrameInput, tuning: &Tuning) {
    state.events.clear();

    let mut flap = input.flap;
    if flap && lifecycle::is_restartable(&state.player, tuning) {
        state.restart(tuning);
        state.emit(GameEvent::Restart);
        flap = false;
    }

    if flap && state.player.flap(tuning) {
        state.want_flap_sound = true;
    }

    state.flap_sound_cooldown = state.flap_sound_cooldown.saturating_sub(1);
    if state.want_flap_sound && state.flap_sound_cooldown <= 0 {
        state.emit(GameEvent::Flap);
        state.flap_sound_cooldown = tuning.flap_sound_cooldown;
    }
    state.want_flap_sound = false;

    state.player.integrate(tuning);

    let recycled = state.gaps.advance(
        state.player.pos.x,
        tuning.obstacle_half_width(),
        &mut state.rng,
    );
    for _ in 0..recycled {
        add_point(state);
    }

    if let Some(cause) = lifecycle::check_bounds(&state.player, tuning) {
        die(state, cause, tuning);
    }

    state.gaps.tick_shake();
    if let Some(cause) = lifecycle::check_pipes(&state.player, &mut state.gaps, tuning) {
        die(state, cause, tuning);
    }

    if let Some(frames) = state.death_sound_in {
        if frames <= 1 {
            state.emit(GameEvent::Death);
            state.death_sound_in = None;
        } else {
            state.death_sound_in = Some(frames - 1);
        }
    }

    state.player.settle_rotation(tuning);

    if state.score_pulse > 0.0 {
        state.score_pulse = (state.score_pulse - tuning.score_pulse_decay).max(0.0);
    }

    if lifecycle::is_restartable(&state.player, tuning) {
        if !state.counted_kill {
            state.counted_kill = true;
            state.kill_count += 1;
            state.emit(GameEvent::Restartable);
        }
        state.restartable_time = state.restartable_time.saturating_add(1);
    }

    track_cursor(state, input.pointer);
}

fn add_point(state: &mut GameState) {
    state.score += 1;
    state.score_pulse = 1.0;
    state.emit(GameEvent::Score);
    if state.score > state.best_score {
        state.best_score = state.score;
        state.emit(GameEvent::NewBest);
    }
}

fn die(state: &mut GameState, cause: DeathCause, tuning: &Tuning) {
    if !lifecycle::apply_death(&mut state.player, cause, tuning) {
        return;
    }
    state.emit(match cause {
        DeathCause::Ceiling => GameEvent::HitCeiling,
        DeathCause::Floor => GameEvent::HitFloor,
        DeathCause::Pipe(_) => GameEvent::HitPipe,
    });
    state.death_sound_in = Some(cause.death_sound_delay(tuning));

    state
        .history
        .push(RunRecord::new(&state.identity, state.score));
    state.best_score = state.best_score.max(state.score);
    state.emit(GameEvent::RunEnded);

    log::info!(
        "{} died ({:?}) with score {} (best {})",
        state.identity.name,
        cause,
        state.score,
        state.best_score
    );
}

fn track_cursor(state: &mut GameState, pointer: Option<Vec2>) {
    match pointer {
        Some(pos) if state.last_pointer != Some(pos) => {
            state.cursor_idle_frames = 0;
            state.last_pointer = Some(pos);
        }
        _ => state.cursor_idle_frames = state.cursor_idle_frames.saturating_add(1),
    }
}
