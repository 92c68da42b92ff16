//! Alive/dead life cycle and the collision checks that drive it
//!
//! `Alive -> Dead` is the only stored transition. "Restartable" is derived
//! from the player's height every frame and never stored.

use serde::{Deserialize, Serialize};

use super::collision::collides;
use super::flight::Player;
use super::gaps::GapWindow;
use crate::tuning::Tuning;

/// Whether the player is still flying
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LifeState {
    #[default]
    Alive,
    Dead,
}

impl LifeState {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == LifeState::Alive
    }

    /// Flip to `Dead`. Returns true only for the call that actually flipped.
    pub fn kill(&mut self) -> bool {
        match self {
            LifeState::Alive => {
                *self = LifeState::Dead;
                true
            }
            LifeState::Dead => false,
        }
    }
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    Ceiling,
    Floor,
    /// Index of the gap slot that was hit
    Pipe(usize),
}

impl DeathCause {
    /// Frames between the impact and the death jingle
    pub fn death_sound_delay(self, tuning: &Tuning) -> u32 {
        match self {
            DeathCause::Ceiling => tuning.ceiling_death_sound_delay,
            DeathCause::Floor => tuning.floor_death_sound_delay,
            DeathCause::Pipe(_) => tuning.pipe_death_sound_delay,
        }
    }
}

/// Ceiling first, then floor. Only a living player can hit either.
pub fn check_bounds(player: &Player, tuning: &Tuning) -> Option<DeathCause> {
    if !player.is_alive() {
        return None;
    }
    if player.pos.y <= tuning.ceiling_y {
        Some(DeathCause::Ceiling)
    } else if player.pos.y >= tuning.floor_y() {
        Some(DeathCause::Floor)
    } else {
        None
    }
}

/// Kill the player and apply the cause's velocity change
///
/// Returns false (and changes nothing) when the player was already dead.
pub fn apply_death(player: &mut Player, cause: DeathCause, tuning: &Tuning) -> bool {
    if !player.life.kill() {
        return false;
    }
    match cause {
        DeathCause::Ceiling => {
            player.vel.y = 0.0;
            player.bump_on_head = true;
        }
        DeathCause::Floor => {
            player.vel.y = tuning.floor_rebound;
        }
        DeathCause::Pipe(_) => {}
    }
    true
}

/// Test the player against every gap and start the shake on each hit pipe
///
/// Returns the first gap (in window order) that was hit. Pipes are only
/// checked while the player is alive.
pub fn check_pipes(player: &Player, gaps: &mut GapWindow, tuning: &Tuning) -> Option<DeathCause> {
    if !player.is_alive() {
        return None;
    }
    let circle = player.collision_circle(tuning);
    let scroll_x = player.pos.x;

    let mut first_hit = None;
    for i in 0..gaps.gaps().len() {
        let gap = gaps.gaps()[i];
        let top = collides(circle, gap.top_rect(scroll_x, tuning));
        let bottom = collides(circle, gap.bottom_rect(scroll_x, tuning));
        if top || bottom {
            gaps.mark_hit(i, top, bottom, tuning.shake_frames);
            first_hit.get_or_insert(DeathCause::Pipe(i));
        }
    }
    first_hit
}

/// Whether the player has fallen far enough below the screen to restart
#[inline]
pub fn is_restartable(player: &Player, tuning: &Tuning) -> bool {
    player.pos.y > tuning.restart_y()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup() -> (Player, GapWindow, Tuning) {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let gaps = GapWindow::new(&tuning, &mut rng);
        (Player::new(&tuning), gaps, tuning)
    }

    #[test]
    fn test_kill_flips_once() {
        let mut life = LifeState::Alive;
        assert!(life.kill());
        assert!(!life.kill());
        assert_eq!(life, LifeState::Dead);
    }

    #[test]
    fn test_ceiling_death_stops_motion() {
        let (mut player, _, tuning) = setup();
        player.pos.y = tuning.ceiling_y - 1.0;
        player.vel.y = -12.0;

        let cause = check_bounds(&player, &tuning);
        assert_eq!(cause, Some(DeathCause::Ceiling));
        assert!(apply_death(&mut player, DeathCause::Ceiling, &tuning));
        assert_eq!(player.vel.y, 0.0);
        assert!(player.bump_on_head);
        assert!(!player.is_alive());
    }

    #[test]
    fn test_floor_death_rebounds() {
        let (mut player, _, tuning) = setup();
        player.pos.y = tuning.floor_y();

        assert_eq!(check_bounds(&player, &tuning), Some(DeathCause::Floor));
        assert!(apply_death(&mut player, DeathCause::Floor, &tuning));
        assert_eq!(player.vel.y, tuning.floor_rebound);
        assert!(!player.bump_on_head);
    }

    #[test]
    fn test_dead_player_is_not_killed_again() {
        let (mut player, _, tuning) = setup();
        player.pos.y = tuning.floor_y() + 10.0;
        apply_death(&mut player, DeathCause::Floor, &tuning);
        player.vel.y = 3.0;

        assert_eq!(check_bounds(&player, &tuning), None);
        assert!(!apply_death(&mut player, DeathCause::Floor, &tuning));
        assert_eq!(player.vel.y, 3.0);
    }

    #[test]
    fn test_pipe_hit_marks_shake() {
        let (mut player, mut gaps, tuning) = setup();
        // Scroll so gap 0 sits right on top of the player, then aim at its top pipe
        let gap = gaps.gaps()[0];
        let circle_x = tuning.player_screen_x + tuning.player_size.x / 2.0;
        player.pos.x = gap.center_x - circle_x;
        player.pos.y = 0.0;

        let cause = check_pipes(&player, &mut gaps, &tuning);
        assert_eq!(cause, Some(DeathCause::Pipe(0)));
        let gap = gaps.gaps()[0];
        assert!(gap.is_shaking());
        assert!(gap.top_shaking);
        assert!(!gap.bottom_shaking);
    }

    #[test]
    fn test_two_pipes_hit_at_once() {
        let (mut player, mut gaps, tuning) = setup();
        // Stack gap 2 onto gap 5 so one circle touches both top pipes
        let x = gaps.gaps()[5].center_x;
        gaps.gaps_mut()[2].center_x = x;
        let circle_x = tuning.player_screen_x + tuning.player_size.x / 2.0;
        player.pos.x = x - circle_x;
        player.pos.y = 0.0;

        let cause = check_pipes(&player, &mut gaps, &tuning);
        assert_eq!(cause, Some(DeathCause::Pipe(2)));
        assert!(gaps.gaps()[2].is_shaking());
        assert!(gaps.gaps()[5].is_shaking());
        let shaking = gaps.gaps().iter().filter(|g| g.is_shaking()).count();
        assert_eq!(shaking, 2);
    }

    #[test]
    fn test_flying_through_opening_is_safe() {
        let (mut player, mut gaps, tuning) = setup();
        let gap = gaps.gaps()[0];
        let circle_x = tuning.player_screen_x + tuning.player_size.x / 2.0;
        player.pos.x = gap.center_x - circle_x;
        player.pos.y = gap.center_y - tuning.player_size.y / 2.0;

        assert_eq!(check_pipes(&player, &mut gaps, &tuning), None);
        assert!(gaps.gaps().iter().all(|g| !g.is_shaking()));
    }

    #[test]
    fn test_restartable_threshold() {
        let (mut player, _, tuning) = setup();
        player.pos.y = tuning.restart_y();
        assert!(!is_restartable(&player, &tuning));
        player.pos.y += 0.5;
        assert!(is_restartable(&player, &tuning));
    }
}
