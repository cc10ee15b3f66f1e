//! Match clock, sudden death and win detection

use super::state::{MatchOutcome, MatchState, Player};
use crate::tuning::Tuning;

/// Run the countdown and the sudden-death contraction for one frame.
///
/// The frame on which the timer runs out only flips into sudden death; the
/// arena starts shrinking on the following frame.
///
/// Returns true on the frame sudden death begins.
pub fn advance_clock(arena: &mut MatchState, dt: f32, tuning: &Tuning) -> bool {
    if arena.time_remaining > 0.0 {
        arena.time_remaining -= dt;
        if arena.time_remaining <= 0.0 {
            arena.time_remaining = 0.0;
            arena.sudden_death = true;
            return true;
        }
    } else if arena.sudden_death && arena.arena_radius > tuning.arena_min_radius {
        arena.arena_radius =
            (arena.arena_radius - tuning.arena_shrink_rate * dt).max(tuning.arena_min_radius);
    }
    false
}

/// Decide whether the match is over.
///
/// Ends as soon as at most one player is alive; two simultaneous deaths is a draw.
pub fn match_outcome(players: &[Player]) -> Option<MatchOutcome> {
    let mut alive = players.iter().filter(|p| p.is_alive());
    match (alive.next(), alive.next()) {
        (Some(_), Some(_)) => None,
        (Some(winner), None) => Some(MatchOutcome::Winner(winner.slot)),
        _ => Some(MatchOutcome::Draw),
    }
}
