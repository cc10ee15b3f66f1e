//! Computer opponent
//!
//! Purely reactive: track the target's current position (no lead) and pull
//! the trigger at random.

use rand::Rng;

use super::state::Player;
use crate::heading;

/// Turn to face the target. A dead target is ignored.
pub fn aim(opponent: &mut Player, target: &Player) {
    if target.is_alive() {
        opponent.angle = heading(opponent.body.pos, target.body.pos);
    }
}

/// Roll for a shot this frame.
///
/// Never rolls while overheated, so the RNG only advances on frames where a
/// shot was possible.
pub fn wants_to_fire<R: Rng>(opponent: &Player, target: &Player, rng: &mut R, chance: f32) -> bool {
    if !opponent.is_alive() || !target.is_alive() || opponent.overheated {
        return false;
    }
    rng.random::<f32>() < chance
}
