//! Position integration
//!
//! Velocity only ever changes through recoil and collisions; there is no drag.

use super::state::{Player, Projectile};
use super::weapon;
use crate::tuning::Tuning;

/// Move every live player and run their weapon cooldown
pub fn integrate_players(players: &mut [Player], dt: f32, tuning: &Tuning) {
    for player in players.iter_mut().filter(|p| p.is_alive()) {
        player.body.advance(dt);
        weapon::cool_down(player, dt, tuning);
    }
}

/// Move every projectile and flag the ones that reached the arena wall
pub fn integrate_projectiles(projectiles: &mut [Projectile], arena_radius: f32, dt: f32) {
    for proj in projectiles.iter_mut() {
        proj.body.advance(dt);
        if proj.body.dist_from_center() + proj.body.radius >= arena_radius {
            proj.body.remove = true;
        }
    }
}
