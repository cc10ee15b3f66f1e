//! Weapon firing and heat management

use super::state::{Body, Player, Projectile};
use crate::polar_to_cartesian;
use crate::tuning::Tuning;

/// Fire the player's weapon.
///
/// Spawns a projectile just outside the player's edge along the aim direction,
/// kicks the shooter backwards and adds heat. Does nothing for dead or
/// overheated players, or at any point during sudden death.
///
/// Returns true if a projectile was spawned.
pub fn fire(
    player: &mut Player,
    projectiles: &mut Vec<Projectile>,
    sudden_death: bool,
    tuning: &Tuning,
) -> bool {
    if !player.is_alive() || player.overheated || sudden_death {
        return false;
    }

    let dir = player.aim_dir();
    let muzzle = player.body.radius + tuning.muzzle_offset;
    let spawn = player.body.pos + polar_to_cartesian(muzzle, player.angle);
    let mut body = Body::new(spawn, tuning.projectile_radius);
    body.vel = dir * tuning.projectile_speed;
    projectiles.push(Projectile {
        body,
        owner: player.slot,
        angle: player.angle,
    });

    // Recoil
    player.body.vel -= dir * tuning.recoil_impulse;

    player.heat += tuning.heat_per_shot;
    player.since_last_shot = 0.0;
    if player.heat >= 1.0 {
        player.heat = 1.0;
        player.overheated = true;
    }
    true
}

/// Drain heat for one frame.
///
/// Overheated weapons cool from full to empty over `heat_decay_rate` seconds and
/// unlock at zero. Otherwise heat drains slowly once the weapon has been idle
/// for longer than `idle_cooldown_delay`.
pub fn cool_down(player: &mut Player, dt: f32, tuning: &Tuning) {
    player.since_last_shot += dt;

    if player.overheated {
        player.heat -= dt / tuning.heat_decay_rate;
        if player.heat <= 0.0 {
            player.heat = 0.0;
            player.overheated = false;
        }
    } else if player.since_last_shot > tuning.idle_cooldown_delay && player.heat > 0.0 {
        player.heat = (player.heat - tuning.idle_cooldown_rate * dt).max(0.0);
    }
}
