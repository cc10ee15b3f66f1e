//! Per-frame simulation step
//!
//! Order within a frame:
//! 1. Local aim / trigger, then the opponent's decision
//! 2. Movement (players + heat, projectiles + wall exit)
//! 3. Collisions (wall, projectile hits, player pair)
//! 4. Purge consumed projectiles
//! 5. Match clock, then win check (reset on match end)

use super::collision::{self, WallContact};
use super::movement;
use super::opponent;
use super::rules;
use super::state::{GameEvent, GameState, MatchOutcome, Slot};
use super::weapon;
use crate::normalize_angle;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Local player's aim angle (from pointer position); None keeps the last one
    pub aim: Option<f32>,
    /// Local player pulled the trigger this frame
    pub fire: bool,
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    let dt = sanitize_dt(dt);
    state.time_ticks += 1;

    // Local player
    {
        let local = state.player_mut(Slot::Local);
        if local.is_alive() {
            if let Some(aim) = input.aim.filter(|a| a.is_finite()) {
                local.angle = normalize_angle(aim);
            }
            if input.fire {
                fire_weapon(state, Slot::Local);
            }
        }
    }

    // Opponent
    {
        let chance = state.tuning.opponent_fire_chance;
        let [local, opp] = &mut state.players;
        if opp.is_alive() {
            opponent::aim(opp, local);
            if opponent::wants_to_fire(opp, local, &mut state.rng, chance) {
                fire_weapon(state, Slot::Opponent);
            }
        }
    }

    // Movement
    movement::integrate_players(&mut state.players, dt, &state.tuning);
    movement::integrate_projectiles(&mut state.projectiles, state.arena.arena_radius, dt);

    resolve_collisions(state);

    state.projectiles.retain(|p| !p.body.remove);

    // Match clock
    if rules::advance_clock(&mut state.arena, dt, &state.tuning) {
        log::info!("Sudden death! Arena contracting");
        state.events.push(GameEvent::SuddenDeath);
    }

    if let Some(outcome) = rules::match_outcome(&state.players) {
        match outcome {
            MatchOutcome::Winner(slot) => log::info!("{slot:?} wins!"),
            MatchOutcome::Draw => log::info!("Draw!"),
        }
        state.events.push(GameEvent::MatchOver { outcome });
        state.matches_played += 1;
        state.reset();
    }
}

/// Negative or NaN frame times would run the simulation backwards
fn sanitize_dt(dt: f32) -> f32 {
    if dt >= 0.0 {
        dt
    } else {
        log::warn!("Ignoring invalid frame time {dt}");
        0.0
    }
}

/// Fire a slot's weapon and record what happened
fn fire_weapon(state: &mut GameState, slot: Slot) {
    let sudden_death = state.arena.sudden_death;
    let player = &mut state.players[slot.index()];
    if weapon::fire(player, &mut state.projectiles, sudden_death, &state.tuning) {
        state.events.push(GameEvent::Fired { slot });
        if player.overheated {
            log::debug!("{slot:?} overheated");
            state.events.push(GameEvent::Overheated { slot });
        }
    }
}

fn resolve_collisions(state: &mut GameState) {
    let arena_radius = state.arena.arena_radius;
    let sudden_death = state.arena.sudden_death;

    // Wall
    for player in state.players.iter_mut().filter(|p| p.is_alive()) {
        match collision::resolve_wall(player, arena_radius, sudden_death) {
            WallContact::None => {}
            WallContact::Bounced => state.events.push(GameEvent::WallBounce { slot: player.slot }),
            WallContact::Eliminated => {
                log::debug!("{:?} touched the wall in sudden death", player.slot);
                state.events.push(GameEvent::Eliminated { slot: player.slot });
            }
        }
    }

    // Projectiles vs players
    let damage = state.tuning.damage_per_hit;
    let hits =
        collision::resolve_projectile_hits(&mut state.projectiles, &mut state.players, damage);
    for hit in hits {
        log::debug!("{:?} hit, {} hp left", hit.target, hit.remaining_hp);
        state.events.push(GameEvent::Hit {
            target: hit.target,
            remaining_hp: hit.remaining_hp,
        });
        // Only the hit that crossed zero eliminates
        if hit.remaining_hp <= 0 && hit.remaining_hp + damage > 0 {
            state.events.push(GameEvent::Eliminated { slot: hit.target });
        }
    }

    // Player vs player
    let [a, b] = &mut state.players;
    if collision::resolve_player_pair(a, b) {
        state.events.push(GameEvent::PlayersCollided);
    }
}
