//! XORG Arena - A two-player circular arena shooter
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (movement, collisions, weapons, match rules)
//! - `tuning`: Data-driven game balance
//! - `clock`: Fixed timestep accumulator for hosts with variable frame times
//! - `hud`: Pure helpers for presenting simulation state
//! - `scoreboard`: In-memory match tally

pub mod clock;
pub mod hud;
pub mod scoreboard;
pub mod sim;
pub mod tuning;

pub use clock::FixedClock;
pub use scoreboard::Scoreboard;
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the clock will accept before clamping (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Arena dimensions
    pub const ARENA_BASE_RADIUS: f32 = 250.0;
    pub const ARENA_MIN_RADIUS: f32 = 50.0;
    /// Sudden-death contraction speed (units/s)
    pub const ARENA_SHRINK_RATE: f32 = 10.0;

    /// Match length before sudden death (seconds)
    pub const MATCH_DURATION: f32 = 60.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_HP: i32 = 10;
    /// Spawn distance from center along the x axis
    pub const SPAWN_OFFSET: f32 = 150.0;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 800.0;
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    /// Gap between the player's edge and a freshly spawned projectile
    pub const MUZZLE_OFFSET: f32 = 10.0;
    pub const DAMAGE_PER_HIT: i32 = 1;

    /// Velocity pushed back onto the shooter per shot
    pub const RECOIL_IMPULSE: f32 = 200.0;

    /// Heat gained per shot (20 shots to overheat)
    pub const HEAT_PER_SHOT: f32 = 0.05;
    /// Seconds for a full overheat to cool back to zero
    pub const OVERHEAT_COOLDOWN: f32 = 3.0;
    /// Idle drain rate (heat per second)
    pub const IDLE_COOLDOWN_RATE: f32 = 0.5;
    /// Seconds without firing before the idle drain starts
    pub const IDLE_COOLDOWN_DELAY: f32 = 2.0;

    /// Per-frame chance the opponent pulls the trigger
    pub const OPPONENT_FIRE_CHANCE: f32 = 0.02;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Angle of the vector pointing from `from` to `to`
#[inline]
pub fn heading(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}
