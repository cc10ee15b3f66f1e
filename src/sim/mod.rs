//! Arena simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - One owner mutates the state, one frame at a time
//! - Seeded RNG only
//! - Exactly two players, stable iteration order (by slot)

pub mod collision;
pub mod movement;
pub mod opponent;
pub mod rules;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod weapon;

pub use collision::{CollisionResult, WallContact, elastic_exchange, reflect_velocity};
pub use snapshot::{PlayerView, ProjectileView, RenderState};
pub use state::{
    Body, Color, GameEvent, GameState, MatchOutcome, MatchPhase, MatchState, Player, Projectile,
    Slot,
};
pub use tick::{TickInput, tick};
