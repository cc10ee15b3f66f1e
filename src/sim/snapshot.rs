//! Read-only view of the simulation for renderers and HUDs

use glam::Vec2;
use serde::Serialize;

use super::state::{Color, GameState, Slot};

/// A live player as a renderer sees it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub slot: Slot,
    pub pos: Vec2,
    pub radius: f32,
    pub angle: f32,
    pub color: Color,
    pub hp: i32,
    pub heat: f32,
    pub overheated: bool,
    /// Whether the heat meter should be drawn at all
    pub heat_visible: bool,
}

/// A projectile as a renderer sees it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectileView {
    pub pos: Vec2,
    /// Orientation of the laser streak
    pub angle: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderState {
    pub arena_radius: f32,
    pub sudden_death: bool,
    pub time_remaining: f32,
    /// Live players only
    pub players: Vec<PlayerView>,
    pub projectiles: Vec<ProjectileView>,
}

impl GameState {
    /// Snapshot the current frame
    pub fn snapshot(&self) -> RenderState {
        RenderState {
            arena_radius: self.arena.arena_radius,
            sudden_death: self.arena.sudden_death,
            time_remaining: self.arena.time_remaining,
            players: self
                .players
                .iter()
                .filter(|p| p.is_alive())
                .map(|p| PlayerView {
                    slot: p.slot,
                    pos: p.body.pos,
                    radius: p.body.radius,
                    angle: p.angle,
                    color: p.color,
                    hp: p.hp,
                    heat: p.heat,
                    overheated: p.overheated,
                    heat_visible: p.heat_visible(&self.tuning),
                })
                .collect(),
            projectiles: self
                .projectiles
                .iter()
                .map(|p| ProjectileView {
                    pos: p.body.pos,
                    angle: p.angle,
                })
                .collect(),
        }
    }
}

impl RenderState {
    pub fn player(&self, slot: Slot) -> Option<&PlayerView> {
        self.players.iter().find(|p| p.slot == slot)
    }
}
