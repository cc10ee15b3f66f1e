//! Game state and core simulation types
//!
//! Two players, any number of projectiles, and the arena/match clock.
//! Everything here is plain value data owned by a single `GameState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// One of the two player slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// Human-controlled, spawns on the left
    Local,
    /// Computer-controlled, spawns on the right
    Opponent,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::Local, Slot::Opponent];

    /// Index into `GameState::players`
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Slot::Local => 0,
            Slot::Opponent => 1,
        }
    }

    #[inline]
    pub fn other(self) -> Slot {
        match self {
            Slot::Local => Slot::Opponent,
            Slot::Opponent => Slot::Local,
        }
    }
}

/// Display color (sRGB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color { r: 255, g: 50, b: 50 };
    pub const BLUE: Color = Color { r: 50, g: 50, b: 255 };
}

/// Kinematic state shared by players and projectiles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Marked for removal at the end of the frame
    pub remove: bool,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            remove: false,
        }
    }

    /// Move by velocity (no drag)
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Distance from the arena center
    #[inline]
    pub fn dist_from_center(&self) -> f32 {
        self.pos.length()
    }

    /// Whether two circles overlap (touching does not count)
    #[inline]
    pub fn overlaps(&self, other: &Body) -> bool {
        self.pos.distance(other.pos) < self.radius + other.radius
    }
}

/// A projectile in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
    /// Slot that fired it (never damaged by its own shots)
    pub owner: Slot,
    /// Direction of travel at spawn (radians)
    pub angle: f32,
}

/// A combatant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub slot: Slot,
    pub body: Body,
    /// Facing / aim angle (radians)
    pub angle: f32,
    pub hp: i32,
    /// Weapon heat in [0, 1]
    pub heat: f32,
    /// Locked out until heat drains back to zero
    pub overheated: bool,
    pub since_last_shot: f32,
    pub color: Color,
}

impl Player {
    /// Fresh player at the slot's spawn point, facing the arena center
    pub fn spawn(slot: Slot, tuning: &Tuning) -> Self {
        let (x, angle, color) = match slot {
            Slot::Local => (-tuning.spawn_offset, 0.0, Color::RED),
            Slot::Opponent => (tuning.spawn_offset, std::f32::consts::PI, Color::BLUE),
        };
        Self {
            slot,
            body: Body::new(Vec2::new(x, 0.0), tuning.player_radius),
            angle,
            hp: tuning.player_hp,
            heat: 0.0,
            overheated: false,
            since_last_shot: 0.0,
            color,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Unit vector along the facing angle
    #[inline]
    pub fn aim_dir(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }

    /// The heat meter hides once the idle drain has started
    pub fn heat_visible(&self, tuning: &Tuning) -> bool {
        self.overheated || self.since_last_shot <= tuning.idle_cooldown_delay
    }
}

/// Phase of the match clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Timer running, fixed-size arena
    Active,
    /// Timer expired: arena contracts and the wall is lethal
    SuddenDeath,
}

/// Arena and countdown state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub arena_radius: f32,
    pub sudden_death: bool,
    /// Seconds until sudden death (0 once it has begun)
    pub time_remaining: f32,
}

impl MatchState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            arena_radius: tuning.arena_base_radius,
            sudden_death: false,
            time_remaining: tuning.match_duration,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        if self.sudden_death {
            MatchPhase::SuddenDeath
        } else {
            MatchPhase::Active
        }
    }
}

/// How a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Winner(Slot),
    /// Both players died on the same frame
    Draw,
}

/// Something notable that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Fired { slot: Slot },
    Overheated { slot: Slot },
    Hit { target: Slot, remaining_hp: i32 },
    WallBounce { slot: Slot },
    PlayersCollided,
    SuddenDeath,
    Eliminated { slot: Slot },
    MatchOver { outcome: MatchOutcome },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Balance constants (immutable for the life of the state)
    pub(crate) tuning: Tuning,
    /// Seed the opponent RNG started from
    pub seed: u64,
    /// Opponent decision RNG
    pub rng: Pcg32,
    /// Indexed by `Slot::index`
    pub players: [Player; 2],
    pub projectiles: Vec<Projectile>,
    pub arena: MatchState,
    /// Ticks since construction
    pub time_ticks: u64,
    /// Completed matches since construction
    pub matches_played: u32,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(Tuning::default(), seed)
    }

    /// Create a new game with explicit tuning
    pub fn with_tuning(tuning: Tuning, seed: u64) -> Self {
        let players = [
            Player::spawn(Slot::Local, &tuning),
            Player::spawn(Slot::Opponent, &tuning),
        ];
        let arena = MatchState::new(&tuning);
        log::info!("Match 1 starting (seed {seed})");
        Self {
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            players,
            projectiles: Vec::new(),
            arena,
            time_ticks: 0,
            matches_played: 0,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    #[inline]
    pub fn player(&self, slot: Slot) -> &Player {
        &self.players[slot.index()]
    }

    #[inline]
    pub fn player_mut(&mut self, slot: Slot) -> &mut Player {
        &mut self.players[slot.index()]
    }

    pub fn alive_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_alive()).count()
    }

    /// Start a fresh match: respawn both players, clear projectiles, restore the arena.
    /// The opponent RNG keeps running so consecutive matches differ.
    pub fn reset(&mut self) {
        self.players = [
            Player::spawn(Slot::Local, &self.tuning),
            Player::spawn(Slot::Opponent, &self.tuning),
        ];
        self.projectiles.clear();
        self.arena = MatchState::new(&self.tuning);
        log::info!("Match {} starting", self.matches_played + 1);
    }

    /// Advance one frame with the local player's aim and trigger
    pub fn step(&mut self, dt: f32, aim_angle: f32, fire: bool) {
        let input = super::TickInput {
            aim: Some(aim_angle),
            fire,
        };
        super::tick(self, &input, dt);
    }
}
