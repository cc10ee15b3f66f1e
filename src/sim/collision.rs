//! Collision detection and response
//!
//! Three contact types, resolved in a fixed order each frame:
//! 1. Player vs arena wall (bounce, or elimination in sudden death)
//! 2. Projectile vs player (damage, projectile consumed)
//! 3. Player vs player (separation + equal-mass elastic exchange)

use glam::Vec2;

use super::state::{Player, Projectile, Slot};

/// Distances below this have no usable contact normal
pub const CONTACT_EPSILON: f32 = 1e-4;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Unit contact normal
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Check a circle against the arena wall.
///
/// The normal points outward (center toward the circle). A circle sitting
/// exactly on the center has no normal and reports a miss.
pub fn outer_wall_collision(pos: Vec2, radius: f32, arena_radius: f32) -> CollisionResult {
    let dist = pos.length();
    if dist + radius > arena_radius && dist > CONTACT_EPSILON {
        return CollisionResult {
            hit: true,
            normal: pos / dist,
            penetration: dist + radius - arena_radius,
        };
    }
    CollisionResult::miss()
}

/// What happened to a player at the wall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallContact {
    None,
    /// Pushed back inside (velocity reflected if it was heading out)
    Bounced,
    /// Touched the wall during sudden death
    Eliminated,
}

/// Resolve one live player against the arena wall
pub fn resolve_wall(player: &mut Player, arena_radius: f32, sudden_death: bool) -> WallContact {
    let body = &mut player.body;
    if body.dist_from_center() + body.radius <= arena_radius {
        return WallContact::None;
    }

    if sudden_death {
        player.hp = 0;
        return WallContact::Eliminated;
    }

    let contact = outer_wall_collision(body.pos, body.radius, arena_radius);
    if !contact.hit {
        return WallContact::None;
    }

    body.pos -= contact.normal * contact.penetration;
    // Only reflect when heading out; inward movers were already corrected
    if body.vel.dot(contact.normal) > 0.0 {
        body.vel = reflect_velocity(body.vel, contact.normal);
    }
    WallContact::Bounced
}

/// A projectile striking a player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectileHit {
    pub target: Slot,
    pub remaining_hp: i32,
}

/// Apply projectile damage to live players.
///
/// Projectiles never hurt their owner. Each projectile is consumed by the
/// first player it touches and flagged for removal.
pub fn resolve_projectile_hits(
    projectiles: &mut [Projectile],
    players: &mut [Player],
    damage: i32,
) -> Vec<ProjectileHit> {
    let mut hits = Vec::new();

    for proj in projectiles.iter_mut() {
        for player in players.iter_mut() {
            if player.slot == proj.owner || !player.is_alive() {
                continue;
            }
            if proj.body.overlaps(&player.body) {
                player.hp -= damage;
                proj.body.remove = true;
                hits.push(ProjectileHit {
                    target: player.slot,
                    remaining_hp: player.hp,
                });
                break;
            }
        }
    }

    hits
}

/// Exchange normal velocity components of two equal unit masses.
///
/// Tangential components are kept; the normal components follow the 1D
/// elastic collision formula, which for m1 == m2 is a swap.
pub fn elastic_exchange(v1: Vec2, v2: Vec2, normal: Vec2) -> (Vec2, Vec2) {
    const M1: f32 = 1.0;
    const M2: f32 = 1.0;

    let tangent = normal.perp();

    let tan1 = v1.dot(tangent);
    let tan2 = v2.dot(tangent);
    let norm1 = v1.dot(normal);
    let norm2 = v2.dot(normal);

    let out1 = (norm1 * (M1 - M2) + 2.0 * M2 * norm2) / (M1 + M2);
    let out2 = (norm2 * (M2 - M1) + 2.0 * M1 * norm1) / (M1 + M2);

    (tangent * tan1 + normal * out1, tangent * tan2 + normal * out2)
}

/// Resolve contact between the two players.
///
/// Returns true if they were overlapping.
pub fn resolve_player_pair(a: &mut Player, b: &mut Player) -> bool {
    if !a.is_alive() || !b.is_alive() || !a.body.overlaps(&b.body) {
        return false;
    }

    let delta = b.body.pos - a.body.pos;
    let dist = delta.length();
    // Coincident centers: pick an arbitrary axis so the pair still separates
    let normal = if dist > CONTACT_EPSILON {
        delta / dist
    } else {
        Vec2::X
    };

    let overlap = a.body.radius + b.body.radius - dist;
    a.body.pos -= normal * overlap * 0.5;
    b.body.pos += normal * overlap * 0.5;

    let (va, vb) = elastic_exchange(a.body.vel, b.body.vel, normal);
    a.body.vel = va;
    b.body.vel = vb;
    true
}
