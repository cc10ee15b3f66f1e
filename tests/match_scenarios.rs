//! End-to-end match behaviour through the public stepping API

use glam::Vec2;
use proptest::prelude::*;

use xorg_arena::Tuning;
use xorg_arena::sim::{Body, GameEvent, GameState, MatchOutcome, Projectile, Slot};

fn quiet_game() -> GameState {
    let tuning = Tuning {
        opponent_fire_chance: 0.0,
        ..Default::default()
    };
    GameState::with_tuning(tuning, 2024)
}

#[test]
fn fire_from_spawn() {
    let mut game = quiet_game();

    game.step(0.0, 0.0, true);

    let snap = game.snapshot();
    assert_eq!(snap.projectiles.len(), 1);
    // radius 20 + muzzle gap 10 in front of (-150, 0)
    assert!((snap.projectiles[0].pos - Vec2::new(-120.0, 0.0)).length() < 1e-3);
    assert!((game.projectiles[0].body.vel - Vec2::new(800.0, 0.0)).length() < 1e-3);

    let local = game.player(Slot::Local);
    assert!((local.body.vel - Vec2::new(-200.0, 0.0)).length() < 1e-3);
    assert!((local.heat - 0.05).abs() < 1e-6);
}

#[test]
fn timer_runs_out_into_sudden_death() {
    let mut game = quiet_game();

    for _ in 0..59 {
        game.step(1.0, 0.0, false);
        // Keep both players parked so nobody drifts into anything
        for slot in Slot::ALL {
            game.player_mut(slot).body.vel = Vec2::ZERO;
        }
    }
    assert!(!game.snapshot().sudden_death);

    game.step(1.0, 0.0, false);
    let snap = game.snapshot();
    assert!(snap.sudden_death);
    assert_eq!(snap.time_remaining, 0.0);
    assert_eq!(snap.arena_radius, 250.0);
    assert!(game.events.contains(&GameEvent::SuddenDeath));

    game.step(0.5, 0.0, false);
    assert_eq!(game.snapshot().arena_radius, 245.0);
}

#[test]
fn no_shooting_in_sudden_death() {
    let mut game = quiet_game();
    game.arena.time_remaining = 0.0;
    game.arena.sudden_death = true;

    game.step(0.0, 0.0, true);

    assert!(game.projectiles.is_empty());
    assert_eq!(game.player(Slot::Local).heat, 0.0);
}

#[test]
fn sudden_death_wall_is_lethal_same_step() {
    let mut game = quiet_game();
    game.arena.time_remaining = 0.0;
    game.arena.sudden_death = true;
    game.arena.arena_radius = 120.0;
    // Opponent at 150 already pokes through a 120 wall
    game.player_mut(Slot::Local).body.pos = Vec2::new(-50.0, 0.0);

    game.step(0.0, 0.0, false);

    assert!(game.events.contains(&GameEvent::Eliminated {
        slot: Slot::Opponent
    }));
    assert!(game.events.contains(&GameEvent::MatchOver {
        outcome: MatchOutcome::Winner(Slot::Local)
    }));
    // Match already reset
    assert!(!game.snapshot().sudden_death);
    assert_eq!(game.alive_count(), 2);
}

#[test]
fn projectile_leaving_arena_is_gone_next_snapshot() {
    let mut game = quiet_game();
    let mut body = Body::new(Vec2::new(0.0, 200.0), 5.0);
    body.vel = Vec2::new(0.0, 800.0);
    game.projectiles.push(Projectile {
        body,
        owner: Slot::Opponent,
        angle: std::f32::consts::FRAC_PI_2,
    });

    game.step(0.01, 0.0, false);
    assert_eq!(game.snapshot().projectiles.len(), 1);

    game.step(0.1, 0.0, false);
    assert!(game.snapshot().projectiles.is_empty());
}

#[test]
fn overheat_locks_until_cooled() {
    let mut game = quiet_game();

    for _ in 0..20 {
        game.step(0.0, std::f32::consts::FRAC_PI_2, true);
    }
    assert!(game.player(Slot::Local).overheated);
    assert!(game.events.contains(&GameEvent::Overheated { slot: Slot::Local }));
    let fired = game.projectiles.len();
    assert_eq!(fired, 20);

    // Still locked 2.9s later
    for _ in 0..29 {
        game.step(0.1, std::f32::consts::FRAC_PI_2, true);
        game.player_mut(Slot::Local).body.vel = Vec2::ZERO;
    }
    assert!(game.player(Slot::Local).overheated);

    for _ in 0..2 {
        game.step(0.1, std::f32::consts::FRAC_PI_2, false);
    }
    let local = game.player(Slot::Local);
    assert!(!local.overheated);
    assert_eq!(local.heat, 0.0);
}

#[test]
fn reset_restores_fresh_match() {
    let mut game = GameState::new(77);
    for _ in 0..300 {
        game.step(1.0 / 60.0, 0.3, true);
    }

    game.reset();

    let snap = game.snapshot();
    assert_eq!(snap.players.len(), 2);
    assert!(snap.projectiles.is_empty());
    assert_eq!(snap.arena_radius, 250.0);
    assert_eq!(snap.time_remaining, 60.0);
    assert!(snap.players.iter().all(|p| p.hp == 10 && p.heat == 0.0));
}

#[test]
fn long_run_keeps_invariants() {
    let mut game = GameState::new(31337);
    let mut matches = 0;

    for i in 0..60 * 200 {
        let local = game.player(Slot::Local).body.pos;
        let opp = game.player(Slot::Opponent).body.pos;
        let aim = xorg_arena::heading(local, opp);
        game.step(1.0 / 60.0, aim, i % 10 == 0);

        assert!(game.alive_count() == 2, "a finished match must reset on the same step");
        for p in &game.players {
            assert!((0.0..=1.0).contains(&p.heat));
            if p.overheated {
                assert!(p.heat > 0.0);
            }
        }
        if game.arena.sudden_death {
            assert!(game.arena.arena_radius >= game.tuning().arena_min_radius);
        }
        matches += game
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::MatchOver { .. }))
            .count();
    }

    assert_eq!(matches as u32, game.matches_played);
}

proptest! {
    #[test]
    fn projectile_speed_never_changes(angle in -3.1f32..3.1, frames in 1usize..30) {
        let mut game = quiet_game();
        game.step(0.0, angle, true);
        let speed = game.projectiles[0].body.vel.length();

        for _ in 0..frames {
            game.step(1.0 / 120.0, angle, false);
            for proj in &game.projectiles {
                prop_assert!((proj.body.vel.length() - speed).abs() < 1e-2);
            }
        }
    }

    #[test]
    fn arena_never_grows_in_sudden_death(dts in proptest::collection::vec(0.0f32..0.5, 1..60)) {
        let mut game = quiet_game();
        game.arena.time_remaining = 0.0;
        game.arena.sudden_death = true;
        // Park the players at the center so the wall can't end the match
        game.player_mut(Slot::Local).body.pos = Vec2::new(-21.0, 0.0);
        game.player_mut(Slot::Opponent).body.pos = Vec2::new(21.0, 0.0);

        let mut last = game.arena.arena_radius;
        for dt in dts {
            game.step(dt, 0.0, false);
            prop_assert!(game.arena.arena_radius <= last);
            prop_assert!(game.arena.arena_radius >= 50.0);
            last = game.arena.arena_radius;
        }
    }
}
