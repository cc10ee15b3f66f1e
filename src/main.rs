//! XORG Arena headless host
//!
//! Runs the simulation at the fixed timestep with a scripted local player,
//! standing in for the windowed front end (which owns rendering and input).

use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::Parser;

use xorg_arena::sim::{GameEvent, GameState, Slot, TickInput, tick};
use xorg_arena::hud::Hud;
use xorg_arena::{FixedClock, Scoreboard, Tuning, heading};

/// Frame time the headless loop pretends the display runs at
const FRAME_DT: f32 = 1.0 / 144.0;

#[derive(Parser, Debug)]
#[command(name = "xorg-arena", about = "Run XORG arena matches headless")]
struct Args {
    /// Opponent RNG seed
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Simulated seconds to run
    #[arg(long, default_value_t = 300.0)]
    seconds: f32,

    /// JSON file overriding default tuning values
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Local player fires every N simulation steps (0 = never)
    #[arg(long, default_value_t = 12)]
    autofire_every: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    ensure!(
        args.seconds.is_finite() && args.seconds > 0.0,
        "--seconds must be positive"
    );

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };

    log::info!(
        "XORG Arena (headless) starting, {} shots to overheat",
        tuning.shots_to_overheat()
    );
    let max_hp = tuning.player_hp;
    let mut state = GameState::with_tuning(tuning, args.seed);
    let mut clock = FixedClock::default();
    let mut scoreboard = Scoreboard::new();

    let mut elapsed = 0.0;
    while elapsed < args.seconds {
        elapsed += FRAME_DT;
        for _ in 0..clock.advance(FRAME_DT) {
            let input = scripted_input(&state, args.autofire_every);
            tick(&mut state, &input, clock.step());

            for event in &state.events {
                if let GameEvent::MatchOver { outcome } = event {
                    scoreboard.record(*outcome);
                }
            }
        }
    }

    let snap = state.snapshot();
    let hud = Hud::from_render_state(&snap, max_hp);
    log::info!(
        "Stopped mid-match at {}{}: arena {:.1}, {} projectiles, {:.2} of a step banked",
        hud.clock,
        if hud.sudden_death { " (sudden death)" } else { "" },
        snap.arena_radius,
        snap.projectiles.len(),
        clock.alpha()
    );
    for player in &hud.players {
        log::info!(
            "{:?}: health {:.0}%, heat {:.0}%{}",
            player.slot,
            player.health * 100.0,
            player.heat * 100.0,
            if player.overheated { " (overheated)" } else { "" }
        );
    }

    let leader = match scoreboard.leader() {
        Some(slot) => format!("{slot:?} leads"),
        None => "tied".to_string(),
    };
    println!(
        "seed {}: {} matches: local {} / opponent {} / draws {} ({leader})",
        state.seed,
        scoreboard.matches(),
        scoreboard.wins(Slot::Local),
        scoreboard.wins(Slot::Opponent),
        scoreboard.draws()
    );
    Ok(())
}

/// Aim straight at the opponent and fire on a fixed cadence
fn scripted_input(state: &GameState, autofire_every: u64) -> TickInput {
    let local = state.player(Slot::Local);
    let opp = state.player(Slot::Opponent);
    TickInput {
        aim: Some(heading(local.body.pos, opp.body.pos)),
        fire: autofire_every > 0 && state.time_ticks % autofire_every == 0,
    }
}
