//! HUD presentation helpers
//!
//! Pure functions over `RenderState`; no drawing happens here.

use crate::sim::{PlayerView, RenderState, Slot};

/// Format seconds as `MM:SS` (whole seconds, never negative)
pub fn format_clock(seconds: f32) -> String {
    let total = if seconds.is_finite() {
        seconds.max(0.0).floor() as u32
    } else {
        0
    };
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Health bar fill in [0, 1]
pub fn health_fraction(hp: i32, max_hp: i32) -> f32 {
    if max_hp <= 0 {
        return 0.0;
    }
    (hp as f32 / max_hp as f32).clamp(0.0, 1.0)
}

/// Per-player HUD readout
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerHud {
    pub slot: Slot,
    pub health: f32,
    /// Heat bar fill; 0 while the meter is hidden
    pub heat: f32,
    pub overheated: bool,
}

impl PlayerHud {
    pub fn from_view(view: &PlayerView, max_hp: i32) -> Self {
        Self {
            slot: view.slot,
            health: health_fraction(view.hp, max_hp),
            heat: if view.heat_visible { view.heat } else { 0.0 },
            overheated: view.overheated,
        }
    }
}

/// Full HUD for a frame
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub clock: String,
    pub sudden_death: bool,
    /// Dead players show an empty bar
    pub players: [PlayerHud; 2],
}

impl Hud {
    pub fn from_render_state(state: &RenderState, max_hp: i32) -> Self {
        let player = |slot: Slot| {
            state
                .player(slot)
                .map(|v| PlayerHud::from_view(v, max_hp))
                .unwrap_or(PlayerHud {
                    slot,
                    health: 0.0,
                    heat: 0.0,
                    overheated: false,
                })
        };
        Self {
            clock: format_clock(state.time_remaining),
            sudden_death: state.sudden_death,
            players: [player(Slot::Local), player(Slot::Opponent)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(60.0), "01:00");
        assert_eq!(format_clock(59.7), "00:59");
        assert_eq!(format_clock(0.2), "00:00");
        assert_eq!(format_clock(-3.0), "00:00");
        assert_eq!(format_clock(125.0), "02:05");
    }

    #[test]
    fn test_health_fraction() {
        assert_eq!(health_fraction(10, 10), 1.0);
        assert_eq!(health_fraction(5, 10), 0.5);
        assert_eq!(health_fraction(-2, 10), 0.0);
        assert_eq!(health_fraction(3, 0), 0.0);
    }

    #[test]
    fn test_hud_from_state() {
        let mut state = GameState::new(9);
        state.player_mut(Slot::Local).hp = 4;
        state.player_mut(Slot::Local).heat = 0.3;
        state.player_mut(Slot::Local).since_last_shot = 5.0;
        state.player_mut(Slot::Opponent).hp = 0;

        let hud = Hud::from_render_state(&state.snapshot(), 10);

        assert_eq!(hud.clock, "01:00");
        assert!((hud.players[0].health - 0.4).abs() < 1e-6);
        // Idle drain hides the meter
        assert_eq!(hud.players[0].heat, 0.0);
        assert_eq!(hud.players[1].health, 0.0);
    }
}
