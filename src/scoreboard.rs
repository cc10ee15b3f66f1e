//! Match tally for the current session
//!
//! Lives only as long as the process; nothing is written to disk.

use serde::{Deserialize, Serialize};

use crate::sim::{MatchOutcome, Slot};

/// Wins and draws since startup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    local_wins: u32,
    opponent_wins: u32,
    draws: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished match
    pub fn record(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Winner(Slot::Local) => self.local_wins += 1,
            MatchOutcome::Winner(Slot::Opponent) => self.opponent_wins += 1,
            MatchOutcome::Draw => self.draws += 1,
        }
    }

    pub fn wins(&self, slot: Slot) -> u32 {
        match slot {
            Slot::Local => self.local_wins,
            Slot::Opponent => self.opponent_wins,
        }
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Total matches recorded
    pub fn matches(&self) -> u32 {
        self.local_wins + self.opponent_wins + self.draws
    }

    /// Slot with more wins (None when tied)
    pub fn leader(&self) -> Option<Slot> {
        match self.local_wins.cmp(&self.opponent_wins) {
            std::cmp::Ordering::Greater => Some(Slot::Local),
            std::cmp::Ordering::Less => Some(Slot::Opponent),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.matches() == 0
    }
}
