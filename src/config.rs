//! Agent configuration: difficulty tiers and time budget

use std::time::Duration;

/// Default thinking time per move
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(3);

/// Difficulty tier chosen by the player.
///
/// Each tier maps to a fixed maximum search depth.
///
/// | Tier   | Depth |
/// |--------|-------|
/// | Easy   | 1     |
/// | Medium | 3     |
/// | Hard   | 5     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Maximum iterative deepening depth
    pub fn depth(self) -> i8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only search settings fixed at agent construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentConfig {
    /// Deepest iteration to run. Zero or negative disables the search.
    pub depth_limit: i8,
    /// Wall-clock budget, checked between iterations
    pub time_budget: Duration,
}

impl AgentConfig {
    pub fn new(depth_limit: i8, time_budget: Duration) -> Self {
        Self {
            depth_limit,
            time_budget,
        }
    }

    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.depth(), DEFAULT_TIME_BUDGET)
    }

    #[must_use]
    pub fn with_time_budget(mut self, time_budget: Duration) -> Self {
        self.time_budget = time_budget;
        self
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::default())
    }
}

impl From<Difficulty> for AgentConfig {
    fn from(difficulty: Difficulty) -> Self {
        Self::from_difficulty(difficulty)
    }
}
