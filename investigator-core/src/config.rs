//! Generation settings.

use crate::skills::Era;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default bound on consecutive allocator draws that place no points.
pub const DEFAULT_MAX_IDLE_DRAWS: u32 = 1000;

/// Rules variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameMode {
    #[default]
    Classic,
    Pulp,
}

impl GameMode {
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::Classic => "Classic",
            GameMode::Pulp => "Pulp",
        }
    }

    /// Highest value any skill may reach during generation.
    pub fn skill_limit(&self) -> i32 {
        match self {
            GameMode::Classic => 90,
            GameMode::Pulp => 95,
        }
    }

    /// `(CON + SIZ)` is divided by this to get hit points.
    pub fn hit_point_divisor(&self) -> i32 {
        match self {
            GameMode::Classic => 10,
            GameMode::Pulp => 5,
        }
    }

    pub fn is_pulp(&self) -> bool {
        matches!(self, GameMode::Pulp)
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub mode: GameMode,

    pub era: Era,

    /// Use this archetype instead of a random one. Ignored in classic mode.
    pub archetype: Option<String>,

    /// Use this occupation instead of a random one.
    pub occupation: Option<String>,

    /// The allocator gives up on a pool after this many consecutive draws
    /// that place nothing.
    pub max_idle_draws: u32,
}

impl GeneratorConfig {
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            era: Era::default(),
            archetype: None,
            occupation: None,
            max_idle_draws: DEFAULT_MAX_IDLE_DRAWS,
        }
    }

    pub fn classic() -> Self {
        Self::new(GameMode::Classic)
    }

    pub fn pulp() -> Self {
        Self::new(GameMode::Pulp)
    }

    pub fn with_era(mut self, era: Era) -> Self {
        self.era = era;
        self
    }

    pub fn with_archetype(mut self, name: impl Into<String>) -> Self {
        self.archetype = Some(name.into());
        self
    }

    pub fn with_occupation(mut self, name: impl Into<String>) -> Self {
        self.occupation = Some(name.into());
        self
    }

    pub fn with_max_idle_draws(mut self, draws: u32) -> Self {
        self.max_idle_draws = draws;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::classic()
    }
}
