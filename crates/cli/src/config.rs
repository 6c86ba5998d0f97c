//! Game settings: a TOML file, then command-line flags on top.

use std::path::Path;

use anyhow::Context;
use chess_core::Color;
use clap::{Args, ValueEnum};
use minimax_engine::MinimaxConfig;
use serde::{Deserialize, Serialize};
use strategy::{Strategy, StrategyKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Two humans share the keyboard.
    #[default]
    Manual,
    /// A human plays the computer.
    Ai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Color {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: Mode,
    pub engine: StrategyKind,
    /// Overrides `minimax.depth` when set.
    pub depth: Option<u8>,
    /// Seed for the random strategy; OS entropy when absent.
    pub seed: Option<u64>,
    pub computer_color: Side,
    pub minimax: MinimaxConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Manual,
            engine: StrategyKind::Minimax,
            depth: None,
            seed: None,
            computer_color: Side::Black,
            minimax: MinimaxConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Search settings with the top-level depth applied.
    pub fn minimax_config(&self) -> MinimaxConfig {
        let mut config = self.minimax;
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        config
    }

    pub fn strategy(&self) -> Strategy {
        match self.engine {
            StrategyKind::Random => Strategy::random(self.seed),
            StrategyKind::Minimax => Strategy::minimax(self.minimax_config()),
        }
    }

    /// The computer's colour, if it plays at all.
    pub fn computer(&self) -> Option<Color> {
        match self.mode {
            Mode::Manual => None,
            Mode::Ai => Some(self.computer_color.into()),
        }
    }

    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
        if let Some(engine) = overrides.engine {
            self.engine = engine;
        }
        if let Some(depth) = overrides.depth {
            self.depth = Some(depth);
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(side) = overrides.computer {
            self.computer_color = side;
        }
    }
}

/// Flags that take precedence over the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct Overrides {
    /// manual: two players; ai: play against the computer
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,
    /// Computer strategy: random or minimax
    #[arg(long)]
    pub engine: Option<StrategyKind>,
    /// Minimax search depth in plies
    #[arg(long)]
    pub depth: Option<u8>,
    /// Seed for the random strategy
    #[arg(long)]
    pub seed: Option<u64>,
    /// Colour the computer plays in ai mode
    #[arg(long, value_enum)]
    pub computer: Option<Side>,
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
