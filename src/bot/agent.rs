use std::fmt;
use std::str::FromStr;

use crate::error::BotError;
use crate::game::{GameBoard, Player};

use super::{RandomBot, SmartBot};

/// Universal interface for all bots.
pub trait Bot {
    /// Select a column for `player` on `board`. The board is only read.
    fn choose_move(&mut self, board: &dyn GameBoard, player: Player) -> Result<usize, BotError>;

    /// Return the bot's display name.
    fn name(&self) -> &str;
}

/// Which bot policy to seat; chosen by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum BotKind {
    #[serde(rename = "random-bot", alias = "random")]
    Random,
    #[serde(rename = "smart-bot", alias = "smart")]
    Smart,
}

impl BotKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BotKind::Random => "random-bot",
            BotKind::Smart => "smart-bot",
        }
    }

    /// Build a bot of this kind. With a seed its random choices are
    /// reproducible; otherwise it draws entropy from the OS.
    pub fn build(self, seed: Option<u64>) -> Box<dyn Bot> {
        let fallback = match seed {
            Some(seed) => RandomBot::seeded(seed),
            None => RandomBot::new(),
        };
        match self {
            BotKind::Random => Box::new(fallback),
            BotKind::Smart => Box::new(SmartBot::with_fallback(fallback)),
        }
    }
}

impl fmt::Display for BotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BotKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random-bot" | "random" => Ok(BotKind::Random),
            "smart-bot" | "smart" => Ok(BotKind::Smart),
            other => Err(format!(
                "unknown bot '{other}' (expected 'random-bot' or 'smart-bot')"
            )),
        }
    }
}
