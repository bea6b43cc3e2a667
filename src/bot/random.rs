use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::BotError;
use crate::game::{GameBoard, Player};

use super::agent::Bot;

/// A bot that selects uniformly at random from legal moves.
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    pub fn new() -> Self {
        RandomBot {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomBot {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick one of `moves` uniformly.
    pub(crate) fn pick(&mut self, moves: &[usize]) -> Result<usize, BotError> {
        if moves.is_empty() {
            return Err(BotError::NoLegalMoves);
        }
        let idx = self.rng.random_range(0..moves.len());
        Ok(moves[idx])
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Bot for RandomBot {
    fn choose_move(&mut self, board: &dyn GameBoard, _player: Player) -> Result<usize, BotError> {
        self.pick(&board.legal_moves())
    }

    fn name(&self) -> &str {
        "Random"
    }
}
