use tracing::debug;

use crate::bot::Bot;
use crate::error::SimulationError;
use crate::game::{GameBoard, GameOutcome};

/// Result of playing a single game to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: GameOutcome,
    pub moves: usize,
}

/// Play one game to completion. `bots[i]` plays for seat `Player i+1`.
///
/// A game on a real board ends within `rows * cols` moves; exceeding that
/// (possible only with a stand-in board) is reported as an error.
pub fn play_game(
    board: &mut dyn GameBoard,
    bots: &mut [Box<dyn Bot>],
) -> Result<GameResult, SimulationError> {
    if bots.len() != board.num_players() {
        return Err(SimulationError::SeatMismatch {
            bots: bots.len(),
            seats: board.num_players(),
        });
    }

    let limit = board.rows() * board.cols();
    let mut moves = 0;

    while !board.is_terminal() {
        if moves >= limit {
            return Err(SimulationError::MoveLimitExceeded { limit });
        }
        let player = board.current_player();
        let column = bots[player.index()].choose_move(&*board, player)?;
        board.apply_move(column)?;
        moves += 1;
    }

    let outcome = board.outcome();
    debug!(?outcome, moves, "game finished");
    Ok(GameResult { outcome, moves })
}

/// Derive a deterministic seed for one bot in one game.
pub fn game_seed(base_seed: u64, game_index: usize, bot: usize) -> u64 {
    // FNV-1a-inspired mixing for deterministic, well-distributed seeds
    let mut hash = base_seed ^ 0x517cc1b727220a95;
    for word in [game_index as u64, bot as u64] {
        hash = hash.wrapping_mul(0x100000001b3);
        hash ^= word;
    }
    hash.wrapping_mul(0x100000001b3)
}
