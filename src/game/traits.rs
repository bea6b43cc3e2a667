use super::{Cell, GameOutcome, Player};
use crate::error::GameError;

/// Columns that can currently take a piece, in ascending order.
pub type LegalMoves = Vec<usize>;

/// The read/mutate contract of a Connect-M board.
///
/// Implemented by the real engine ([`Board`](super::Board)) and by the test
/// doubles in [`doubles`](super::doubles). Bots only ever receive
/// `&dyn GameBoard`, so they can query but never mutate.
pub trait GameBoard {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    fn win_length(&self) -> usize;
    fn num_players(&self) -> usize;

    /// The player whose turn it is.
    fn current_player(&self) -> Player;

    /// Number of moves applied so far.
    fn move_count(&self) -> usize;

    /// Read a cell. Row 0 is the bottom row.
    fn piece_at(&self, row: usize, col: usize) -> Result<Cell, GameError>;

    /// Columns that are not full. Empty once the game is over.
    fn legal_moves(&self) -> LegalMoves;

    /// Whether `column` can take a piece right now.
    fn can_drop(&self, column: usize) -> bool {
        self.legal_moves().contains(&column)
    }

    /// Whether dropping `player`'s piece into `column` now would win,
    /// regardless of whose turn it is. `false` if the column cannot take a
    /// piece. Must not change the board.
    fn drop_wins(&self, column: usize, player: Player) -> bool;

    /// Drop the current player's piece into `column` and pass the turn.
    /// Returns the row the piece landed on.
    fn apply_move(&mut self, column: usize) -> Result<usize, GameError>;

    fn outcome(&self) -> GameOutcome;

    fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Every other seat, in turn order starting after `player`.
    fn opponents(&self, player: Player) -> Vec<Player> {
        let n = self.num_players();
        (1..n)
            .map(|offset| Player::from_index((player.index() + offset) % n))
            .collect()
    }
}
