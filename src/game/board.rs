use std::fmt;

use tracing::trace;

use super::grid::Grid;
use super::player::MAX_PLAYERS;
use super::{Cell, GameBoard, LegalMoves, Player};
use crate::config::BoardConfig;
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(p) => Some(p),
            _ => None,
        }
    }
}

/// The Connect-M game engine: an R x C gravity board won by K in a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    win_length: usize,
    num_players: usize,
    turn: Player,
    move_count: usize,
    last_move: Option<(usize, usize)>,
    outcome: GameOutcome,
}

impl Board {
    /// Create an empty board. Player 1 moves first.
    pub fn new(
        rows: usize,
        cols: usize,
        win_length: usize,
        num_players: usize,
    ) -> Result<Self, GameError> {
        if rows < 1 {
            return Err(GameError::InvalidConfiguration(
                "rows must be >= 1".into(),
            ));
        }
        if cols < 1 {
            return Err(GameError::InvalidConfiguration(
                "cols must be >= 1".into(),
            ));
        }
        if win_length < 2 {
            return Err(GameError::InvalidConfiguration(
                "win_length must be >= 2".into(),
            ));
        }
        if win_length > rows.max(cols) {
            return Err(GameError::InvalidConfiguration(format!(
                "win_length {win_length} does not fit on a {rows}x{cols} board"
            )));
        }
        if !(2..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameError::InvalidConfiguration(format!(
                "num_players must be in [2, {MAX_PLAYERS}]"
            )));
        }

        Ok(Board {
            grid: Grid::new(rows, cols),
            win_length,
            num_players,
            turn: Player::ONE,
            move_count: 0,
            last_move: None,
            outcome: GameOutcome::InProgress,
        })
    }

    pub fn from_config(config: &BoardConfig) -> Result<Self, GameError> {
        Board::new(
            config.rows,
            config.cols,
            config.win_length,
            config.num_players,
        )
    }

    /// Position (row, col) of the most recently placed piece.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Remove all pieces and start over with Player 1.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.turn = Player::ONE;
        self.move_count = 0;
        self.last_move = None;
        self.outcome = GameOutcome::InProgress;
    }
}

impl GameBoard for Board {
    fn rows(&self) -> usize {
        self.grid.rows()
    }

    fn cols(&self) -> usize {
        self.grid.cols()
    }

    fn win_length(&self) -> usize {
        self.win_length
    }

    fn num_players(&self) -> usize {
        self.num_players
    }

    fn current_player(&self) -> Player {
        self.turn
    }

    fn move_count(&self) -> usize {
        self.move_count
    }

    fn piece_at(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        self.grid
            .get(row, col)
            .ok_or(GameError::OutOfBounds { row, col })
    }

    fn legal_moves(&self) -> LegalMoves {
        if self.outcome.is_terminal() {
            return LegalMoves::new();
        }

        (0..self.grid.cols())
            .filter(|&col| !self.grid.is_column_full(col))
            .collect()
    }

    fn can_drop(&self, column: usize) -> bool {
        !self.outcome.is_terminal() && !self.grid.is_column_full(column)
    }

    fn drop_wins(&self, column: usize, player: Player) -> bool {
        if !self.can_drop(column) {
            return false;
        }

        // Speculate on a scratch copy so the real grid is never touched.
        let mut scratch = self.grid.clone();
        match scratch.drop_piece(column, player.to_cell()) {
            Ok(row) => scratch.completes_line(row, column, self.win_length),
            Err(_) => false,
        }
    }

    fn apply_move(&mut self, column: usize) -> Result<usize, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver);
        }

        let player = self.turn;
        let row = self.grid.drop_piece(column, player.to_cell())?;
        self.move_count += 1;
        self.last_move = Some((row, column));

        if self.grid.completes_line(row, column, self.win_length) {
            self.outcome = GameOutcome::Win(player);
        } else if self.grid.is_full() {
            self.outcome = GameOutcome::Draw;
        }

        self.turn = player.next(self.num_players);
        trace!(%player, column, row, outcome = ?self.outcome, "applied move");

        Ok(row)
    }

    fn outcome(&self) -> GameOutcome {
        self.outcome
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&TextBoard(self), f)
    }
}

/// Plain-text view of any [`GameBoard`]: top row first, `.` for empty
/// cells, and 1-indexed column labels underneath.
pub struct TextBoard<'a>(pub &'a dyn GameBoard);

impl fmt::Display for TextBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let cols = board.cols();
        let border = format!("+{}+", "-".repeat(cols * 2 + 1));

        writeln!(f, "{border}")?;
        for row in (0..board.rows()).rev() {
            write!(f, "|")?;
            for col in 0..cols {
                let cell = board.piece_at(row, col).unwrap_or_default();
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "{border}")?;

        write!(f, " ")?;
        for col in 0..cols {
            write!(f, " {}", (col + 1) % 10)?;
        }
        Ok(())
    }
}
