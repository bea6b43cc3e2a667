//! Stand-in boards implementing [`GameBoard`] so bots, the simulation
//! harness, and front ends can be exercised without the real engine.

use std::cell::RefCell;

use super::{Cell, GameBoard, GameOutcome, LegalMoves, Player};
use crate::error::{GameError, InvalidMoveReason};

/// A board frozen in its opening state: every column accepts a piece, no
/// drop ever wins, and applied moves are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubBoard {
    rows: usize,
    cols: usize,
    win_length: usize,
}

impl StubBoard {
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Self {
        StubBoard {
            rows,
            cols,
            win_length,
        }
    }
}

impl GameBoard for StubBoard {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn win_length(&self) -> usize {
        self.win_length
    }

    fn num_players(&self) -> usize {
        2
    }

    fn current_player(&self) -> Player {
        Player::ONE
    }

    fn move_count(&self) -> usize {
        0
    }

    fn piece_at(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        if row < self.rows && col < self.cols {
            Ok(Cell::Empty)
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }

    fn legal_moves(&self) -> LegalMoves {
        (0..self.cols).collect()
    }

    fn drop_wins(&self, _column: usize, _player: Player) -> bool {
        false
    }

    fn apply_move(&mut self, column: usize) -> Result<usize, GameError> {
        if column >= self.cols {
            return Err(GameError::InvalidMove {
                column,
                reason: InvalidMoveReason::OutOfRange,
            });
        }
        Ok(0)
    }

    fn outcome(&self) -> GameOutcome {
        GameOutcome::InProgress
    }
}

/// A call made against a [`MockBoard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardCall {
    PieceAt { row: usize, col: usize },
    LegalMoves,
    CanDrop(usize),
    DropWins { column: usize, player: Player },
    ApplyMove(usize),
    Outcome,
}

/// A scripted board that records every call made against it.
///
/// Only the bottom row is ever filled: an applied move occupies the bottom
/// cell of its column, which then stops accepting pieces. Which columns
/// accept pieces, which drops would win, and when the game ends are all
/// scripted up front.
#[derive(Debug, Clone)]
pub struct MockBoard {
    rows: usize,
    cols: usize,
    win_length: usize,
    num_players: usize,
    droppable: Vec<bool>,
    winning: Vec<Option<Player>>,
    ending: Option<(usize, GameOutcome)>,
    bottom: Vec<Cell>,
    turn: Player,
    move_count: usize,
    calls: RefCell<Vec<BoardCall>>,
}

impl MockBoard {
    /// Two players, every column droppable, no winning drops, never ends on
    /// its own.
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Self {
        MockBoard {
            rows,
            cols,
            win_length,
            num_players: 2,
            droppable: vec![true; cols],
            winning: vec![None; cols],
            ending: None,
            bottom: vec![Cell::Empty; cols],
            turn: Player::ONE,
            move_count: 0,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A game that ends after `win_length` moves, won by whoever made the
    /// last of them.
    pub fn ending_after_win_length(rows: usize, cols: usize, win_length: usize) -> Self {
        let winner = Player::from_index((win_length - 1) % 2);
        MockBoard::new(rows, cols, win_length).ending_after(win_length, GameOutcome::Win(winner))
    }

    /// Script which columns accept a piece. Missing entries are `false`.
    pub fn with_droppable(mut self, droppable: &[bool]) -> Self {
        self.droppable = droppable.to_vec();
        self.droppable.resize(self.cols, false);
        self
    }

    /// Script which player (if any) would win by dropping in each column.
    pub fn with_winning(mut self, winning: &[Option<Player>]) -> Self {
        self.winning = winning.to_vec();
        self.winning.resize(self.cols, None);
        self
    }

    pub fn with_players(mut self, num_players: usize) -> Self {
        self.num_players = num_players;
        self
    }

    /// Script the outcome reported once `moves` moves have been applied.
    pub fn ending_after(mut self, moves: usize, outcome: GameOutcome) -> Self {
        self.ending = Some((moves, outcome));
        self
    }

    /// Every call recorded so far, oldest first.
    pub fn calls(&self) -> Vec<BoardCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: BoardCall) {
        self.calls.borrow_mut().push(call);
    }

    fn accepts(&self, column: usize) -> bool {
        column < self.cols && self.droppable[column] && self.bottom[column].is_empty()
    }

    fn scripted_outcome(&self) -> GameOutcome {
        match self.ending {
            Some((moves, outcome)) if self.move_count >= moves => outcome,
            _ if (0..self.cols).all(|c| !self.accepts(c)) => GameOutcome::Draw,
            _ => GameOutcome::InProgress,
        }
    }
}

impl GameBoard for MockBoard {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
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
        self.record(BoardCall::PieceAt { row, col });
        if row >= self.rows || col >= self.cols {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(if row == 0 { self.bottom[col] } else { Cell::Empty })
    }

    fn legal_moves(&self) -> LegalMoves {
        self.record(BoardCall::LegalMoves);
        if self.scripted_outcome().is_terminal() {
            return LegalMoves::new();
        }
        (0..self.cols).filter(|&c| self.accepts(c)).collect()
    }

    fn can_drop(&self, column: usize) -> bool {
        self.record(BoardCall::CanDrop(column));
        !self.scripted_outcome().is_terminal() && self.accepts(column)
    }

    fn drop_wins(&self, column: usize, player: Player) -> bool {
        self.record(BoardCall::DropWins { column, player });
        self.accepts(column) && self.winning[column] == Some(player)
    }

    fn apply_move(&mut self, column: usize) -> Result<usize, GameError> {
        self.record(BoardCall::ApplyMove(column));
        if self.scripted_outcome().is_terminal() {
            return Err(GameError::GameOver);
        }
        if column >= self.cols {
            return Err(GameError::InvalidMove {
                column,
                reason: InvalidMoveReason::OutOfRange,
            });
        }
        if !self.accepts(column) {
            return Err(GameError::InvalidMove {
                column,
                reason: InvalidMoveReason::ColumnFull,
            });
        }

        self.bottom[column] = self.turn.to_cell();
        self.move_count += 1;
        self.turn = self.turn.next(self.num_players);
        Ok(0)
    }

    fn outcome(&self) -> GameOutcome {
        self.record(BoardCall::Outcome);
        self.scripted_outcome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_is_frozen() {
        let mut stub = StubBoard::new(6, 7, 4);
        assert_eq!(stub.apply_move(3), Ok(0));
        assert_eq!(stub.move_count(), 0);
        assert_eq!(stub.piece_at(0, 3), Ok(Cell::Empty));
        assert_eq!(stub.legal_moves().len(), 7);
        assert_eq!(stub.outcome(), GameOutcome::InProgress);
        assert!(!stub.drop_wins(3, Player::ONE));
    }

    #[test]
    fn test_stub_rejects_out_of_range() {
        let mut stub = StubBoard::new(6, 7, 4);
        assert!(matches!(
            stub.apply_move(7),
            Err(GameError::InvalidMove { column: 7, .. })
        ));
        assert_eq!(
            stub.piece_at(6, 0),
            Err(GameError::OutOfBounds { row: 6, col: 0 })
        );
    }

    #[test]
    fn test_mock_scripted_responses() {
        let mock = MockBoard::new(6, 7, 4)
            .with_droppable(&[true, true, false, true, false, true, true])
            .with_winning(&[None, None, None, Some(Player::TWO)]);

        assert_eq!(mock.legal_moves(), vec![0, 1, 3, 5, 6]);
        assert!(mock.drop_wins(3, Player::TWO));
        assert!(!mock.drop_wins(3, Player::ONE));
        assert!(!mock.can_drop(2));
    }

    #[test]
    fn test_mock_records_calls() {
        let mut mock = MockBoard::new(6, 7, 4);
        mock.legal_moves();
        mock.drop_wins(1, Player::ONE);
        mock.apply_move(1).unwrap();

        assert_eq!(
            mock.calls(),
            vec![
                BoardCall::LegalMoves,
                BoardCall::DropWins {
                    column: 1,
                    player: Player::ONE
                },
                BoardCall::ApplyMove(1),
            ]
        );
        mock.clear_calls();
        assert!(mock.calls().is_empty());
    }

    #[test]
    fn test_mock_fills_bottom_row_only() {
        let mut mock = MockBoard::new(6, 3, 2);
        mock.apply_move(1).unwrap();
        assert_eq!(mock.piece_at(0, 1), Ok(Cell::Piece(Player::ONE)));
        assert_eq!(mock.current_player(), Player::TWO);
        assert_eq!(
            mock.apply_move(1),
            Err(GameError::InvalidMove {
                column: 1,
                reason: InvalidMoveReason::ColumnFull
            })
        );

        mock.apply_move(0).unwrap();
        mock.apply_move(2).unwrap();
        assert_eq!(mock.outcome(), GameOutcome::Draw);
        assert!(mock.legal_moves().is_empty());
    }

    #[test]
    fn test_mock_ending_after_win_length() {
        let mut even = MockBoard::ending_after_win_length(6, 7, 4);
        for col in 0..4 {
            assert!(!even.is_terminal());
            even.apply_move(col).unwrap();
        }
        assert_eq!(even.outcome(), GameOutcome::Win(Player::TWO));
        assert_eq!(even.apply_move(5), Err(GameError::GameOver));

        let mut odd = MockBoard::ending_after_win_length(6, 7, 3);
        for col in 0..3 {
            odd.apply_move(col).unwrap();
        }
        assert_eq!(odd.outcome(), GameOutcome::Win(Player::ONE));
    }
}
