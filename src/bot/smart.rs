use tracing::debug;

use crate::error::BotError;
use crate::game::{GameBoard, Player};

use super::agent::Bot;
use super::random::RandomBot;

/// One-ply lookahead bot.
///
/// Takes a winning column if it has one, otherwise blocks a column where an
/// opponent would win, otherwise plays at random. Ties go to the lowest
/// column index.
pub struct SmartBot {
    fallback: RandomBot,
}

impl SmartBot {
    pub fn new() -> Self {
        Self::with_fallback(RandomBot::new())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_fallback(RandomBot::seeded(seed))
    }

    pub fn with_fallback(fallback: RandomBot) -> Self {
        SmartBot { fallback }
    }
}

impl Default for SmartBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Bot for SmartBot {
    fn choose_move(&mut self, board: &dyn GameBoard, player: Player) -> Result<usize, BotError> {
        let legal = board.legal_moves();
        if legal.is_empty() {
            return Err(BotError::NoLegalMoves);
        }

        if let Some(&col) = legal.iter().find(|&&col| board.drop_wins(col, player)) {
            debug!(%player, col, "taking winning column");
            return Ok(col);
        }

        let opponents = board.opponents(player);
        if let Some(&col) = legal
            .iter()
            .find(|&&col| opponents.iter().any(|&opp| board.drop_wins(col, opp)))
        {
            debug!(%player, col, "blocking opponent");
            return Ok(col);
        }

        let col = self.fallback.pick(&legal)?;
        debug!(%player, col, "no threats, playing at random");
        Ok(col)
    }

    fn name(&self) -> &str {
        "Smart"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, BoardCall, MockBoard};

    fn board_after(columns: &[usize]) -> Board {
        let mut board = Board::new(6, 7, 4, 2).unwrap();
        for &col in columns {
            board.apply_move(col).unwrap();
        }
        board
    }

    #[test]
    fn test_takes_winning_column() {
        let mut bot = SmartBot::new();
        let board = MockBoard::new(6, 7, 4).with_winning(&[
            None,
            None,
            Some(Player::ONE),
            None,
            Some(Player::TWO),
            None,
            Some(Player::TWO),
        ]);

        assert_eq!(bot.choose_move(&board, Player::ONE), Ok(2));
    }

    #[test]
    fn test_prefers_win_over_lower_block() {
        let mut bot = SmartBot::new();
        let board = MockBoard::new(6, 7, 4).with_winning(&[
            None,
            Some(Player::TWO),
            None,
            None,
            None,
            Some(Player::ONE),
        ]);

        assert_eq!(bot.choose_move(&board, Player::ONE), Ok(5));
    }

    #[test]
    fn test_blocks_lowest_threat() {
        let mut bot = SmartBot::new();
        let board = MockBoard::new(6, 7, 4).with_winning(&[
            None,
            None,
            None,
            None,
            Some(Player::TWO),
            None,
            Some(Player::TWO),
        ]);

        assert_eq!(bot.choose_move(&board, Player::ONE), Ok(4));
    }

    #[test]
    fn test_ignores_threats_in_blocked_columns() {
        let mut bot = SmartBot::seeded(5);
        let board = MockBoard::new(6, 7, 4)
            .with_droppable(&[true, true, true, false, true, true, true])
            .with_winning(&[None, None, None, Some(Player::ONE), None, None, Some(Player::TWO)]);

        assert_eq!(bot.choose_move(&board, Player::ONE), Ok(6));
    }

    #[test]
    fn test_blocks_any_opponent() {
        let mut bot = SmartBot::new();
        let third = Player::new(3).unwrap();
        let board = MockBoard::new(6, 7, 4).with_players(3).with_winning(&[
            None,
            Some(third),
            None,
            None,
            None,
            None,
            Some(Player::TWO),
        ]);

        assert_eq!(bot.choose_move(&board, Player::ONE), Ok(1));
    }

    #[test]
    fn test_falls_back_to_legal_random_column() {
        let mut bot = SmartBot::seeded(6);
        let board =
            MockBoard::new(6, 7, 4).with_droppable(&[true, true, false, true, false, true, true]);

        for _ in 0..100 {
            let col = bot.choose_move(&board, Player::ONE).unwrap();
            assert!([0, 1, 3, 5, 6].contains(&col), "column {col} is not droppable");
        }
    }

    #[test]
    fn test_never_applies_moves() {
        let mut bot = SmartBot::new();
        let board = MockBoard::new(6, 7, 4).with_winning(&[None, None, None, Some(Player::TWO)]);

        bot.choose_move(&board, Player::ONE).unwrap();
        let calls = board.calls();
        assert!(!calls.is_empty());
        assert!(calls.iter().all(|c| !matches!(c, BoardCall::ApplyMove(_))));
        assert_eq!(board.move_count(), 0);
    }

    #[test]
    fn test_completes_vertical_win_on_real_board() {
        let mut bot = SmartBot::new();
        // Player 1 has three in column 3 and is to move.
        let board = board_after(&[3, 2, 3, 2, 3, 0]);
        let before = board.clone();

        let col = bot.choose_move(&board, Player::ONE).unwrap();
        assert_eq!(col, 3);
        assert_eq!(board, before);

        let mut after = board;
        after.apply_move(col).unwrap();
        assert_eq!(after.outcome().winner(), Some(Player::ONE));
    }

    #[test]
    fn test_blocks_only_threat_on_real_board() {
        let mut bot = SmartBot::new();
        // Player 2 to move, cannot win, and player 1 threatens column 3.
        let board = board_after(&[3, 2, 3, 2, 3]);
        let before = board.clone();

        assert_eq!(bot.choose_move(&board, Player::TWO), Ok(3));
        assert_eq!(board, before);
    }

    #[test]
    fn test_no_legal_moves_on_finished_board() {
        let mut bot = SmartBot::new();
        let board = board_after(&[0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(
            bot.choose_move(&board, Player::TWO),
            Err(BotError::NoLegalMoves)
        );
    }
}
