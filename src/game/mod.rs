//! Core Connect-M game logic: grid storage with gravity, players, the board
//! state machine, the [`GameBoard`] contract, and test doubles for it.

mod board;
pub mod doubles;
mod grid;
mod player;
mod traits;

pub use board::{Board, GameOutcome, TextBoard};
pub use doubles::{BoardCall, MockBoard, StubBoard};
pub use player::{Cell, Player, MAX_PLAYERS};
pub use traits::{GameBoard, LegalMoves};
