//! Bot-vs-bot simulation: single-game driver, result tallies, and the
//! sequential or parallel runner.

mod game;
mod runner;
mod tally;

pub use game::{game_seed, play_game, GameResult};
pub use runner::Simulation;
pub use tally::{SimulationReport, Tally};
