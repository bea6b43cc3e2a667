use rand::Rng;
use rayon::prelude::*;
use tracing::{info, instrument};

use crate::bot::{Bot, BotKind};
use crate::config::{BoardConfig, SimulationConfig};
use crate::error::{GameError, SimulationError};
use crate::game::{Board, GameBoard};

use super::game::{game_seed, play_game};
use super::tally::{SimulationReport, Tally};

/// Plays many bot-vs-bot games and tallies the results.
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        Simulation { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run every game on a fresh engine board built from `board`.
    pub fn run(&self, board: &BoardConfig) -> Result<SimulationReport, SimulationError> {
        // Reject a bad board before any worker starts.
        Board::from_config(board)?;
        self.run_with(|| Board::from_config(board))
    }

    /// Run every game on a fresh board from `make_board`, which may build any
    /// [`GameBoard`] implementation.
    #[instrument(skip_all, fields(games = self.config.num_games, threads = self.config.threads))]
    pub fn run_with<B, F>(&self, make_board: F) -> Result<SimulationReport, SimulationError>
    where
        B: GameBoard,
        F: Fn() -> Result<B, GameError> + Sync,
    {
        let base_seed = self.config.seed.unwrap_or_else(|| rand::rng().random());
        info!(
            player1 = %self.config.player1,
            player2 = %self.config.player2,
            base_seed,
            "starting simulation"
        );

        let tally = if self.config.threads == 1 {
            self.run_sequential(base_seed, &make_board)?
        } else {
            self.run_parallel(base_seed, &make_board)?
        };

        info!(
            bot1_wins = tally.bot1_wins,
            bot2_wins = tally.bot2_wins,
            ties = tally.ties,
            average_game_length = tally.average_game_length(),
            "simulation complete"
        );
        Ok(SimulationReport::new(
            self.config.player1,
            self.config.player2,
            tally,
        ))
    }

    fn run_sequential<B, F>(&self, base_seed: u64, make_board: &F) -> Result<Tally, SimulationError>
    where
        B: GameBoard,
        F: Fn() -> Result<B, GameError>,
    {
        let mut tally = Tally::default();
        for index in 0..self.config.num_games {
            let (winner, moves) = self.play_indexed(index, base_seed, make_board)?;
            tally.record(winner, moves);
        }
        Ok(tally)
    }

    /// Spread games over a rayon pool. Each worker folds its own tally and
    /// the partial tallies are reduced at the end.
    fn run_parallel<B, F>(&self, base_seed: u64, make_board: &F) -> Result<Tally, SimulationError>
    where
        B: GameBoard,
        F: Fn() -> Result<B, GameError> + Sync,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.threads)
            .build()?;

        pool.install(|| {
            (0..self.config.num_games)
                .into_par_iter()
                .map(|index| self.play_indexed(index, base_seed, make_board))
                .try_fold(Tally::default, |mut tally, game| {
                    let (winner, moves) = game?;
                    tally.record(winner, moves);
                    Ok::<_, SimulationError>(tally)
                })
                .try_reduce(Tally::default, |a, b| Ok(a.merge(b)))
        })
    }

    /// Play game number `index`. Returns the winning bot (0 or 1), if any,
    /// and the game length.
    fn play_indexed<B, F>(
        &self,
        index: usize,
        base_seed: u64,
        make_board: &F,
    ) -> Result<(Option<usize>, usize), SimulationError>
    where
        B: GameBoard,
        F: Fn() -> Result<B, GameError>,
    {
        let mut board = make_board()?;

        // seats[s] is the bot sitting in seat s
        let seats: [usize; 2] = if self.config.alternate_first && index % 2 == 1 {
            [1, 0]
        } else {
            [0, 1]
        };
        let kinds: [BotKind; 2] = [self.config.player1, self.config.player2];
        let mut bots: Vec<Box<dyn Bot>> = seats
            .iter()
            .map(|&bot| kinds[bot].build(Some(game_seed(base_seed, index, bot))))
            .collect();

        let result = play_game(&mut board, &mut bots)?;
        let winner = result.outcome.winner().map(|p| seats[p.index()]);
        Ok((winner, result.moves))
    }
}
