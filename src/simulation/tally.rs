use std::fmt;

use crate::bot::BotKind;

/// Win/tie counts for a two-bot match, indexed by bot rather than seat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub bot1_wins: u64,
    pub bot2_wins: u64,
    pub ties: u64,
    pub total_moves: u64,
}

impl Tally {
    /// Record a finished game. `winner` is the 0-based bot index.
    pub fn record(&mut self, winner: Option<usize>, moves: usize) {
        match winner {
            Some(0) => self.bot1_wins += 1,
            Some(_) => self.bot2_wins += 1,
            None => self.ties += 1,
        }
        self.total_moves += moves as u64;
    }

    /// Combine counts accumulated separately.
    pub fn merge(self, other: Tally) -> Tally {
        Tally {
            bot1_wins: self.bot1_wins + other.bot1_wins,
            bot2_wins: self.bot2_wins + other.bot2_wins,
            ties: self.ties + other.ties,
            total_moves: self.total_moves + other.total_moves,
        }
    }

    pub fn games(&self) -> u64 {
        self.bot1_wins + self.bot2_wins + self.ties
    }

    pub fn average_game_length(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            n => self.total_moves as f64 / n as f64,
        }
    }
}

/// Outcome of a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub player1: BotKind,
    pub player2: BotKind,
    pub tally: Tally,
}

impl SimulationReport {
    pub fn new(player1: BotKind, player2: BotKind, tally: Tally) -> Self {
        SimulationReport {
            player1,
            player2,
            tally,
        }
    }

    fn percent(&self, count: u64) -> f64 {
        match self.tally.games() {
            0 => 0.0,
            n => 100.0 * count as f64 / n as f64,
        }
    }

    pub fn bot1_win_pct(&self) -> f64 {
        self.percent(self.tally.bot1_wins)
    }

    pub fn bot2_win_pct(&self) -> f64 {
        self.percent(self.tally.bot2_wins)
    }

    pub fn tie_pct(&self) -> f64 {
        self.percent(self.tally.ties)
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bot 1 ({}) wins: {:.2}%", self.player1, self.bot1_win_pct())?;
        writeln!(f, "Bot 2 ({}) wins: {:.2}%", self.player2, self.bot2_win_pct())?;
        write!(f, "Ties: {:.2}%", self.tie_pct())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_games() {
        let mut tally = Tally::default();
        tally.record(Some(0), 10);
        tally.record(Some(1), 20);
        tally.record(None, 42);
        tally.record(Some(0), 8);

        assert_eq!(tally.bot1_wins, 2);
        assert_eq!(tally.bot2_wins, 1);
        assert_eq!(tally.ties, 1);
        assert_eq!(tally.games(), 4);
        assert!((tally.average_game_length() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_merge() {
        let mut a = Tally::default();
        a.record(Some(0), 5);
        let mut b = Tally::default();
        b.record(None, 7);
        b.record(Some(1), 9);

        let merged = a.merge(b);
        assert_eq!(merged.games(), 3);
        assert_eq!(merged.total_moves, 21);
        assert_eq!(merged, b.merge(a));
    }

    #[test]
    fn test_empty_tally() {
        let report = SimulationReport::new(BotKind::Random, BotKind::Smart, Tally::default());
        assert_eq!(report.bot1_win_pct(), 0.0);
        assert_eq!(Tally::default().average_game_length(), 0.0);
    }

    #[test]
    fn test_report_format() {
        let tally = Tally {
            bot1_wins: 1,
            bot2_wins: 2,
            ties: 0,
            total_moves: 30,
        };
        let report = SimulationReport::new(BotKind::Random, BotKind::Smart, tally);
        assert_eq!(
            report.to_string(),
            "Bot 1 (random-bot) wins: 33.33%\nBot 2 (smart-bot) wins: 66.67%\nTies: 0.00%"
        );
    }
}
