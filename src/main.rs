use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use connect_m::bot::{Bot, BotKind};
use connect_m::config::AppConfig;
use connect_m::error::GameError;
use connect_m::game::{Board, GameBoard, GameOutcome, MockBoard, Player, TextBoard};

/// Which engine backs the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// The full rules engine
    Real,
    /// Scripted board that ends after M moves
    Mock,
}

/// Who sits in a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seat {
    Human,
    Bot(BotKind),
}

impl FromStr for Seat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("human") {
            return Ok(Seat::Human);
        }
        s.parse::<BotKind>()
            .map(Seat::Bot)
            .map_err(|_| format!("unknown seat '{s}' (expected human, random-bot or smart-bot)"))
    }
}

#[derive(Parser)]
#[command(name = "connect-m", about = "Play Connect-M in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-m.toml")]
    config: PathBuf,

    /// Number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Number of columns
    #[arg(long)]
    cols: Option<usize>,

    /// Pieces in a row needed to win
    #[arg(long)]
    m: Option<usize>,

    /// Board engine
    #[arg(long, value_enum, default_value_t = Mode::Real)]
    mode: Mode,

    /// Player 1: human, random-bot or smart-bot
    #[arg(long, default_value = "human")]
    player1: Seat,

    /// Player 2: human, random-bot or smart-bot
    #[arg(long, default_value = "human")]
    player2: Seat,

    /// Pause before a bot move, in milliseconds
    #[arg(long)]
    bot_delay_ms: Option<u64>,
}

struct Participant {
    name: String,
    bot: Option<Box<dyn Bot>>,
}

impl Participant {
    fn new(seat: Seat, player: Player) -> Self {
        match seat {
            Seat::Human => Participant {
                name: player.to_string(),
                bot: None,
            },
            Seat::Bot(kind) => {
                let label = match kind {
                    BotKind::Random => "Random Bot",
                    BotKind::Smart => "Smart Bot",
                };
                Participant {
                    name: format!("{label} {}", player.id()),
                    bot: Some(kind.build(None)),
                }
            }
        }
    }
}

enum Turn {
    Column(usize),
    Quit,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    let board_config = &mut app_config.board;
    if let Some(rows) = cli.rows {
        board_config.rows = rows;
    }
    if let Some(cols) = cli.cols {
        board_config.cols = cols;
    }
    if let Some(m) = cli.m {
        board_config.win_length = m;
    }
    board_config.num_players = 2;
    if let Some(delay) = cli.bot_delay_ms {
        app_config.play.bot_delay_ms = delay;
    }
    app_config.validate().context("invalid game settings")?;

    let board_config = &app_config.board;
    let mut board: Box<dyn GameBoard> = match cli.mode {
        Mode::Real => Box::new(Board::from_config(board_config)?),
        Mode::Mock => Box::new(MockBoard::ending_after_win_length(
            board_config.rows,
            board_config.cols,
            board_config.win_length,
        )),
    };
    info!(
        rows = board.rows(),
        cols = board.cols(),
        win_length = board.win_length(),
        mode = ?cli.mode,
        "starting game"
    );

    let mut participants = [
        Participant::new(cli.player1, Player::ONE),
        Participant::new(cli.player2, Player::TWO),
    ];
    let bot_delay = Duration::from_millis(app_config.play.bot_delay_ms);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    while !board.is_terminal() {
        println!("{}", TextBoard(&*board));

        let player = board.current_player();
        let participant = &mut participants[player.index()];
        let column = match participant.bot.as_mut() {
            Some(bot) => {
                thread::sleep(bot_delay);
                let column = bot.choose_move(&*board, player)?;
                println!("{}> {}", participant.name, column + 1);
                column
            }
            None => match read_human_move(&mut input, &participant.name, &*board)? {
                Turn::Column(column) => column,
                Turn::Quit => {
                    println!("Goodbye!");
                    return Ok(());
                }
            },
        };

        match board.apply_move(column) {
            Ok(_) => {}
            Err(err @ GameError::InvalidMove { .. }) => println!("{err}, try again"),
            Err(err) => return Err(err).context("applying move"),
        }
    }

    println!("{}", TextBoard(&*board));
    match board.outcome() {
        GameOutcome::Win(player) => {
            println!("The winner is {}!", participants[player.index()].name)
        }
        GameOutcome::Draw => println!("It's a tie!"),
        GameOutcome::InProgress => {}
    }
    Ok(())
}

/// Prompt until the human enters a column in range, or quits.
fn read_human_move(
    input: &mut impl BufRead,
    name: &str,
    board: &dyn GameBoard,
) -> Result<Turn> {
    let mut line = String::new();
    loop {
        print!("{name}> ");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(Turn::Quit);
        }
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("q") {
            return Ok(Turn::Quit);
        }

        match trimmed.parse::<usize>() {
            Ok(column) if (1..=board.cols()).contains(&column) => {
                return Ok(Turn::Column(column - 1));
            }
            _ => println!("Enter a column from 1 to {} (or q to quit)", board.cols()),
        }
    }
}
