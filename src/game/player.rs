use std::fmt;

/// Largest number of seats a board supports.
pub const MAX_PLAYERS: usize = 10;

const SYMBOLS: [char; MAX_PLAYERS] = ['X', 'O', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

/// A seat at the table, numbered from 1. Player 1 always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Player(u8);

impl Player {
    pub const ONE: Player = Player(1);
    pub const TWO: Player = Player(2);

    /// Create a player from its 1-based id. Returns `None` for 0 or ids
    /// beyond `MAX_PLAYERS`.
    pub fn new(id: usize) -> Option<Player> {
        if (1..=MAX_PLAYERS).contains(&id) {
            Some(Player(id as u8))
        } else {
            None
        }
    }

    /// Player from a 0-based seat index.
    pub(crate) fn from_index(index: usize) -> Player {
        debug_assert!(index < MAX_PLAYERS);
        Player(index as u8 + 1)
    }

    pub fn id(self) -> usize {
        self.0 as usize
    }

    /// 0-based seat index.
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// The player who moves after this one (round-robin).
    pub fn next(self, num_players: usize) -> Player {
        Player::from_index(self.id() % num_players)
    }

    /// Character used when printing a board.
    pub fn symbol(self) -> char {
        SYMBOLS[self.index()]
    }

    pub fn to_cell(self) -> Cell {
        Cell::Piece(self)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Piece(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Piece(p) => Some(p),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Piece(p) => p.symbol(),
        }
    }
}
