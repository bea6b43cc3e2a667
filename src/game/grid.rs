use super::player::Cell;
use crate::error::{GameError, InvalidMoveReason};

/// Line directions as (row step, column step): horizontal, vertical,
/// diagonal up-right, diagonal down-right. Each is walked both ways.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Raw cell storage with gravity. Row 0 is the bottom row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    // Number of pieces in each column; also the row the next piece lands on.
    heights: Vec<usize>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            heights: vec![0; cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a position, or `None` if it is off the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    fn get_signed(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    /// Check if a column is full. Columns off the grid count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= self.cols || self.heights[col] == self.rows
    }

    /// Check if every column is full
    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h == self.rows)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, GameError> {
        if col >= self.cols {
            return Err(GameError::InvalidMove {
                column: col,
                reason: InvalidMoveReason::OutOfRange,
            });
        }
        if self.is_column_full(col) {
            return Err(GameError::InvalidMove {
                column: col,
                reason: InvalidMoveReason::ColumnFull,
            });
        }

        let row = self.heights[col];
        self.cells[row * self.cols + col] = cell;
        self.heights[col] += 1;
        Ok(row)
    }

    /// Check whether the piece at (row, col) is part of a line of at least
    /// `win_length` identical pieces.
    pub fn completes_line(&self, row: usize, col: usize, win_length: usize) -> bool {
        let cell = match self.get(row, col) {
            Some(c) if !c.is_empty() => c,
            _ => return false,
        };

        DIRECTIONS.iter().any(|&(dr, dc)| {
            let forward = self.count_run(row, col, dr, dc, cell, win_length - 1);
            let backward = self.count_run(row, col, -dr, -dc, cell, win_length - 1);
            1 + forward + backward >= win_length
        })
    }

    /// Count consecutive `cell`s starting next to (row, col) in one
    /// direction, stopping after `limit`.
    fn count_run(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
        cell: Cell,
        limit: usize,
    ) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while count < limit && self.get_signed(r, c) == Some(cell) {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    /// Remove every piece.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
        self.heights.fill(0);
    }
}
