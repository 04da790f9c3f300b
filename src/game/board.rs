use super::player::Token;
use crate::error::PlaceError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Token),
}

/// Coordinate of a placed token. Row 0 is the top, row 5 is the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Line orientations checked by the win detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Vertical = 0,
    Horizontal = 1,
    /// Top-left to bottom-right, `\`
    DiagonalDown = 2,
    /// Bottom-left to top-right, `/`
    DiagonalUp = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// The four shifted windows for this direction.
    pub fn windows(self) -> &'static [Window; 4] {
        &WINDOWS[self as usize]
    }
}

/// Four (row, col) offsets relative to the last placed token.
pub type Window = [(isize, isize); 4];

/// Every window contains (0, 0); the shift places the last token at position
/// 4, 3, 2 and 1 of the run respectively.
const WINDOWS: [[Window; 4]; 4] = [
    // Vertical
    [
        [(-3, 0), (-2, 0), (-1, 0), (0, 0)],
        [(-2, 0), (-1, 0), (0, 0), (1, 0)],
        [(-1, 0), (0, 0), (1, 0), (2, 0)],
        [(0, 0), (1, 0), (2, 0), (3, 0)],
    ],
    // Horizontal
    [
        [(0, -3), (0, -2), (0, -1), (0, 0)],
        [(0, -2), (0, -1), (0, 0), (0, 1)],
        [(0, -1), (0, 0), (0, 1), (0, 2)],
        [(0, 0), (0, 1), (0, 2), (0, 3)],
    ],
    // Diagonal down
    [
        [(-3, -3), (-2, -2), (-1, -1), (0, 0)],
        [(-2, -2), (-1, -1), (0, 0), (1, 1)],
        [(-1, -1), (0, 0), (1, 1), (2, 2)],
        [(0, 0), (1, 1), (2, 2), (3, 3)],
    ],
    // Diagonal up
    [
        [(3, -3), (2, -2), (1, -1), (0, 0)],
        [(2, -2), (1, -1), (0, 0), (-1, 1)],
        [(1, -1), (0, 0), (-1, 1), (-2, 2)],
        [(0, 0), (-1, 1), (-2, 2), (-3, 3)],
    ],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Rows from top to bottom, for rendering.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; COLS]> {
        self.cells.iter()
    }

    /// Check if a zero-based column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a token into a one-based column (1..=7), returning where it landed.
    pub fn place(&mut self, column: usize, token: Token) -> Result<Position, PlaceError> {
        if !(1..=COLS).contains(&column) {
            return Err(PlaceError::InvalidColumn(column));
        }

        let col = column - 1;
        if self.is_column_full(col) {
            return Err(PlaceError::ColumnFull(column));
        }

        // Find the lowest empty row in this column
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(PlaceError::ColumnFull(column))?;
        self.cells[row][col] = Cell::Occupied(token);

        Ok(Position { row, col })
    }

    /// Check whether `token` has four in a row through `last_move`.
    ///
    /// Without a last move there is nothing to anchor the search, so this
    /// returns false. Windows running off the board are skipped individually.
    pub fn has_four_in_a_row(&self, last_move: Option<Position>, token: Token) -> bool {
        let Some(anchor) = last_move else {
            return false;
        };

        Direction::ALL.iter().any(|direction| {
            direction
                .windows()
                .iter()
                .any(|window| self.window_matches(anchor, window, token))
        })
    }

    fn window_matches(&self, anchor: Position, window: &Window, token: Token) -> bool {
        window.iter().all(|&(dr, dc)| {
            match (
                anchor.row.checked_add_signed(dr),
                anchor.col.checked_add_signed(dc),
            ) {
                (Some(row), Some(col)) if row < ROWS && col < COLS => {
                    self.cells[row][col] == Cell::Occupied(token)
                }
                _ => false,
            }
        })
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
