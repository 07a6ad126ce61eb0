//! Core domain types for minesweeper.

use rand::Rng;
use tracing::instrument;

/// Largest supported field dimension on either axis.
pub const MAX_DIMENSION: u16 = 30;

/// Offsets of the 8-neighborhood around a cell, row-major.
static NEIGHBORHOOD: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One cell of a generated board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// The cell contains a mine.
    Mine,
    /// Safe cell with the number of mines among its neighbors (0-8).
    Safe(u8),
}

impl Cell {
    /// Whether this cell is a mine.
    pub fn is_mine(self) -> bool {
        matches!(self, Cell::Mine)
    }
}

/// Lifecycle state of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game accepts turns.
    Active,
    /// A mine was revealed; terminal.
    Lost,
    /// Every safe cell was revealed; terminal.
    Won,
}

impl GameStatus {
    /// Whether the game has reached a terminal state.
    pub fn is_finished(self) -> bool {
        matches!(self, GameStatus::Lost | GameStatus::Won)
    }
}

/// Immutable minefield: mine placement plus precomputed neighbor counts.
///
/// Cells are stored flat in row-major order (`row * width + col`). Counts
/// are computed once at construction; reveals never recompute them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    mines: u16,
    cells: Vec<Cell>,
}

impl Board {
    /// Generates a board by placing `mines` distinct mines uniformly at
    /// random, then counting mined neighbors for every safe cell.
    ///
    /// Sampling rejects already-mined positions until the requested count is
    /// placed, so callers must leave at least one safe cell
    /// (`mines <= width * height - 1`).
    #[instrument(skip(rng))]
    pub fn generate(width: u16, height: u16, mines: u16, rng: &mut impl Rng) -> Self {
        debug_assert!(width >= 1 && height >= 1);
        debug_assert!((mines as usize) < width as usize * height as usize);

        let area = width as usize * height as usize;
        let mut mined = vec![false; area];
        let mut placed = 0;

        while placed < mines {
            let row = rng.gen_range(0..height);
            let col = rng.gen_range(0..width);
            let index = row as usize * width as usize + col as usize;

            if !mined[index] {
                mined[index] = true;
                placed += 1;
            }
        }

        Self::from_mine_mask(width, height, mines, &mined)
    }

    /// Builds a board with mines at exactly the given `(row, col)` positions.
    ///
    /// Deterministic counterpart of [`Board::generate`] for callers that need
    /// a fixed layout. Positions must be in bounds and distinct.
    pub fn with_mines(width: u16, height: u16, mine_positions: &[(u16, u16)]) -> Self {
        let area = width as usize * height as usize;
        let mut mined = vec![false; area];

        for &(row, col) in mine_positions {
            assert!(
                row < height && col < width,
                "mine position ({row}, {col}) outside {width}x{height} board"
            );
            let index = row as usize * width as usize + col as usize;
            assert!(!mined[index], "duplicate mine position ({row}, {col})");
            mined[index] = true;
        }

        Self::from_mine_mask(width, height, mine_positions.len() as u16, &mined)
    }

    fn from_mine_mask(width: u16, height: u16, mines: u16, mined: &[bool]) -> Self {
        let mut board = Self {
            width,
            height,
            mines,
            cells: vec![Cell::Safe(0); mined.len()],
        };

        for index in 0..mined.len() {
            board.cells[index] = if mined[index] {
                Cell::Mine
            } else {
                let count = board.neighbors(index).filter(|&n| mined[n]).count();
                Cell::Safe(count as u8)
            };
        }

        board
    }

    /// Field width in cells.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Field height in cells.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of mines on the board.
    pub fn mines(&self) -> u16 {
        self.mines
    }

    /// Total number of cells.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of cells that carry no mine.
    pub fn safe_cells(&self) -> usize {
        self.area() - self.mines as usize
    }

    /// Whether `(row, col)` lies on the board.
    pub fn contains(&self, row: u16, col: u16) -> bool {
        row < self.height && col < self.width
    }

    /// Flat index of an in-bounds `(row, col)` position.
    pub fn index(&self, row: u16, col: u16) -> usize {
        debug_assert!(self.contains(row, col));
        row as usize * self.width as usize + col as usize
    }

    /// The cell at a flat index.
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Flat indices of the up-to-8 in-bounds neighbors of a cell.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> {
        let width = self.width as i32;
        let height = self.height as i32;
        let row = index as i32 / width;
        let col = index as i32 % width;

        NEIGHBORHOOD.iter().filter_map(move |&(row_off, col_off)| {
            let r = row + row_off;
            let c = col + col_off;
            (r >= 0 && r < height && c >= 0 && c < width).then(|| (r * width + c) as usize)
        })
    }
}
