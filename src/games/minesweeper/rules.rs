//! Game rules for minesweeper: reveal, flood fill, and win/loss detection.

use super::types::{Board, Cell, GameStatus};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Outcome of one reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Safe cells were opened; the game continues.
    Revealed,
    /// The last safe cell was opened; the game is won.
    Won,
    /// A mine was hit; the game is lost.
    Lost,
}

/// Minesweeper game engine: one board, its opened mask, and the lifecycle
/// state.
///
/// The board never changes after construction; a reveal only flips entries
/// of the opened mask from `false` to `true` and re-evaluates the status.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    opened: Vec<bool>,
    revealed: usize,
    status: GameStatus,
}

impl Game {
    /// Creates a new active game over the given board with every cell
    /// unopened.
    #[instrument(skip(board), fields(width = board.width(), height = board.height(), mines = board.mines()))]
    pub fn new(board: Board) -> Self {
        let area = board.area();
        Self {
            board,
            opened: vec![false; area],
            revealed: 0,
            status: GameStatus::Active,
        }
    }

    /// The underlying board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current lifecycle state.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the game has ended in a win or a loss.
    pub fn completed(&self) -> bool {
        self.status.is_finished()
    }

    /// Whether the cell at `(row, col)` has been opened.
    pub fn is_opened(&self, row: u16, col: u16) -> bool {
        self.opened[self.board.index(row, col)]
    }

    /// Number of opened cells.
    pub fn opened_count(&self) -> usize {
        self.revealed
    }

    /// Reveals the cell at `(row, col)`.
    ///
    /// Callers must only pass in-bounds, unopened cells of a non-completed
    /// game; the registry enforces this before delegating here.
    ///
    /// Hitting a mine loses the game and opens the whole field. A safe
    /// reveal opens the target and, when its neighbor count is zero, flood
    /// fills the surrounding zero region. Once every safe cell is open the
    /// game is won and the remaining cells (the mines) are opened as well.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn reveal(&mut self, row: u16, col: u16) -> RevealOutcome {
        debug_assert!(!self.completed(), "reveal on a completed game");
        debug_assert!(!self.is_opened(row, col), "reveal on an opened cell");

        let index = self.board.index(row, col);
        if self.board.cell(index).is_mine() {
            self.open_all();
            self.status = GameStatus::Lost;
            debug!(row, col, "mine hit, game lost");
            return RevealOutcome::Lost;
        }

        self.flood_open(index);

        if self.revealed == self.board.safe_cells() {
            self.open_all();
            self.status = GameStatus::Won;
            debug!(row, col, "last safe cell opened, game won");
            RevealOutcome::Won
        } else {
            debug!(row, col, revealed = self.revealed, "cells opened");
            RevealOutcome::Revealed
        }
    }

    /// Opens `start` and every cell reachable from it through zero-count
    /// cells, using an explicit frontier. The opened mask doubles as the
    /// visited set, so no cell is processed twice.
    fn flood_open(&mut self, start: usize) {
        self.opened[start] = true;
        self.revealed += 1;

        if self.board.cell(start) != Cell::Safe(0) {
            return;
        }

        let mut frontier = VecDeque::from([start]);
        while let Some(index) = frontier.pop_front() {
            for neighbor in self.board.neighbors(index) {
                if self.opened[neighbor] {
                    continue;
                }
                self.opened[neighbor] = true;
                self.revealed += 1;

                // Neighbors of a zero-count cell are never mines, so the
                // fill can only expand through safe territory.
                if self.board.cell(neighbor) == Cell::Safe(0) {
                    frontier.push_back(neighbor);
                }
            }
        }
    }

    fn open_all(&mut self) {
        self.opened.fill(true);
        self.revealed = self.board.area();
    }
}
