//! Tests for the minesweeper engine through the public crate API.

use minesweeper_server::{Board, Cell, Game, GameStatus, RevealOutcome};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_maximal_board_flood_fills_without_recursion_limits() {
    // 30x30 with no mines: one reveal must open all 900 cells through the
    // explicit frontier.
    let mut game = Game::new(Board::with_mines(30, 30, &[]));

    assert_eq!(game.reveal(15, 15), RevealOutcome::Won);
    assert_eq!(game.opened_count(), 900);
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn test_generated_board_plays_to_loss_on_a_mine() {
    let mut rng = StdRng::seed_from_u64(9);
    let board = Board::generate(6, 6, 12, &mut rng);
    let mine = (0..board.area())
        .find(|&i| board.cell(i).is_mine())
        .expect("board has mines");
    let (row, col) = (mine / 6, mine % 6);
    let mut game = Game::new(board);

    assert_eq!(
        game.reveal(row as u16, col as u16),
        RevealOutcome::Lost
    );
    assert!(game.completed());
    assert_eq!(game.opened_count(), 36);
}

#[test]
fn test_mines_keep_their_identity_after_a_loss() {
    let board = Board::with_mines(3, 3, &[(1, 1)]);
    let mut game = Game::new(board);

    game.reveal(1, 1);

    assert_eq!(game.board().cell(game.board().index(1, 1)), Cell::Mine);
    assert_eq!(game.board().cell(game.board().index(0, 0)), Cell::Safe(1));
}

#[test]
fn test_disconnected_zero_regions_need_separate_reveals() {
    // A wall of mines in the middle column separates two zero regions.
    let board = Board::with_mines(5, 3, &[(0, 2), (1, 2), (2, 2)]);
    let mut game = Game::new(board);

    assert_eq!(game.reveal(1, 0), RevealOutcome::Revealed);
    assert!(game.is_opened(0, 0));
    assert!(game.is_opened(2, 1));
    assert!(!game.is_opened(0, 4), "far region stays closed");

    assert_eq!(game.reveal(1, 4), RevealOutcome::Won);
    assert!(game.is_opened(0, 4));
}
