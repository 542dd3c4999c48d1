//! Shared test fixtures for QueenStep crates.
//!
//! Known-answer data for the N-Queens search (solution counts, the first
//! solution found by row-major ascending-column backtracking) plus board
//! assertion helpers used by the engine and controller test suites.

use queenstep_core::Board;

/// Total N-Queens solution counts per board size, `(size, count)`.
pub const KNOWN_SOLUTION_COUNTS: [(usize, u64); 5] =
    [(4, 2), (5, 10), (6, 4), (7, 40), (8, 92)];

/// Columns of the first solution found on a 4-board, indexed by row.
pub const FIRST_SOLUTION_N4: [usize; 4] = [1, 3, 0, 2];

/// Events emitted on a 4-board up to and including the first solution.
///
/// Hand-derived from the search order: place (0,0), place (1,2), dead end
/// at row 2, back out to (1,3), place (2,1), dead end at row 3, back out
/// of rows 2, 1, 0, then the solution line 1-3-0-2 goes straight through.
pub const FIRST_SOLUTION_N4_EVENT_COUNT: u64 = 13;

/// Builds a board with the given `(row, col)` placements.
pub fn board_with(size: usize, placements: &[(usize, usize)]) -> Board {
    let mut board = Board::unplaced(size);
    for &(row, col) in placements {
        board.place(row, col);
    }
    board
}

/// Builds a complete board from per-row columns.
pub fn board_from_columns(columns: &[usize]) -> Board {
    let mut board = Board::unplaced(columns.len());
    for (row, &col) in columns.iter().enumerate() {
        board.place(row, col);
    }
    board
}

/// Panics unless the board is a complete, conflict-free solution.
pub fn assert_valid_solution(board: &Board) {
    assert!(
        board.is_valid_solution(),
        "board is not a valid solution:\n{board}"
    );
}
