//! Stepping backtracking search over row-major queen placements.

use queenstep_core::{validate_board_size, Board, ConflictSets, Result, SearchEvent};

/// Where the cursor machine resumes on the next `advance()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Trying columns at the cursor row, starting from the cursor column.
    Descend,
    /// The subtree below the cursor row is exhausted; pop the placement
    /// above it, emit its removal, and resume that row at the next column.
    Unwind,
}

/// A resumable N-Queens backtracking search.
///
/// The recursion of the classic algorithm is replaced by an explicit
/// cursor: the placed queens double as the call stack (rows below the
/// cursor each hold one), `row`/`col` mark the next column to try, and
/// [`Mode`] records whether the machine is pushing deeper or popping back
/// out. Each [`advance`](SearchEngine::advance) runs until it produces
/// exactly one event:
///
/// - a feasible column at the cursor row places a queen, emits `Place`,
///   and descends;
/// - a cursor past the last row emits `Solution`, then unwinds;
/// - a row with no feasible column unwinds: the placement above is popped
///   with a `Remove` event and its row resumes one column further.
///
/// Columns are tried in ascending order, rows top-down, so for a fixed
/// size the event sequence is fully deterministic. After the last event
/// `advance` returns `None` forever and the conflict sets are empty.
///
/// # Example
///
/// ```
/// use queenstep_engine::{SearchEngine, SearchEvent};
///
/// let mut engine = SearchEngine::new(4)?;
/// let first = engine.advance();
/// assert!(matches!(first, Some(SearchEvent::Place { row: 0, col: 0, .. })));
///
/// let solutions = engine.filter(|event| event.is_solution()).count();
/// assert_eq!(solutions, 2);
/// # Ok::<(), queenstep_core::QueenStepError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SearchEngine {
    board: Board,
    conflicts: ConflictSets,
    row: usize,
    col: usize,
    mode: Mode,
    exhausted: bool,
}

impl SearchEngine {
    /// Creates an engine for an N x N board.
    ///
    /// # Errors
    ///
    /// Returns [`QueenStepError::InvalidSize`](queenstep_core::QueenStepError)
    /// if `size` is outside the supported range; no search state is built
    /// and no event can ever be produced from an invalid size.
    pub fn new(size: usize) -> Result<Self> {
        validate_board_size(size)?;
        tracing::debug!(size, "search engine created");
        Ok(Self {
            board: Board::unplaced(size),
            conflicts: ConflictSets::new(size),
            row: 0,
            col: 0,
            mode: Mode::Descend,
            exhausted: false,
        })
    }

    /// Returns the board size this engine searches.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Returns true once the whole search tree has been explored.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Advances the search by exactly one event.
    ///
    /// Returns `None` only at total exhaustion. Calling again after `None`
    /// keeps returning `None`; calling after a pause of any length
    /// continues from the suspended position.
    pub fn advance(&mut self) -> Option<SearchEvent> {
        let n = self.board.size();
        loop {
            if self.exhausted {
                return None;
            }
            match self.mode {
                Mode::Descend => {
                    if self.row == n {
                        // A full placement; report it and return to the
                        // caller row without touching any state.
                        self.mode = Mode::Unwind;
                        tracing::trace!(board = %self.board, "solution found");
                        return Some(SearchEvent::Solution {
                            board: self.board.clone(),
                        });
                    }
                    let mut col = self.col;
                    while col < n && !self.conflicts.is_free(self.row, col) {
                        col += 1;
                    }
                    if col == n {
                        // Every column at this row conflicts; pop out.
                        self.mode = Mode::Unwind;
                        continue;
                    }
                    self.conflicts.occupy(self.row, col);
                    self.board.place(self.row, col);
                    let row = self.row;
                    self.row += 1;
                    self.col = 0;
                    tracing::trace!(row, col, "queen placed");
                    return Some(SearchEvent::Place {
                        row,
                        col,
                        board: self.board.clone(),
                    });
                }
                Mode::Unwind => {
                    if self.row == 0 {
                        self.exhausted = true;
                        debug_assert!(self.conflicts.is_empty());
                        debug_assert!(self.board.is_fully_unplaced());
                        tracing::debug!(size = n, "search exhausted");
                        return None;
                    }
                    self.row -= 1;
                    let col = self
                        .board
                        .queen(self.row)
                        .expect("every row above the cursor holds a queen");
                    // Snapshot before clearing: removal events show the
                    // departing queen.
                    let snapshot = self.board.clone();
                    self.conflicts.release(self.row, col);
                    self.board.clear(self.row);
                    self.col = col + 1;
                    self.mode = Mode::Descend;
                    tracing::trace!(row = self.row, col, "queen removed");
                    return Some(SearchEvent::Remove {
                        row: self.row,
                        col,
                        board: snapshot,
                    });
                }
            }
        }
    }
}

impl Iterator for SearchEngine {
    type Item = SearchEvent;

    fn next(&mut self) -> Option<SearchEvent> {
        self.advance()
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
