//! The step controller: one engine per run, externally paced.

use std::time::{Duration, Instant};

use queenstep_core::{clamp_tick_delay, validate_board_size, Board, Result, SearchEvent};
use queenstep_engine::SearchEngine;

use crate::state::{Highlight, HighlightKind, RunCounters, RunState};
use crate::timer::TickTimer;

/// Drives consumption of the engine's event stream under pause/resume/
/// reset semantics and the stop-at-first-solution policy.
///
/// The controller exclusively owns its engine instance and never touches
/// it outside a tick. Collaborators poll from their event loop and re-read
/// the observable surface (board, counters, run state, highlight) after
/// every poll that reports a change:
///
/// ```
/// use std::time::Duration;
/// use queenstep_controller::{RunState, StepController};
///
/// let mut controller = StepController::new(4)?;
/// controller.start(4, true, Duration::ZERO)?;
///
/// while controller.run_state() == RunState::Running {
///     controller.poll();
/// }
///
/// // Paused on the first solution of the 4-board.
/// assert_eq!(controller.run_state(), RunState::Paused);
/// assert_eq!(controller.counters().solutions, 1);
/// assert!(controller.board().is_valid_solution());
/// # Ok::<(), queenstep_core::QueenStepError>(())
/// ```
#[derive(Debug)]
pub struct StepController {
    board: Board,
    engine: Option<SearchEngine>,
    state: RunState,
    counters: RunCounters,
    highlight: Option<Highlight>,
    stop_at_first: bool,
    delay: Duration,
    timer: TickTimer,
}

impl StepController {
    /// Creates an idle controller with an all-unplaced board.
    ///
    /// # Errors
    ///
    /// Returns [`QueenStepError::InvalidSize`](queenstep_core::QueenStepError)
    /// if `size` is outside the supported range.
    pub fn new(size: usize) -> Result<Self> {
        validate_board_size(size)?;
        Ok(Self {
            board: Board::unplaced(size),
            engine: None,
            state: RunState::Idle,
            counters: RunCounters::default(),
            highlight: None,
            stop_at_first: true,
            delay: Duration::ZERO,
            timer: TickTimer::new(),
        })
    }

    // === Control operations ===

    /// Starts or resumes a run.
    ///
    /// A fresh board and engine are built (and the counters zeroed) when
    /// the board size changes, the board is still fully unplaced, no
    /// engine is retained, or the previous run completed (a completed
    /// engine is exhausted, so resuming it would replay nothing). Only a
    /// `Paused` run with unchanged size resumes its retained engine,
    /// continuing exactly where it left off.
    ///
    /// The first tick is scheduled immediately; subsequent ticks follow at
    /// the given delay (clamped into the supported range). Calling `start`
    /// while already `Running` is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`QueenStepError::InvalidSize`](queenstep_core::QueenStepError)
    /// for an out-of-range size; the run state and all observable state
    /// are left untouched.
    pub fn start(&mut self, size: usize, stop_at_first: bool, delay: Duration) -> Result<()> {
        if self.state == RunState::Running {
            return Ok(());
        }
        validate_board_size(size)?;

        let fresh = self.board.size() != size
            || self.board.is_fully_unplaced()
            || self.engine.is_none()
            || self.state == RunState::Completed;
        if fresh {
            self.board = Board::unplaced(size);
            self.engine = Some(SearchEngine::new(size)?);
            self.counters = RunCounters::default();
            self.highlight = None;
            tracing::debug!(size, stop_at_first, "fresh run");
        } else {
            tracing::debug!(size, steps = self.counters.steps, "resuming run");
        }

        self.stop_at_first = stop_at_first;
        self.delay = clamp_tick_delay(delay);
        self.state = RunState::Running;
        self.timer.schedule(Instant::now(), Duration::ZERO);
        Ok(())
    }

    /// Suspends a running search.
    ///
    /// Cancels the pending tick before returning, so no further event is
    /// delivered; the engine and its search position are kept untouched.
    /// A no-op in any state but `Running`.
    pub fn pause(&mut self) {
        if self.state != RunState::Running {
            return;
        }
        self.timer.cancel();
        self.state = RunState::Paused;
        tracing::debug!(steps = self.counters.steps, "run paused");
    }

    /// Returns to `Idle`: cancels scheduling, discards the engine, zeroes
    /// the counters, and clears the board.
    ///
    /// Total and idempotent; valid in every state.
    pub fn reset(&mut self) {
        self.timer.cancel();
        self.engine = None;
        self.counters = RunCounters::default();
        self.highlight = None;
        self.board = Board::unplaced(self.board.size());
        self.state = RunState::Idle;
        tracing::debug!("controller reset");
    }

    /// Changes the pacing delay, effective from the next scheduling
    /// decision. An already pending tick keeps its deadline.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = clamp_tick_delay(delay);
    }

    /// Fires at most one due tick, pulling at most one event.
    ///
    /// Returns true if observable state changed. Convenience wrapper over
    /// [`poll_at`](Self::poll_at) using the current instant.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    /// Fires at most one tick due at `now`.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        if self.state != RunState::Running || !self.timer.fire(now) {
            return false;
        }
        self.tick(now);
        true
    }

    fn tick(&mut self, now: Instant) {
        let Some(engine) = self.engine.as_mut() else {
            // Unreachable through the public surface: Running implies a
            // retained engine. Degrade to Completed rather than panic.
            self.state = RunState::Completed;
            return;
        };

        match engine.advance() {
            None => {
                self.state = RunState::Completed;
                self.timer.cancel();
                tracing::debug!(
                    steps = self.counters.steps,
                    solutions = self.counters.solutions,
                    "search exhausted"
                );
            }
            Some(SearchEvent::Place { row, col, board }) => {
                self.counters.steps += 1;
                self.board = board;
                self.highlight = Some(Highlight {
                    row,
                    col,
                    kind: HighlightKind::Placed,
                });
                self.timer.schedule(now, self.delay);
                tracing::trace!(row, col, "tick: place");
            }
            Some(SearchEvent::Remove { row, col, board }) => {
                self.counters.steps += 1;
                self.board = board;
                self.highlight = Some(Highlight {
                    row,
                    col,
                    kind: HighlightKind::Removed,
                });
                self.timer.schedule(now, self.delay);
                tracing::trace!(row, col, "tick: remove");
            }
            Some(SearchEvent::Solution { board }) => {
                self.counters.steps += 1;
                self.counters.solutions += 1;
                self.board = board;
                self.highlight = None;
                if self.stop_at_first {
                    self.timer.cancel();
                    self.state = RunState::Paused;
                    tracing::debug!(solutions = self.counters.solutions, "paused on solution");
                } else {
                    self.timer.schedule(now, self.delay);
                    tracing::trace!(solutions = self.counters.solutions, "tick: solution");
                }
            }
        }
    }

    // === Read surface ===

    /// The externally visible board, replaced by each event's snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Step and solution counters.
    pub fn counters(&self) -> RunCounters {
        self.counters
    }

    /// The current lifecycle phase.
    pub fn run_state(&self) -> RunState {
        self.state
    }

    /// The last placement/removal cell, if any.
    pub fn last_highlight(&self) -> Option<Highlight> {
        self.highlight
    }

    /// The configured board size.
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// Whether the run pauses on the first solution.
    pub fn stop_at_first(&self) -> bool {
        self.stop_at_first
    }

    /// The pacing delay between ticks.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
