//! Run state, counters, and the last-action highlight.

use std::fmt;

/// The controller's coarse lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// No active engine; the board is all-unplaced.
    #[default]
    Idle,

    /// A tick is scheduled; events are being consumed.
    Running,

    /// The engine is suspended but retained, resumable via `start`.
    Paused,

    /// The search tree is fully explored; a new `start` runs fresh.
    Completed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Idle => write!(f, "idle"),
            RunState::Running => write!(f, "running"),
            RunState::Paused => write!(f, "paused"),
            RunState::Completed => write!(f, "completed"),
        }
    }
}

/// Counters accumulated over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunCounters {
    /// Events delivered so far (placements, removals, and solutions).
    pub steps: u64,
    /// Solution events delivered so far.
    pub solutions: u64,
}

/// Whether the last event put a queen down or took one off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    Placed,
    Removed,
}

/// The cell affected by the most recent placement or removal.
///
/// Cleared on solutions, resets, and fresh starts; rendering collaborators
/// use it to tint the last-touched square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub row: usize,
    pub col: usize,
    pub kind: HighlightKind,
}
