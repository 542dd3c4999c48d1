//! QueenStep Core - Core types for the N-Queens search visualizer
//!
//! This crate provides the fundamental abstractions shared by the engine
//! and controller crates:
//! - Board representation with per-row queen placement
//! - Conflict sets for O(1) placement feasibility checks
//! - Search events emitted by the stepping engine
//! - Error types and board-size bounds

pub mod board;
pub mod conflict;
pub mod error;
pub mod event;

use std::time::Duration;

pub use board::Board;
pub use conflict::ConflictSets;
pub use error::{QueenStepError, Result};
pub use event::SearchEvent;

/// Smallest supported board size.
pub const MIN_BOARD_SIZE: usize = 4;

/// Largest supported board size.
pub const MAX_BOARD_SIZE: usize = 20;

/// Upper bound for the delay between controller ticks.
pub const MAX_TICK_DELAY: Duration = Duration::from_millis(500);

/// Checks that a board size is within the supported range.
///
/// Both the engine constructor and the controller call this before any
/// search state is built, so an out-of-range size can never produce an
/// event.
///
/// # Example
///
/// ```
/// use queenstep_core::{validate_board_size, QueenStepError};
///
/// assert!(validate_board_size(8).is_ok());
/// assert_eq!(
///     validate_board_size(3),
///     Err(QueenStepError::InvalidSize { size: 3 })
/// );
/// ```
pub fn validate_board_size(size: usize) -> Result<()> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(QueenStepError::InvalidSize { size })
    }
}

/// Clamps a tick delay into the supported range.
pub fn clamp_tick_delay(delay: Duration) -> Duration {
    delay.min(MAX_TICK_DELAY)
}
