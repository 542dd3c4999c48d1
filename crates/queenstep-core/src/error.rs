//! Error types for QueenStep.

use thiserror::Error;

use crate::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Main error type for QueenStep operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueenStepError {
    /// Board size outside the supported range.
    #[error("invalid board size {size}: expected {min} to {max}", min = MIN_BOARD_SIZE, max = MAX_BOARD_SIZE)]
    InvalidSize { size: usize },
}

/// Result type alias for QueenStep operations.
pub type Result<T> = std::result::Result<T, QueenStepError>;
