//! QueenStep Engine - the resumable backtracking search
//!
//! This crate provides [`SearchEngine`], a stepping reimplementation of
//! recursive N-Queens backtracking: each `advance()` call runs the search
//! just far enough to produce the next [`SearchEvent`], then suspends.
//! The caller decides the pace; the engine keeps its position between
//! calls, so a paused run resumes exactly where it left off.

pub mod engine;

pub use engine::SearchEngine;
pub use queenstep_core::SearchEvent;
