//! QueenStep Controller - externally paced consumption of search events
//!
//! This crate mediates between the engine's event stream and the
//! human-paced consumption rate a visualization wants:
//! - [`StepController`] owns one engine per run, the run-state machine,
//!   counters, and the stop-at-first-solution policy
//! - [`TickTimer`] holds the single cancellable deadline that paces ticks
//! - [`RunState`], [`RunCounters`], [`Highlight`] form the read surface
//!   rendering collaborators re-read after every tick
//!
//! Everything is single-threaded and cooperative: the owner calls
//! [`StepController::poll`] from its event loop; each poll fires at most
//! one due tick, each tick pulls at most one event, and `pause`/`reset`
//! cancel the pending deadline before they return, so no event is ever
//! delivered after either takes effect.

pub mod controller;
pub mod state;
pub mod timer;

pub use controller::StepController;
pub use state::{Highlight, HighlightKind, RunCounters, RunState};
pub use timer::TickTimer;
