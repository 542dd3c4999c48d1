//! Application state and input handling for the terminal frontend.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::DefaultTerminal;

use queenstep_config::VisualizerConfig;
use queenstep_controller::{RunState, StepController};
use queenstep_core::{MAX_BOARD_SIZE, MAX_TICK_DELAY, MIN_BOARD_SIZE};

/// Milliseconds added or removed per delay keypress.
const DELAY_STEP_MS: u64 = 20;

/// How long one loop iteration waits for input before polling the
/// controller again.
const INPUT_POLL: Duration = Duration::from_millis(15);

/// Which controls are active in a given run state.
///
/// A pure mapping from [`RunState`]; control enablement is never tracked
/// separately from the run state it derives from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    /// Start (or resume) is meaningful.
    pub can_start: bool,
    /// Pause is meaningful.
    pub can_pause: bool,
    /// Size / stop-policy edits apply to the next run.
    pub can_edit_settings: bool,
}

impl Affordances {
    pub fn for_state(state: RunState) -> Self {
        match state {
            RunState::Running => Self {
                can_start: false,
                can_pause: true,
                can_edit_settings: false,
            },
            RunState::Idle | RunState::Paused | RunState::Completed => Self {
                can_start: true,
                can_pause: false,
                can_edit_settings: true,
            },
        }
    }
}

/// Counters reported after the frontend exits.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub steps: u64,
    pub solutions: u64,
    pub board_size: usize,
}

/// The terminal application: one controller plus the pending settings
/// edited between runs.
pub struct App {
    controller: StepController,
    board_size: usize,
    delay_ms: u64,
    stop_at_first: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: &VisualizerConfig) -> anyhow::Result<Self> {
        let controller = StepController::new(config.board_size)?;
        Ok(Self {
            controller,
            board_size: config.board_size,
            delay_ms: config.delay_ms,
            stop_at_first: config.stop_at_first,
            should_quit: false,
        })
    }

    /// Runs the draw/input/poll loop until the user quits.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<RunSummary> {
        while !self.should_quit {
            terminal.draw(|frame| crate::ui::draw(frame, &self))?;
            if event::poll(INPUT_POLL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
            self.controller.poll();
        }

        let counters = self.controller.counters();
        Ok(RunSummary {
            steps: counters.steps,
            solutions: counters.solutions,
            board_size: self.controller.board_size(),
        })
    }

    pub fn controller(&self) -> &StepController {
        &self.controller
    }

    pub fn pending_board_size(&self) -> usize {
        self.board_size
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn stop_at_first(&self) -> bool {
        self.stop_at_first
    }

    pub fn affordances(&self) -> Affordances {
        Affordances::for_state(self.controller.run_state())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let affordances = self.affordances();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('s') | KeyCode::Enter if affordances.can_start => {
                // Sizes stay in range via the +/- handlers, so start
                // cannot reject them.
                if let Err(err) = self.controller.start(
                    self.board_size,
                    self.stop_at_first,
                    Duration::from_millis(self.delay_ms),
                ) {
                    tracing::warn!(%err, "start rejected");
                }
            }
            KeyCode::Char('p') if affordances.can_pause => self.controller.pause(),
            KeyCode::Char('r') => self.controller.reset(),
            KeyCode::Char('+') | KeyCode::Char('=') if affordances.can_edit_settings => {
                if self.board_size < MAX_BOARD_SIZE {
                    self.board_size += 1;
                }
            }
            KeyCode::Char('-') if affordances.can_edit_settings => {
                if self.board_size > MIN_BOARD_SIZE {
                    self.board_size -= 1;
                }
            }
            KeyCode::Char(']') => {
                let max = MAX_TICK_DELAY.as_millis() as u64;
                self.delay_ms = (self.delay_ms + DELAY_STEP_MS).min(max);
                self.controller.set_delay(Duration::from_millis(self.delay_ms));
            }
            KeyCode::Char('[') => {
                self.delay_ms = self.delay_ms.saturating_sub(DELAY_STEP_MS);
                self.controller.set_delay(Duration::from_millis(self.delay_ms));
            }
            KeyCode::Char('f') if affordances.can_edit_settings => {
                self.stop_at_first = !self.stop_at_first;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_locks_settings() {
        let affordances = Affordances::for_state(RunState::Running);
        assert!(!affordances.can_start);
        assert!(affordances.can_pause);
        assert!(!affordances.can_edit_settings);
    }

    #[test]
    fn every_other_state_allows_starting() {
        for state in [RunState::Idle, RunState::Paused, RunState::Completed] {
            let affordances = Affordances::for_state(state);
            assert!(affordances.can_start);
            assert!(!affordances.can_pause);
            assert!(affordances.can_edit_settings);
        }
    }
}
