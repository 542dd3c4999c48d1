use std::time::{Duration, Instant};

use queenstep_core::QueenStepError;
use queenstep_engine::SearchEngine;
use queenstep_test::{board_from_columns, FIRST_SOLUTION_N4, FIRST_SOLUTION_N4_EVENT_COUNT};

use super::StepController;
use crate::state::{HighlightKind, RunState};

/// Polls with zero-delay pacing until the run leaves `Running`.
fn drive(controller: &mut StepController) {
    let now = Instant::now();
    while controller.run_state() == RunState::Running {
        assert!(controller.poll_at(now), "a running controller must tick");
    }
}

fn total_events(size: usize) -> u64 {
    SearchEngine::new(size).unwrap().count() as u64
}

#[test]
fn fresh_controller_is_idle() {
    let controller = StepController::new(8).unwrap();
    assert_eq!(controller.run_state(), RunState::Idle);
    assert!(controller.board().is_fully_unplaced());
    assert_eq!(controller.board_size(), 8);
    assert_eq!(controller.counters().steps, 0);
    assert_eq!(controller.counters().solutions, 0);
    assert_eq!(controller.last_highlight(), None);
}

#[test]
fn rejects_invalid_sizes() {
    assert_eq!(
        StepController::new(3).err(),
        Some(QueenStepError::InvalidSize { size: 3 })
    );

    let mut controller = StepController::new(4).unwrap();
    for size in [3, 21] {
        assert_eq!(
            controller.start(size, true, Duration::ZERO).err(),
            Some(QueenStepError::InvalidSize { size })
        );
        assert_eq!(controller.run_state(), RunState::Idle);
        assert_eq!(controller.counters().steps, 0);
        assert!(controller.board().is_fully_unplaced());
    }
}

#[test]
fn stop_at_first_pauses_on_the_first_solution() {
    let mut controller = StepController::new(4).unwrap();
    controller.start(4, true, Duration::ZERO).unwrap();
    drive(&mut controller);

    assert_eq!(controller.run_state(), RunState::Paused);
    assert_eq!(controller.counters().steps, FIRST_SOLUTION_N4_EVENT_COUNT);
    assert_eq!(controller.counters().solutions, 1);
    assert_eq!(controller.board(), &board_from_columns(&FIRST_SOLUTION_N4));
    // Solutions clear the placement/removal highlight.
    assert_eq!(controller.last_highlight(), None);
}

#[test]
fn resume_continues_without_replay_or_skip() {
    let mut controller = StepController::new(4).unwrap();
    controller.start(4, true, Duration::ZERO).unwrap();
    drive(&mut controller);
    assert_eq!(controller.run_state(), RunState::Paused);

    // Resume past the first solution and exhaust the tree. The step total
    // must equal the engine's full event count: nothing replayed, nothing
    // skipped.
    controller.start(4, false, Duration::ZERO).unwrap();
    drive(&mut controller);

    assert_eq!(controller.run_state(), RunState::Completed);
    assert_eq!(controller.counters().steps, total_events(4));
    assert_eq!(controller.counters().solutions, 2);
}

#[test]
fn full_enumeration_without_stopping() {
    let mut controller = StepController::new(5).unwrap();
    controller.start(5, false, Duration::ZERO).unwrap();
    drive(&mut controller);

    assert_eq!(controller.run_state(), RunState::Completed);
    assert_eq!(controller.counters().steps, total_events(5));
    assert_eq!(controller.counters().solutions, 10);
    // The final unwind leaves the visible board showing the last removal
    // snapshot; polling a completed controller does nothing further.
    let steps = controller.counters().steps;
    assert!(!controller.poll_at(Instant::now() + Duration::from_secs(1)));
    assert_eq!(controller.counters().steps, steps);
}

#[test]
fn pause_cancels_the_pending_tick() {
    let mut controller = StepController::new(6).unwrap();
    controller.start(6, false, Duration::ZERO).unwrap();
    let now = Instant::now();
    assert!(controller.poll_at(now));
    let steps = controller.counters().steps;

    controller.pause();
    assert_eq!(controller.run_state(), RunState::Paused);

    // Even a long-overdue deadline must not deliver an event after pause.
    assert!(!controller.poll_at(now + Duration::from_secs(60)));
    assert_eq!(controller.counters().steps, steps);
}

#[test]
fn pause_outside_running_is_a_no_op() {
    let mut controller = StepController::new(4).unwrap();
    controller.pause();
    assert_eq!(controller.run_state(), RunState::Idle);

    controller.start(4, false, Duration::ZERO).unwrap();
    drive(&mut controller);
    controller.pause();
    assert_eq!(controller.run_state(), RunState::Completed);
}

#[test]
fn reset_is_total_from_every_state() {
    let mut controller = StepController::new(4).unwrap();

    // Idle.
    controller.reset();
    assert_eq!(controller.run_state(), RunState::Idle);

    // Running, with a tick pending.
    controller.start(4, false, Duration::ZERO).unwrap();
    let now = Instant::now();
    assert!(controller.poll_at(now));
    controller.reset();
    assert_eq!(controller.run_state(), RunState::Idle);
    assert!(controller.board().is_fully_unplaced());
    assert_eq!(controller.counters().steps, 0);
    assert_eq!(controller.last_highlight(), None);
    assert!(!controller.poll_at(now + Duration::from_secs(1)));

    // Paused.
    controller.start(4, true, Duration::ZERO).unwrap();
    drive(&mut controller);
    controller.reset();
    assert_eq!(controller.run_state(), RunState::Idle);
    assert_eq!(controller.counters().solutions, 0);

    // Completed.
    controller.start(4, false, Duration::ZERO).unwrap();
    drive(&mut controller);
    controller.reset();
    assert_eq!(controller.run_state(), RunState::Idle);
}

#[test]
fn start_after_completion_runs_fresh() {
    let mut controller = StepController::new(4).unwrap();
    controller.start(4, false, Duration::ZERO).unwrap();
    drive(&mut controller);
    assert_eq!(controller.run_state(), RunState::Completed);

    controller.start(4, false, Duration::ZERO).unwrap();
    assert_eq!(controller.run_state(), RunState::Running);
    assert_eq!(controller.counters().steps, 0);

    let now = Instant::now();
    assert!(controller.poll_at(now));
    // The fresh engine restarts at the very first placement.
    assert_eq!(controller.counters().steps, 1);
    let highlight = controller.last_highlight().unwrap();
    assert_eq!((highlight.row, highlight.col), (0, 0));
    assert_eq!(highlight.kind, HighlightKind::Placed);
}

#[test]
fn changing_size_discards_the_paused_engine() {
    let mut controller = StepController::new(4).unwrap();
    controller.start(4, true, Duration::ZERO).unwrap();
    drive(&mut controller);
    assert_eq!(controller.run_state(), RunState::Paused);

    controller.start(5, true, Duration::ZERO).unwrap();
    assert_eq!(controller.board_size(), 5);
    assert_eq!(controller.counters().steps, 0);
    assert_eq!(controller.counters().solutions, 0);
}

#[test]
fn start_while_running_is_a_no_op() {
    let mut controller = StepController::new(4).unwrap();
    controller.start(4, false, Duration::ZERO).unwrap();
    let now = Instant::now();
    for _ in 0..3 {
        assert!(controller.poll_at(now));
    }
    let steps = controller.counters().steps;

    controller.start(4, true, Duration::ZERO).unwrap();
    assert_eq!(controller.run_state(), RunState::Running);
    assert_eq!(controller.counters().steps, steps);
    // The stop policy is also untouched while running.
    assert!(!controller.stop_at_first());
}

#[test]
fn delay_paces_ticks() {
    let mut controller = StepController::new(6).unwrap();
    controller
        .start(6, false, Duration::from_millis(100))
        .unwrap();

    // First tick is scheduled immediately.
    let now = Instant::now();
    assert!(controller.poll_at(now));
    // The next is not due until the full delay has elapsed.
    assert!(!controller.poll_at(now + Duration::from_millis(99)));
    assert!(controller.poll_at(now + Duration::from_millis(100)));
    assert_eq!(controller.counters().steps, 2);
}

#[test]
fn delay_is_clamped() {
    let mut controller = StepController::new(4).unwrap();
    controller.start(4, false, Duration::from_secs(30)).unwrap();
    assert_eq!(controller.delay(), Duration::from_millis(500));
}

#[test]
fn set_delay_applies_to_the_next_schedule() {
    let mut controller = StepController::new(6).unwrap();
    controller.start(6, false, Duration::ZERO).unwrap();
    let now = Instant::now();
    assert!(controller.poll_at(now));

    controller.set_delay(Duration::from_millis(200));
    // The pending tick keeps its zero-delay deadline...
    assert!(controller.poll_at(now));
    // ...and the one it schedules uses the new delay.
    assert!(!controller.poll_at(now + Duration::from_millis(199)));
    assert!(controller.poll_at(now + Duration::from_millis(200)));
}

#[test]
fn highlights_follow_placements_and_removals() {
    let mut controller = StepController::new(4).unwrap();
    controller.start(4, false, Duration::ZERO).unwrap();
    let now = Instant::now();

    assert!(controller.poll_at(now));
    let highlight = controller.last_highlight().unwrap();
    assert_eq!((highlight.row, highlight.col), (0, 0));
    assert_eq!(highlight.kind, HighlightKind::Placed);

    // Ticks 2 and 3 on the 4-board: place (1,2), then back out of (1,2).
    assert!(controller.poll_at(now));
    assert!(controller.poll_at(now));
    let highlight = controller.last_highlight().unwrap();
    assert_eq!((highlight.row, highlight.col), (1, 2));
    assert_eq!(highlight.kind, HighlightKind::Removed);
    // The removal snapshot still shows the departing queen.
    assert_eq!(controller.board().queen(1), Some(2));
}
