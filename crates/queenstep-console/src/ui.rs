//! Board and status rendering.

use num_format::{Locale, ToFormattedString};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use queenstep_controller::{Highlight, HighlightKind, RunState};

use crate::app::App;

const LIGHT_SQUARE: Color = Color::Rgb(238, 238, 238);
const DARK_SQUARE: Color = Color::Rgb(153, 153, 153);
const PLACED_SQUARE: Color = Color::Rgb(120, 190, 90);
const REMOVED_SQUARE: Color = Color::Rgb(220, 100, 100);
const QUEEN: Color = Color::Rgb(30, 64, 175);

pub fn draw(frame: &mut Frame, app: &App) {
    let [status_area, board_area, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    draw_status(frame, status_area, app);
    draw_board(frame, board_area, app);
    draw_help(frame, help_area, app);
}

fn state_span(state: RunState) -> Span<'static> {
    let style = match state {
        RunState::Idle => Style::new().dim(),
        RunState::Running => Style::new().fg(Color::Green).bold(),
        RunState::Paused => Style::new().fg(Color::Yellow).bold(),
        RunState::Completed => Style::new().fg(Color::Blue).bold(),
    };
    Span::styled(state.to_string(), style)
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let counters = app.controller().counters();
    let line = Line::from(vec![
        state_span(app.controller().run_state()),
        Span::raw("   steps "),
        Span::raw(counters.steps.to_formatted_string(&Locale::en)).bold(),
        Span::raw("   solutions "),
        Span::raw(counters.solutions.to_formatted_string(&Locale::en)).bold(),
        Span::raw(format!("   size {}", app.pending_board_size())),
        Span::raw(format!("   delay {} ms", app.delay_ms())),
        Span::raw(if app.stop_at_first() {
            "   stop at first solution"
        } else {
            "   enumerate all solutions"
        }),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(Block::bordered().title("QueenStep")),
        area,
    );
}

fn square_style(row: usize, col: usize, highlight: Option<Highlight>) -> Style {
    let background = match highlight {
        Some(h) if h.row == row && h.col == col => match h.kind {
            HighlightKind::Placed => PLACED_SQUARE,
            HighlightKind::Removed => REMOVED_SQUARE,
        },
        _ => {
            if (row + col) % 2 == 0 {
                LIGHT_SQUARE
            } else {
                DARK_SQUARE
            }
        }
    };
    Style::new().bg(background).fg(QUEEN)
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board = app.controller().board();
    let highlight = app.controller().last_highlight();
    let n = board.size();

    // Each square is two columns wide and one row tall; center the board
    // in whatever space the terminal currently gives us.
    let width = (n * 2) as u16;
    let left = area.width.saturating_sub(width) / 2;
    let top = area.height.saturating_sub(n as u16) / 2;

    let mut lines: Vec<Line> = Vec::with_capacity(top as usize + n);
    for _ in 0..top {
        lines.push(Line::default());
    }
    for row in 0..n {
        let mut spans = vec![Span::raw(" ".repeat(left as usize))];
        for col in 0..n {
            let glyph = if board.queen(row) == Some(col) {
                "Q "
            } else {
                "  "
            };
            spans.push(Span::styled(glyph, square_style(row, col, highlight)));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn key_span(label: &str, enabled: bool) -> Span<'static> {
    if enabled {
        Span::raw(format!("{label}  "))
    } else {
        Span::styled(format!("{label}  "), Style::new().dim())
    }
}

fn draw_help(frame: &mut Frame, area: Rect, app: &App) {
    let affordances = app.affordances();
    let line = Line::from(vec![
        key_span("[s] start", affordances.can_start),
        key_span("[p] pause", affordances.can_pause),
        key_span("[r] reset", true),
        key_span("[+/-] size", affordances.can_edit_settings),
        key_span("[ [/] ] delay", true),
        key_span("[f] stop policy", affordances.can_edit_settings),
        key_span("[q] quit", true),
    ]);
    frame.render_widget(Paragraph::new(line).block(Block::bordered()), area);
}
