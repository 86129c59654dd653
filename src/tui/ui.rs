//! UI rendering for the TUI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::core::{format_seconds, format_timestamp, PositionSource, TrackingMode};
use crate::tui::app::{App, PromptKind};
use crate::tui::event::HELP;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_header(frame, app, chunks[0]);
    render_points(frame, app, body[0]);
    render_durations(frame, app, body[1]);
    render_status_bar(frame, app, chunks[2]);
}

/// Render the playhead, mode and play state.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let position = format_timestamp(app.clock.position());
    let playhead = match app.clock.length() {
        Some(len) => format!("{position} / {}", format_timestamp(len)),
        None => position,
    };
    let state = if app.clock.is_playing() { "▶" } else { "⏸" };

    let line = Line::from(vec![
        Span::styled(
            format!(" {state} {playhead} "),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} mode ", app.store.mode()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!(" {:.0} fps ", app.clock.frame_rate()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" flightmark "),
    );

    frame.render_widget(header, area);
}

fn render_points(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .store
        .points()
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let is_selected = i == app.selected;
            let spans = vec![
                Span::styled(
                    format!("#{:<4}", point.id.0),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{}  ", format_timestamp(point.time)),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    &point.label,
                    Style::default().add_modifier(if is_selected {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    }),
                ),
            ];

            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let title = format!(" Points ({}) ", app.store.len());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(title),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    if !app.store.is_empty() {
        state.select(Some(app.selected));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_durations(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let summary = app.summary();
    let mut lines: Vec<Line<'_>> = Vec::new();

    if summary.pairs.is_empty() {
        lines.push(Line::styled(
            "Mark two points to form a pair",
            Style::default().fg(Color::DarkGray),
        ));
    }

    for pair in &summary.pairs {
        lines.push(Line::from(vec![
            Span::raw(format!(
                "{} → {}  ",
                format_timestamp(pair.start),
                format_timestamp(pair.end)
            )),
            Span::styled(format_seconds(pair.duration), Style::default().fg(Color::Green)),
        ]));
    }

    if summary.mode == TrackingMode::Advanced && summary.point_count % 2 == 1 {
        lines.push(Line::styled(
            "Last point is unpaired",
            Style::default().fg(Color::Yellow),
        ));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("Total:     ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format_seconds(summary.total)),
    ]));
    if let Some(estimated) = summary.estimated {
        lines.push(Line::from(vec![
            Span::styled("Estimated: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format_seconds(estimated)),
        ]));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Durations "),
    );

    frame.render_widget(panel, area);
}

/// Render the status bar, or the prompt while one is open.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if let Some(prompt) = &app.prompt {
        let label = match prompt.kind {
            PromptKind::AddLabel { time } => format!("Label for {}: ", format_timestamp(time)),
            PromptKind::EditLabel { id } => format!("New label for #{id}: "),
        };
        let line = Line::from(vec![
            Span::styled(label, Style::default().fg(Color::Yellow)),
            Span::raw(format!("{}_", prompt.buffer)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let status_text = app.status.as_deref().unwrap_or(HELP);
    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Calculator, PlaybackClock, TimePointStore};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_render_shows_points_and_estimate() {
        let mut store = TimePointStore::new(TrackingMode::Simple);
        store.add("Takeoff", 0.0);
        store.add("Landing", 9.0);
        let app = App::new(store, PlaybackClock::default(), Calculator::default(), 1.0);

        let screen = draw(&app);
        assert!(screen.contains("Takeoff"));
        assert!(screen.contains("Landing"));
        assert!(screen.contains("Simple mode"));
        assert!(screen.contains("9.000s"));
        assert!(screen.contains("7.020s"));
    }

    #[test]
    fn test_render_prompt() {
        let mut app = App::new(
            TimePointStore::new(TrackingMode::Advanced),
            PlaybackClock::default(),
            Calculator::default(),
            1.0,
        );
        app.begin_add();
        app.prompt_push('Q');
        let screen = draw(&app);
        assert!(screen.contains("Label for 00:00.000"));
        assert!(screen.contains("Q_"));
    }
}
