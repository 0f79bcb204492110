//! Tic-Tac-Toe board and side panel rendering.

use super::game_common::{
    create_game_layout, render_game_over_banner, render_info_panel_frame, render_status_bar,
    render_thinking_status_bar, GameResultType,
};
use crate::game::{Cell, GameSession, GameStatus, Mark, Mode, BOARD_SIDE};
use crate::input::Cursor;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 48;
const BOARD_HEIGHT: u16 = (BOARD_SIDE * 2 - 1) as u16;
const BOARD_WIDTH: u16 = (BOARD_SIDE * 4 - 1) as u16;

const CONTROLS: &[(&str, &str)] = &[
    ("[Arrows]", "Move"),
    ("[Enter]", "Place"),
    ("[M]", "Mode"),
    ("[R]", "Reset"),
    ("[Q]", "Quit"),
];

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::LightCyan,
        Mark::O => Color::LightMagenta,
    }
}

/// Render the whole game screen.
pub fn render_game_scene(frame: &mut Frame, area: Rect, session: &GameSession, cursor: &Cursor) {
    let layout = create_game_layout(
        frame,
        area,
        " Tic Tac Toe ",
        Color::Magenta,
        BOARD_HEIGHT,
        INFO_PANEL_WIDTH,
    );

    render_title(frame, layout.title, session);
    render_board(frame, layout.content, session, cursor);
    render_status_bar_content(frame, layout.status_bar, session);
    render_info_panel(frame, layout.info_panel, session);

    match session.status() {
        GameStatus::Won(mark) => render_game_over_banner(
            frame,
            layout.content,
            GameResultType::Win,
            &format!("{} ({}) wins!", mark.label(), mark),
            "[R] New game  [M] Switch mode",
        ),
        GameStatus::Drawn => render_game_over_banner(
            frame,
            layout.content,
            GameResultType::Draw,
            "Nobody completed a line.",
            "[R] New game  [M] Switch mode",
        ),
        GameStatus::InProgress => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect, session: &GameSession) {
    let color = match session.status() {
        GameStatus::InProgress => Color::White,
        GameStatus::Won(mark) => mark_color(mark),
        GameStatus::Drawn => Color::Yellow,
    };
    let title = Paragraph::new(Line::from(Span::styled(
        session.display_message(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_board(frame: &mut Frame, area: Rect, session: &GameSession, cursor: &Cursor) {
    let y_offset = area.y + (area.height.saturating_sub(BOARD_HEIGHT)) / 2;
    let x_offset = area.x + (area.width.saturating_sub(BOARD_WIDTH)) / 2;

    let board = session.board();
    let winning = session.winning_cells();
    let grid_style = Style::default().fg(Color::DarkGray);

    for row in 0..BOARD_SIDE {
        let mut spans = Vec::new();
        for col in 0..BOARD_SIDE {
            let index = row * BOARD_SIDE + col;
            let is_cursor = cursor.index() == index && !board.locked;
            let is_winning = winning.is_some_and(|cells| cells.contains(&index));

            let (text, mut style) = match board.cells[index] {
                Cell::Marked(mark) => (
                    format!(" {} ", mark),
                    Style::default()
                        .fg(mark_color(mark))
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::Empty => (format!(" {} ", index + 1), Style::default().fg(Color::DarkGray)),
            };
            if is_winning {
                style = style.fg(Color::Green);
            }
            if is_cursor {
                style = style.bg(Color::DarkGray).fg(Color::Yellow);
            }

            spans.push(Span::styled(text, style));
            if col < BOARD_SIDE - 1 {
                spans.push(Span::styled("│", grid_style));
            }
        }

        let y = y_offset + (row * 2) as u16;
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_offset, y, BOARD_WIDTH, 1).intersection(area),
        );

        if row < BOARD_SIDE - 1 {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled("───┼───┼───", grid_style))),
                Rect::new(x_offset, y + 1, BOARD_WIDTH, 1).intersection(area),
            );
        }
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, session: &GameSession) {
    if session.computer_pending() {
        render_thinking_status_bar(frame, area, "Computer is thinking...", CONTROLS);
        return;
    }

    let (text, color) = match session.status() {
        GameStatus::InProgress => {
            let mark = session.board().current_mark();
            (format!("{} to move", mark.label()), mark_color(mark))
        }
        _ => ("Game over".to_string(), Color::Gray),
    };
    render_status_bar(frame, area, &text, color, CONTROLS);
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &GameSession) {
    let inner = render_info_panel_frame(frame, area);

    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let mut lines: Vec<Line> = vec![heading("MODE")];
    for mode in Mode::ALL {
        let selected = mode == session.mode();
        let marker = if selected { "▸ " } else { "  " };
        let style = if selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(
            format!("{}{} ({})", marker, mode.name(), mode.as_str()),
            style,
        )));
    }
    lines.push(Line::from(Span::styled(
        "[S] Single  [T] Two players",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    lines.push(heading("GAME HISTORY"));
    let history = session.history();
    if history.is_empty() {
        lines.push(Line::from(Span::styled(
            "No wins yet.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (entry, text) in history.entries().zip(history.display_lines()) {
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(mark_color(entry.winner)),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_string(session: &GameSession) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_game_scene(frame, area, session, &Cursor::new());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_default_title_and_mode() {
        let screen = render_to_string(&GameSession::new(Mode::TwoPlayer));
        assert!(screen.contains("Tic Tac Toe Game In Rust"));
        assert!(screen.contains("Two Players (multi)"));
        assert!(screen.contains("No wins yet."));
    }

    #[test]
    fn test_renders_win_and_history() {
        let mut session = GameSession::new(Mode::TwoPlayer);
        for i in [0, 3, 1, 4, 2] {
            session.play(i);
        }
        let screen = render_to_string(&session);
        assert!(screen.contains("Congratulations X Wins"));
        assert!(screen.contains("Game 1: Cross won at"));
    }

    #[test]
    fn test_renders_draw_title() {
        let mut session = GameSession::new(Mode::TwoPlayer);
        for i in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            session.play(i);
        }
        assert!(render_to_string(&session).contains("It's a Draw!"));
    }
}
